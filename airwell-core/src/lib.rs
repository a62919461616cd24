// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod config;
pub mod config_table;
pub mod error;
pub mod periodic_task;
pub mod quantity;
pub mod sensor_config;
pub mod sensor_reading;
pub mod settings;
pub mod stop_token;

pub use self::config::AirwellConfig;
pub use self::config_table::ConfigTable;
pub use self::error::{AirwellError, Result};
pub use self::periodic_task::PeriodicTask;
pub use self::quantity::QuantityType;
pub use self::sensor_config::SensorConfig;
pub use self::sensor_reading::{ReadingStatus, SensorReading};
pub use self::settings::SimulationSettings;
pub use self::stop_token::{StopToken, Stopped};
