// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor state manager for the Airwell unit.
//!
//! [`SensorDataManager`] owns the current reading of every configured sensor,
//! notifies subscribers synchronously on every change and can drive a
//! real-time update cycle that perturbs one random sensor per tick.
//!
//! Subscribers choose between a callback ([`SensorDataManager::subscribe`],
//! returning a [`Subscription`]) and an async stream
//! ([`SensorDataManager::updates`], returning a [`ReadingStream`]).

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod logging;

pub mod listener_registry;
pub mod reading_stream;
pub mod sensor_data_manager;
pub mod subscription;

pub use self::listener_registry::{Listener, ListenerId};
pub use self::reading_stream::ReadingStream;
pub use self::sensor_data_manager::SensorDataManager;
pub use self::subscription::Subscription;
