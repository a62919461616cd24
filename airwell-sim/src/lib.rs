// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated readings for the Airwell unit.
//!
//! There is no hardware behind these sensors: [`generate`] draws a first value
//! per sensor and [`perturbed_value`] draws the value applied by each periodic
//! update. Both take the random source as a parameter so callers can seed it.
//!
//! ```
//! use airwell_core::{ConfigTable, SimulationSettings};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let table = ConfigTable::default_table();
//! let mut rng = StdRng::seed_from_u64(42);
//! let readings = airwell_sim::generate(table.sensors(), &SimulationSettings::default(), &mut rng);
//!
//! assert_eq!(readings.len(), table.len());
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod distribution;
pub mod generator;

pub use self::distribution::BaseDistribution;
pub use self::generator::{clamp_to_range, generate, perturbed_value, round2};
