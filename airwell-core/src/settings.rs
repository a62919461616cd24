// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{AirwellError, Result};
use core::time::Duration;
use serde::Deserialize;

/// Tunable parameters of the simulation.
///
/// Missing fields in a configuration document fall back to the defaults
/// listed on each field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Chance that a freshly generated reading is flagged as a fault. Default `0.05`.
    pub error_probability: f64,
    /// Jitter width of a perturbation, as a fraction of the sensor range. Default `0.3`.
    pub perturbation_ratio: f64,
    /// Interval used by `start_real_time_updates_default`. Default `5000`.
    pub update_interval_ms: u64,
    /// Location label attached to every reading.
    pub location: String,
    /// Seed for a reproducible random source; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            error_probability: 0.05,
            perturbation_ratio: 0.3,
            update_interval_ms: 5000,
            location: "Main Unit - Hyderabad".to_string(),
            seed: None,
        }
    }
}

impl SimulationSettings {
    /// Default settings with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    /// # Errors
    ///
    /// Returns [`AirwellError::InvalidSetting`] when a probability or ratio
    /// is outside `[0, 1]` or the interval is zero.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.error_probability) {
            return Err(AirwellError::invalid_setting(format!(
                "error_probability {} outside [0, 1]",
                self.error_probability
            )));
        }
        if !(0.0..=1.0).contains(&self.perturbation_ratio) {
            return Err(AirwellError::invalid_setting(format!(
                "perturbation_ratio {} outside [0, 1]",
                self.perturbation_ratio
            )));
        }
        if self.update_interval_ms == 0 {
            return Err(AirwellError::invalid_setting(
                "update_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }
}
