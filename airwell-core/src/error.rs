// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Airwell sensor simulation
//!
//! Only configuration and runtime-setup problems are errors. Data-level
//! anomalies (an unknown sensor id, a simulated sensor fault) are carried as
//! data and never surface here.
//!
//! # Examples
//!
//! ```
//! use airwell_core::{AirwellError, Result};
//!
//! fn check_interval(ms: u64) -> Result<()> {
//!     if ms == 0 {
//!         return Err(AirwellError::InvalidInterval);
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_interval(0).is_err());
//! ```

use std::path::PathBuf;

/// Root error type for all Airwell operations
#[derive(Debug, thiserror::Error)]
pub enum AirwellError {
    /// A sensor's legal range is empty or not finite
    #[error("Sensor {id}: invalid range [{min}, {max}]")]
    InvalidRange {
        /// Offending sensor id
        id: String,
        /// Configured lower bound
        min: f64,
        /// Configured upper bound
        max: f64,
    },

    /// Warning/critical thresholds fall outside the range or are out of order
    #[error("Sensor {id}: invalid threshold: {context}")]
    InvalidThreshold {
        /// Offending sensor id
        id: String,
        /// What is wrong with the thresholds
        context: String,
    },

    /// Two sensors in one table share an id
    #[error("Duplicate sensor id: {0}")]
    DuplicateSensorId(String),

    /// A sensor was configured with an empty id
    #[error("Sensor id must not be empty")]
    EmptySensorId,

    /// A configuration table without sensors
    #[error("Sensor table must contain at least one sensor")]
    EmptyTable,

    /// A simulation setting is out of its legal range
    #[error("Invalid simulation setting: {context}")]
    InvalidSetting {
        /// Description of the rejected setting
        context: String,
    },

    /// Real-time updates were requested with a zero interval
    #[error("Update interval must be greater than zero")]
    InvalidInterval,

    /// The configuration document is not valid TOML or has the wrong shape
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("Cannot read configuration {path}: {source}")]
    ConfigIo {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A periodic task was started outside of a Tokio runtime
    #[error("No Tokio runtime is available to drive real-time updates")]
    NoRuntime,
}

impl AirwellError {
    /// Create a threshold error for the given sensor
    pub fn invalid_threshold(id: impl Into<String>, context: impl Into<String>) -> Self {
        Self::InvalidThreshold {
            id: id.into(),
            context: context.into(),
        }
    }

    /// Create a settings error with the given context
    pub fn invalid_setting(context: impl Into<String>) -> Self {
        Self::InvalidSetting {
            context: context.into(),
        }
    }

    /// Check if this error comes from the configuration itself
    ///
    /// Configuration errors are fixed by editing the sensor table or the
    /// simulation settings; the others depend on how the caller runs the
    /// manager.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. }
                | Self::InvalidThreshold { .. }
                | Self::DuplicateSensorId(_)
                | Self::EmptySensorId
                | Self::EmptyTable
                | Self::InvalidSetting { .. }
                | Self::ConfigParse(_)
                | Self::ConfigIo { .. }
        )
    }
}

/// Specialized Result type for Airwell operations
pub type Result<T> = std::result::Result<T, AirwellError>;
