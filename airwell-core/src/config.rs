// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! TOML configuration for a simulated unit.
//!
//! A document has a `[simulation]` table with [`SimulationSettings`] and one
//! `[[sensors]]` entry per [`SensorConfig`]. The reference unit's document is
//! compiled into the crate and available through [`AirwellConfig::embedded`].

use crate::{AirwellError, ConfigTable, Result, SensorConfig, SimulationSettings};
use serde::Deserialize;
use std::path::Path;

const EMBEDDED_CONFIG: &str = include_str!("../config/airwell.toml");

/// Unvalidated contents of a configuration document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirwellConfig {
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub sensors: Vec<SensorConfig>,
}

impl AirwellConfig {
    /// Load the configuration compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`AirwellError::ConfigParse`] if the embedded document is malformed.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// # Errors
    ///
    /// Returns [`AirwellError::ConfigParse`] for invalid TOML or a wrong shape.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// # Errors
    ///
    /// Returns [`AirwellError::ConfigIo`] when the file cannot be read, or
    /// [`AirwellError::ConfigParse`] when its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| AirwellError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate and split into the sensor table and the simulation settings.
    ///
    /// # Errors
    ///
    /// Returns the first settings or table validation error.
    pub fn into_parts(self) -> Result<(ConfigTable, SimulationSettings)> {
        self.simulation.validate()?;
        let table = ConfigTable::new(self.sensors)?;
        Ok((table, self.simulation))
    }
}
