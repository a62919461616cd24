// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{AirwellError, QuantityType, Result};
use serde::Deserialize;

/// Static definition of one physical sensor.
///
/// Configs are defined once at start-up and never mutated. The legal range
/// `[min_value, max_value]` is inclusive; thresholds are optional and, when
/// present, must lie inside the range with `warning <= critical`. Use
/// [`SensorConfig::validate`] (or build a [`ConfigTable`](crate::ConfigTable))
/// to enforce this.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorConfig {
    pub id: String,
    pub quantity: QuantityType,
    pub name: String,
    pub unit: String,
    pub min_value: f64,
    pub max_value: f64,
    #[serde(default)]
    pub warning_threshold: Option<f64>,
    #[serde(default)]
    pub critical_threshold: Option<f64>,
}

impl SensorConfig {
    /// Creates a config without thresholds.
    pub fn new(
        id: impl Into<String>,
        quantity: QuantityType,
        name: impl Into<String>,
        unit: impl Into<String>,
        min_value: f64,
        max_value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            quantity,
            name: name.into(),
            unit: unit.into(),
            min_value,
            max_value,
            warning_threshold: None,
            critical_threshold: None,
        }
    }

    /// Sets the warning and critical thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, warning: Option<f64>, critical: Option<f64>) -> Self {
        self.warning_threshold = warning;
        self.critical_threshold = critical;
        self
    }

    /// Centre of the legal range.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min_value + self.max_value) / 2.0
    }

    /// Width of the legal range.
    #[must_use]
    pub fn range_width(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Whether `value` lies inside the inclusive legal range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }

    /// Checks the range and threshold invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AirwellError::EmptySensorId`], [`AirwellError::InvalidRange`]
    /// or [`AirwellError::InvalidThreshold`] when an invariant is broken.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(AirwellError::EmptySensorId);
        }

        if !self.min_value.is_finite()
            || !self.max_value.is_finite()
            || self.min_value > self.max_value
        {
            return Err(AirwellError::InvalidRange {
                id: self.id.clone(),
                min: self.min_value,
                max: self.max_value,
            });
        }

        for (label, threshold) in [
            ("warning", self.warning_threshold),
            ("critical", self.critical_threshold),
        ] {
            if let Some(value) = threshold {
                if !value.is_finite() || !self.contains(value) {
                    return Err(AirwellError::invalid_threshold(
                        &self.id,
                        format!(
                            "{label} threshold {value} outside [{}, {}]",
                            self.min_value, self.max_value
                        ),
                    ));
                }
            }
        }

        if let (Some(warning), Some(critical)) = (self.warning_threshold, self.critical_threshold)
        {
            if warning > critical {
                return Err(AirwellError::invalid_threshold(
                    &self.id,
                    format!("warning threshold {warning} above critical threshold {critical}"),
                ));
            }
        }

        Ok(())
    }
}
