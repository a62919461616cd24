// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airwell_core::{SensorConfig, SensorReading};
use core::fmt;

/// Status shown next to a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisplayStatus {
    Normal,
    Warning,
    Critical,
    Error,
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Normal => "Normal",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
            Self::Error => "Error",
        })
    }
}

/// Derive the display status of `reading` from its sensor's thresholds.
///
/// Faulty readings are `Error` regardless of value. Otherwise the value is
/// compared against the critical threshold first, then the warning
/// threshold; an absent threshold (or an absent config) never triggers.
#[must_use]
pub fn display_status(reading: &SensorReading, config: Option<&SensorConfig>) -> DisplayStatus {
    if reading.is_error() {
        return DisplayStatus::Error;
    }

    let reached = |threshold: Option<f64>| threshold.is_some_and(|limit| reading.value >= limit);

    match config {
        Some(config) if reached(config.critical_threshold) => DisplayStatus::Critical,
        Some(config) if reached(config.warning_threshold) => DisplayStatus::Warning,
        _ => DisplayStatus::Normal,
    }
}
