// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{display_status, DisplayStatus};
use airwell_core::{ConfigTable, ReadingStatus, SensorConfig, SensorReading};
use core::fmt;

/// Counters shown under the sensor table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Readings whose sensor reports `active`.
    pub active: usize,
    /// Values at or above the warning threshold but below critical,
    /// whatever the reading status.
    pub warnings: usize,
    /// Faulty readings plus readings at or above the critical threshold.
    pub critical_or_errors: usize,
    pub total: usize,
}

impl DashboardSummary {
    /// Count `readings` against the thresholds in `table`.
    ///
    /// The warning band is judged on the value alone, so a faulty reading in
    /// the band counts both as a warning and as an error.
    #[must_use]
    pub fn from_readings(readings: &[SensorReading], table: &ConfigTable) -> Self {
        readings.iter().fold(
            Self {
                total: readings.len(),
                ..Self::default()
            },
            |mut summary, reading| {
                let config = table.get(&reading.id);
                if reading.status == ReadingStatus::Active {
                    summary.active += 1;
                }
                if config.is_some_and(|config| in_warning_band(reading.value, config)) {
                    summary.warnings += 1;
                }
                if display_status(reading, config) >= DisplayStatus::Critical {
                    summary.critical_or_errors += 1;
                }
                summary
            },
        )
    }
}

fn in_warning_band(value: f64, config: &SensorConfig) -> bool {
    config
        .warning_threshold
        .is_some_and(|warning| value >= warning)
        && config
            .critical_threshold
            .is_none_or(|critical| value < critical)
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Active {} | Warnings {} | Critical/Errors {} | Total {}",
            self.active, self.warnings, self.critical_or_errors, self.total
        )
    }
}
