// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{display_status, DashboardSummary};
use airwell_core::{ConfigTable, SensorReading};
use chrono::{DateTime, SecondsFormat, Utc};
use core::fmt;

/// Placeholder shown instead of the value of a faulty reading.
pub const MISSING_VALUE: &str = "--";

/// Value column text: the number, or [`MISSING_VALUE`] for faulty readings.
#[must_use]
pub fn format_value(reading: &SensorReading) -> String {
    if reading.is_error() {
        MISSING_VALUE.to_string()
    } else {
        reading.value.to_string()
    }
}

/// One dashboard frame: header, sensor table and summary line.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub readings: &'a [SensorReading],
    pub table: &'a ConfigTable,
    pub last_update: DateTime<Utc>,
    pub live: bool,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.live { "live" } else { "paused" };
        let location = self
            .readings
            .first()
            .map_or("-", |reading| reading.location.as_str());

        writeln!(
            f,
            "Sensor Dashboard | {} | {} | last update {}",
            location,
            mode,
            self.last_update.format("%H:%M:%S")
        )?;
        writeln!(
            f,
            "{:<10} {:<18} {:>8} {:<6} {:<9} {}",
            "ID", "Type", "Value", "Unit", "Status", "Last Updated"
        )?;

        for reading in self.readings {
            writeln!(
                f,
                "{:<10} {:<18} {:>8} {:<6} {:<9} {}",
                reading.id,
                reading.quantity.label(),
                format_value(reading),
                reading.unit,
                display_status(reading, self.table.get(&reading.id)),
                reading.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
            )?;
        }

        write!(
            f,
            "{}",
            DashboardSummary::from_readings(self.readings, self.table)
        )
    }
}

/// Render the sensor table followed by the summary line.
///
/// One row per reading, in the given order, with id, type, value, unit,
/// display status and last-updated time.
#[must_use]
pub fn render(
    readings: &[SensorReading],
    table: &ConfigTable,
    last_update: DateTime<Utc>,
    live: bool,
) -> String {
    Frame {
        readings,
        table,
        last_update,
        live,
    }
    .to_string()
}
