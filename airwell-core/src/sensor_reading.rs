// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::QuantityType;
use chrono::{DateTime, Utc};
use core::fmt;

/// Operational state reported alongside a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingStatus {
    Active,
    Inactive,
    /// Simulated sensor fault. The value is kept but must not be trusted.
    Error,
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Latest value of one sensor.
///
/// `id` and `quantity` are fixed for the lifetime of the reading; only
/// `value`, `timestamp` and `status` change when the sensor is updated.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub id: String,
    pub quantity: QuantityType,
    pub value: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub status: ReadingStatus,
}

impl SensorReading {
    /// Returns `true` for a simulated fault.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == ReadingStatus::Error
    }

    /// The value, or `None` when the reading is flagged as an error.
    #[must_use]
    pub fn reliable_value(&self) -> Option<f64> {
        (!self.is_error()).then_some(self.value)
    }
}
