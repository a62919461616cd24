// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use serde::Deserialize;

/// Physical quantity measured by a sensor.
///
/// The serialized form is the human-readable label shown on the dashboard,
/// e.g. `"PM2.5"` or `"Air Quality Index"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum QuantityType {
    Temperature,
    Humidity,
    #[serde(rename = "CO2")]
    Co2,
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "Air Quality Index")]
    AirQualityIndex,
    #[serde(rename = "Water Level")]
    WaterLevel,
    #[serde(rename = "Solar Power")]
    SolarPower,
}

impl QuantityType {
    /// Every quantity, in dashboard order.
    pub const ALL: [Self; 8] = [
        Self::Temperature,
        Self::Humidity,
        Self::Co2,
        Self::Pm25,
        Self::Pm10,
        Self::AirQualityIndex,
        Self::WaterLevel,
        Self::SolarPower,
    ];

    /// Dashboard label for this quantity.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Co2 => "CO2",
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::AirQualityIndex => "Air Quality Index",
            Self::WaterLevel => "Water Level",
            Self::SolarPower => "Solar Power",
        }
    }
}

impl fmt::Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
