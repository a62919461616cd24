// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airwell_core::{ConfigTable, QuantityType, SensorConfig, SimulationSettings};

pub const SEED: u64 = 0x5EED_A1A1;

/// Ambient temperature sensor: range 20..=35, warning 32, critical 35.
pub fn sens_001() -> SensorConfig {
    SensorConfig::new(
        "SENS_001",
        QuantityType::Temperature,
        "Ambient Temperature",
        "°C",
        20.0,
        35.0,
    )
    .with_thresholds(Some(32.0), Some(35.0))
}

/// Generated water level: range 0..=25, warning 18, critical 22.
pub fn sens_007() -> SensorConfig {
    SensorConfig::new("SENS_007", QuantityType::WaterLevel, "Generated Water", "L", 0.0, 25.0)
        .with_thresholds(Some(18.0), Some(22.0))
}

/// CO2 sensor without thresholds.
pub fn co2_unmonitored() -> SensorConfig {
    SensorConfig::new("CO2_RAW", QuantityType::Co2, "Carbon Dioxide", "ppm", 400.0, 2000.0)
}

pub fn sens_001_table() -> ConfigTable {
    ConfigTable::new(vec![sens_001()]).expect("fixture table is valid")
}

pub fn two_sensor_table() -> ConfigTable {
    ConfigTable::new(vec![sens_001(), sens_007()]).expect("fixture table is valid")
}

/// Seeded settings that never produce faulty readings.
pub fn healthy_settings() -> SimulationSettings {
    SimulationSettings {
        error_probability: 0.0,
        ..SimulationSettings::seeded(SEED)
    }
}

/// Seeded settings where every generated reading is faulty.
pub fn faulty_settings() -> SimulationSettings {
    SimulationSettings {
        error_probability: 1.0,
        ..SimulationSettings::seeded(SEED)
    }
}
