// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{AirwellError, QuantityType, Result, SensorConfig};
use std::collections::HashMap;

/// Validated, ordered, read-only set of sensor definitions.
///
/// Every config has passed [`SensorConfig::validate`] and ids are unique, so
/// consumers can clamp into a config's range without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigTable {
    sensors: Vec<SensorConfig>,
    index: HashMap<String, usize>,
}

impl ConfigTable {
    /// Validates `sensors` and builds a table preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`AirwellError::EmptyTable`] for an empty list,
    /// [`AirwellError::DuplicateSensorId`] when two entries share an id, or
    /// the first validation error of an individual config.
    pub fn new(sensors: Vec<SensorConfig>) -> Result<Self> {
        if sensors.is_empty() {
            return Err(AirwellError::EmptyTable);
        }

        let mut index = HashMap::with_capacity(sensors.len());
        for (position, config) in sensors.iter().enumerate() {
            config.validate()?;
            if index.insert(config.id.clone(), position).is_some() {
                return Err(AirwellError::DuplicateSensorId(config.id.clone()));
            }
        }

        Ok(Self { sensors, index })
    }

    /// The eight sensors of the reference unit.
    #[must_use]
    pub fn default_table() -> Self {
        use QuantityType::*;

        let sensors = vec![
            sensor("SENS_001", Temperature, "Ambient Temperature", "°C", (20.0, 35.0), (32.0, 35.0)),
            sensor("SENS_002", Humidity, "Relative Humidity", "%", (60.0, 95.0), (85.0, 95.0)),
            sensor("SENS_003", Co2, "Carbon Dioxide", "ppm", (400.0, 2000.0), (1000.0, 1500.0)),
            sensor("SENS_004", Pm25, "Fine Particulate Matter", "µg/m³", (10.0, 150.0), (60.0, 100.0)),
            sensor("SENS_005", Pm10, "Coarse Particulate Matter", "µg/m³", (20.0, 200.0), (80.0, 150.0)),
            sensor("SENS_006", AirQualityIndex, "Overall Air Quality", "AQI", (0.0, 200.0), (100.0, 150.0)),
            sensor("SENS_007", WaterLevel, "Generated Water", "L", (0.0, 25.0), (18.0, 22.0)),
            sensor("SENS_008", SolarPower, "Solar Panel Output", "W", (100.0, 700.0), (600.0, 700.0)),
        ];

        let index = sensors
            .iter()
            .enumerate()
            .map(|(position, config)| (config.id.clone(), position))
            .collect();

        Self { sensors, index }
    }

    /// Looks up a config by sensor id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SensorConfig> {
        self.index.get(id).map(|&position| &self.sensors[position])
    }

    /// Position of `id` in table order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All configs in table order.
    #[must_use]
    pub fn sensors(&self) -> &[SensorConfig] {
        &self.sensors
    }

    /// Sensor ids in table order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sensors.iter().map(|config| config.id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

fn sensor(
    id: &str,
    quantity: QuantityType,
    name: &str,
    unit: &str,
    (min, max): (f64, f64),
    (warning, critical): (f64, f64),
) -> SensorConfig {
    SensorConfig::new(id, quantity, name, unit, min, max)
        .with_thresholds(Some(warning), Some(critical))
}
