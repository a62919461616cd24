// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airwell_core::{QuantityType, SensorConfig};
use rand::Rng;

/// Uniform distribution `center ± spread / 2` used for a sensor's first value.
///
/// Centres describe plausible September conditions at the reference site;
/// quantities without a profile sit at the middle of their range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseDistribution {
    pub center: f64,
    pub spread: f64,
}

impl BaseDistribution {
    #[must_use]
    pub const fn new(center: f64, spread: f64) -> Self {
        Self { center, spread }
    }

    /// Profile for the config's quantity.
    #[must_use]
    pub fn for_config(config: &SensorConfig) -> Self {
        match config.quantity {
            QuantityType::Temperature => Self::new(27.0, 5.0),
            QuantityType::Humidity => Self::new(75.0, 15.0),
            QuantityType::Pm25 => Self::new(30.0, 20.0),
            QuantityType::Pm10 => Self::new(60.0, 30.0),
            QuantityType::AirQualityIndex => Self::new(70.0, 30.0),
            QuantityType::SolarPower => Self::new(400.0, 200.0),
            // condensation yield, 10-18 L
            QuantityType::WaterLevel => Self::new(14.0, 8.0),
            QuantityType::Co2 => Self::new(config.midpoint(), 0.0),
        }
    }

    /// Perturbation profile: the middle of the range with a jitter of
    /// `ratio` times the range width.
    #[must_use]
    pub fn perturbation(config: &SensorConfig, ratio: f64) -> Self {
        Self::new(config.midpoint(), config.range_width() * ratio)
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.center - self.spread / 2.0
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.center + self.spread / 2.0
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.center + (rng.random::<f64>() - 0.5) * self.spread
    }
}
