// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::distribution::BaseDistribution;
use airwell_core::{ReadingStatus, SensorConfig, SensorReading, SimulationSettings};
use chrono::Utc;
use rand::Rng;

/// Produce one simulated reading per config, in the same order.
///
/// Each value is drawn from the quantity's [`BaseDistribution`], rounded to
/// two decimals and clamped to the sensor range. Independently, a reading is
/// flagged [`ReadingStatus::Error`] with probability
/// `settings.error_probability`; the value of such a reading is still
/// computed but consumers treat it as unreliable.
pub fn generate<R: Rng + ?Sized>(
    configs: &[SensorConfig],
    settings: &SimulationSettings,
    rng: &mut R,
) -> Vec<SensorReading> {
    let timestamp = Utc::now();

    configs
        .iter()
        .map(|config| {
            let raw = BaseDistribution::for_config(config).sample(rng);
            let status = if rng.random::<f64>() < settings.error_probability {
                ReadingStatus::Error
            } else {
                ReadingStatus::Active
            };

            SensorReading {
                id: config.id.clone(),
                quantity: config.quantity,
                value: settle(config, raw),
                unit: config.unit.clone(),
                timestamp,
                location: settings.location.clone(),
                status,
            }
        })
        .collect()
}

/// Candidate value for a periodic update of `config`.
///
/// Centred on the middle of the range with a jitter of
/// `settings.perturbation_ratio` times the range width, then rounded and
/// clamped like generated values.
pub fn perturbed_value<R: Rng + ?Sized>(
    config: &SensorConfig,
    settings: &SimulationSettings,
    rng: &mut R,
) -> f64 {
    let raw = BaseDistribution::perturbation(config, settings.perturbation_ratio).sample(rng);
    settle(config, raw)
}

// Clamp last: a bound off the two-decimal grid wins over the rounding.
fn settle(config: &SensorConfig, raw: f64) -> f64 {
    clamp_to_range(config, round2(raw))
}

/// Clamp `value` into the config's inclusive range.
#[must_use]
pub fn clamp_to_range(config: &SensorConfig, value: f64) -> f64 {
    value.max(config.min_value).min(config.max_value)
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
