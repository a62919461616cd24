// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airwell_core::{ConfigTable, SensorReading};
use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected snapshot emitted, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

pub async fn expect_next_snapshot<S>(stream: &mut S) -> Vec<SensorReading>
where
    S: Stream<Item = Vec<SensorReading>> + Unpin,
{
    stream.next().await.expect("expected next snapshot")
}

/// Ids of `readings`, in order.
pub fn ids_of(readings: &[SensorReading]) -> Vec<String> {
    readings.iter().map(|reading| reading.id.clone()).collect()
}

/// Panics unless every non-faulty reading lies inside its sensor's range.
pub fn assert_within_ranges(table: &ConfigTable, readings: &[SensorReading]) {
    for reading in readings.iter().filter(|reading| !reading.is_error()) {
        let config = table
            .get(&reading.id)
            .unwrap_or_else(|| panic!("reading for unknown sensor {}", reading.id));
        assert!(
            config.contains(reading.value),
            "{} = {} outside [{}, {}]",
            reading.id,
            reading.value,
            config.min_value,
            config.max_value
        );
    }
}
