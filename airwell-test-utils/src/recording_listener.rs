// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airwell_core::SensorReading;
use parking_lot::Mutex;
use std::sync::Arc;

/// Subscriber callback that records every snapshot it receives.
///
/// Clones share the same record, so a test can hand one clone's
/// [`callback`](Self::callback) to the manager and inspect another.
#[derive(Clone, Default)]
pub struct RecordingListener {
    snapshots: Arc<Mutex<Vec<Vec<SensorReading>>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> impl Fn(&[SensorReading]) + Send + Sync + 'static {
        let snapshots = self.snapshots.clone();
        move |readings: &[SensorReading]| snapshots.lock().push(readings.to_vec())
    }

    pub fn count(&self) -> usize {
        self.snapshots.lock().len()
    }

    pub fn last(&self) -> Option<Vec<SensorReading>> {
        self.snapshots.lock().last().cloned()
    }

    pub fn snapshots(&self) -> Vec<Vec<SensorReading>> {
        self.snapshots.lock().clone()
    }
}
