// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::listener_registry::{Listener, ListenerRegistry};
use crate::logging::{debug, info, warn};
use crate::{ReadingStream, Subscription};
use airwell_core::{
    AirwellConfig, ConfigTable, PeriodicTask, QuantityType, ReadingStatus, Result, SensorReading,
    SimulationSettings,
};
use airwell_sim::{generate, perturbed_value};
use chrono::Utc;
use core::time::Duration;
use parking_lot::{Mutex, ReentrantMutex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Owner of the current reading of every configured sensor.
///
/// The manager holds exactly one reading per sensor in the
/// [`ConfigTable`], in table order, for its whole lifetime. Readings change
/// through [`update_sensor`](Self::update_sensor) or the real-time update
/// cycle; every change is pushed synchronously to all subscribers, in
/// registration order, as a full copy of the reading set.
///
/// Construct one instance and share it as `Arc<SensorDataManager>` with the
/// views that need it.
///
/// ```
/// use airwell_monitor::SensorDataManager;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let manager = SensorDataManager::default();
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = calls.clone();
///
/// let subscription = manager.subscribe(move |readings| {
///     assert_eq!(readings.len(), 8);
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
///
/// manager.update_sensor("SENS_001", 33.0);
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
///
/// subscription.unsubscribe();
/// manager.update_sensor("SENS_001", 34.0);
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// ```
pub struct SensorDataManager {
    shared: Arc<Shared>,
    real_time: Mutex<Option<PeriodicTask>>,
}

struct Shared {
    table: ConfigTable,
    settings: SimulationSettings,
    readings: Mutex<Vec<SensorReading>>,
    listeners: Arc<Mutex<ListenerRegistry>>,
    // Serialises state change + fan-out; re-entrant so listeners may call back in.
    dispatch: ReentrantMutex<()>,
    rng: Mutex<StdRng>,
}

impl SensorDataManager {
    /// Build a manager and generate the initial readings.
    ///
    /// The random source is seeded from `settings.seed`, or from the OS when
    /// no seed is configured.
    #[must_use]
    pub fn new(table: ConfigTable, settings: SimulationSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(table, settings, rng)
    }

    /// Build a manager drawing from the given random source.
    #[must_use]
    pub fn with_rng(table: ConfigTable, settings: SimulationSettings, mut rng: StdRng) -> Self {
        let readings = generate(table.sensors(), &settings, &mut rng);
        debug!(
            "sensor manager created with {} sensors at {}",
            readings.len(),
            settings.location
        );

        Self {
            shared: Arc::new(Shared {
                table,
                settings,
                readings: Mutex::new(readings),
                listeners: Arc::new(Mutex::new(ListenerRegistry::default())),
                dispatch: ReentrantMutex::new(()),
                rng: Mutex::new(rng),
            }),
            real_time: Mutex::new(None),
        }
    }

    /// Validate a configuration document and build a manager from it.
    ///
    /// # Errors
    ///
    /// Returns the first settings or sensor-table validation error.
    pub fn from_config(config: AirwellConfig) -> Result<Self> {
        let (table, settings) = config.into_parts()?;
        Ok(Self::new(table, settings))
    }

    /// Register `callback` and call it once, right away, with the current
    /// reading set.
    ///
    /// The returned [`Subscription`] removes exactly this callback when
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&[SensorReading]) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(callback);

        let _dispatch = self.shared.dispatch.lock();
        let id = self.shared.listeners.lock().insert(Arc::clone(&listener));
        debug!("listener {:?} subscribed", id);

        let snapshot = self.shared.snapshot();
        listener(&snapshot);

        Subscription::new(id, Arc::downgrade(&self.shared.listeners))
    }

    /// Subscribe through an async stream of snapshots instead of a callback.
    pub fn updates(&self) -> ReadingStream {
        let (sender, receiver) = futures::channel::mpsc::unbounded();
        let subscription = self.subscribe(move |readings| {
            // receiver gone: the stream is being dropped and will unsubscribe
            let _ = sender.unbounded_send(readings.to_vec());
        });
        ReadingStream::new(receiver, subscription)
    }

    /// Start the real-time update cycle on the current Tokio runtime.
    ///
    /// Every `interval` one sensor, chosen uniformly at random, receives a
    /// perturbed value through [`update_sensor`](Self::update_sensor). The
    /// first update happens one interval after the call. A running cycle is
    /// stopped and replaced, so at most one cycle is ever active.
    ///
    /// # Errors
    ///
    /// Returns [`AirwellError::InvalidInterval`](airwell_core::AirwellError::InvalidInterval)
    /// for a zero interval or [`AirwellError::NoRuntime`](airwell_core::AirwellError::NoRuntime)
    /// outside a Tokio runtime. In both cases no cycle is left running.
    pub fn start_real_time_updates(&self, interval: Duration) -> Result<()> {
        let mut slot = self.real_time.lock();

        if let Some(previous) = slot.take() {
            previous.stop();
            info!(
                "replacing real-time updates every {:?} with every {:?}",
                previous.period(),
                interval
            );
        }

        let shared = Arc::clone(&self.shared);
        let task = PeriodicTask::spawn(interval, move || shared.tick())?;
        info!("real-time updates started every {:?}", interval);

        *slot = Some(task);
        Ok(())
    }

    /// [`start_real_time_updates`](Self::start_real_time_updates) with the
    /// configured `update_interval_ms`.
    ///
    /// # Errors
    ///
    /// Same as [`start_real_time_updates`](Self::start_real_time_updates).
    pub fn start_real_time_updates_default(&self) -> Result<()> {
        self.start_real_time_updates(self.shared.settings.update_interval())
    }

    /// Stop the real-time update cycle. No-op when none is running; readings
    /// keep their last values.
    pub fn stop_real_time_updates(&self) {
        if let Some(task) = self.real_time.lock().take() {
            task.stop();
            info!("real-time updates stopped");
        }
    }

    #[must_use]
    pub fn is_real_time_active(&self) -> bool {
        self.real_time.lock().is_some()
    }

    /// Interval of the running cycle, if any.
    #[must_use]
    pub fn real_time_interval(&self) -> Option<Duration> {
        self.real_time.lock().as_ref().map(PeriodicTask::period)
    }

    /// Set a sensor's value, mark it active and notify every subscriber.
    ///
    /// Unknown ids and non-finite values are ignored without notifying
    /// anyone; the return value tells whether the update was applied.
    pub fn update_sensor(&self, id: &str, value: f64) -> bool {
        self.shared.update_sensor(id, value)
    }

    /// Copy of the current reading set, in table order.
    #[must_use]
    pub fn get_all_data(&self) -> Vec<SensorReading> {
        self.shared.snapshot()
    }

    #[must_use]
    pub fn get_sensor_by_id(&self, id: &str) -> Option<SensorReading> {
        let position = self.shared.table.position(id)?;
        Some(self.shared.readings.lock()[position].clone())
    }

    #[must_use]
    pub fn get_sensors_by_type(&self, quantity: QuantityType) -> Vec<SensorReading> {
        self.shared
            .readings
            .lock()
            .iter()
            .filter(|reading| reading.quantity == quantity)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn config_table(&self) -> &ConfigTable {
        &self.shared.table
    }

    #[must_use]
    pub fn settings(&self) -> &SimulationSettings {
        &self.shared.settings
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.lock().len()
    }
}

impl Default for SensorDataManager {
    /// The reference unit with default settings.
    fn default() -> Self {
        Self::new(ConfigTable::default_table(), SimulationSettings::default())
    }
}

impl Drop for SensorDataManager {
    fn drop(&mut self) {
        self.stop_real_time_updates();
    }
}

impl Shared {
    fn snapshot(&self) -> Vec<SensorReading> {
        self.readings.lock().clone()
    }

    fn update_sensor(&self, id: &str, value: f64) -> bool {
        let Some(position) = self.table.position(id) else {
            debug!("ignoring update for unknown sensor {}", id);
            return false;
        };
        if !value.is_finite() {
            warn!("ignoring non-finite value {} for sensor {}", value, id);
            return false;
        }

        let _dispatch = self.dispatch.lock();
        let snapshot = {
            let mut readings = self.readings.lock();
            let reading = &mut readings[position];
            reading.value = value;
            reading.timestamp = Utc::now();
            reading.status = ReadingStatus::Active;
            readings.clone()
        };

        self.notify(&snapshot);
        true
    }

    fn notify(&self, snapshot: &[SensorReading]) {
        let listeners = self.listeners.lock().listeners();
        for listener in listeners {
            listener(snapshot);
        }
    }

    fn tick(&self) {
        let (id, value) = {
            let mut rng = self.rng.lock();
            let config = &self.table.sensors()[rng.random_range(0..self.table.len())];
            let value = perturbed_value(config, &self.settings, &mut *rng);
            (config.id.clone(), value)
        };

        debug!("tick: {} -> {}", id, value);
        self.update_sensor(&id, value);
    }
}
