// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{display_status, render, DashboardSink, DashboardSummary, DisplayStatus};
use airwell_core::{Result, SensorReading};
use airwell_monitor::{ReadingStream, SensorDataManager, Subscription};
use chrono::{DateTime, Utc};
use core::time::Duration;
use futures::StreamExt;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use tracing::{debug, info};

/// Default refresh interval used when the dashboard goes live.
pub const DEFAULT_LIVE_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug)]
struct ViewState {
    readings: Vec<SensorReading>,
    last_update: DateTime<Utc>,
}

/// A mounted dashboard bound to one [`SensorDataManager`].
///
/// Mounting subscribes to the manager, so the view holds the current
/// reading set from the start. Dropping or [`unmount`](Self::unmount)ing the
/// view releases the subscription and stops the real-time cycle if this
/// view started it.
pub struct DashboardView {
    manager: Arc<SensorDataManager>,
    state: Arc<Mutex<ViewState>>,
    subscription: Option<Subscription>,
    interval: Duration,
    live: bool,
}

impl DashboardView {
    /// Subscribe to `manager`; `interval` is used when going live.
    pub fn mount(manager: Arc<SensorDataManager>, interval: Duration) -> Self {
        let state = Arc::new(Mutex::new(ViewState {
            readings: Vec::new(),
            last_update: Utc::now(),
        }));

        let sink = Arc::clone(&state);
        let subscription = manager.subscribe(move |readings| {
            let mut state = sink.lock();
            state.readings = readings.to_vec();
            state.last_update = Utc::now();
        });
        debug!("dashboard mounted on {} sensors", manager.config_table().len());

        Self {
            manager,
            state,
            subscription: Some(subscription),
            interval,
            live: false,
        }
    }

    /// Start the manager's update cycle when paused, stop it when live.
    ///
    /// Returns the new live state.
    ///
    /// # Errors
    ///
    /// Propagates the manager's start error; the view stays paused.
    pub fn toggle_real_time(&mut self) -> Result<bool> {
        if self.live {
            self.manager.stop_real_time_updates();
            self.live = false;
            info!("dashboard paused");
        } else {
            self.manager.start_real_time_updates(self.interval)?;
            self.live = true;
            info!("dashboard live every {:?}", self.interval);
        }
        Ok(self.live)
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Latest snapshot received from the manager.
    #[must_use]
    pub fn readings(&self) -> Vec<SensorReading> {
        self.state.lock().readings.clone()
    }

    /// Time the latest snapshot was received.
    #[must_use]
    pub fn last_update(&self) -> DateTime<Utc> {
        self.state.lock().last_update
    }

    /// Display status of one sensor in the latest snapshot.
    #[must_use]
    pub fn status_of(&self, id: &str) -> Option<DisplayStatus> {
        let state = self.state.lock();
        let reading = state.readings.iter().find(|reading| reading.id == id)?;
        Some(display_status(
            reading,
            self.manager.config_table().get(&reading.id),
        ))
    }

    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::from_readings(&self.state.lock().readings, self.manager.config_table())
    }

    /// Render the latest snapshot as text.
    #[must_use]
    pub fn render(&self) -> String {
        let state = self.state.lock();
        render(
            &state.readings,
            self.manager.config_table(),
            state.last_update,
            self.live,
        )
    }

    /// Present a frame on every snapshot of `updates`.
    ///
    /// Runs until the stream ends or `limit` frames were presented and
    /// returns the number of frames presented.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `sink`.
    pub async fn drive<S>(
        &self,
        updates: &mut ReadingStream,
        sink: &mut S,
        limit: Option<u64>,
    ) -> io::Result<u64>
    where
        S: DashboardSink + ?Sized,
    {
        let mut frames = 0;
        while limit.is_none_or(|limit| frames < limit) {
            if updates.next().await.is_none() {
                break;
            }
            sink.present(&self.render())?;
            frames += 1;
        }
        Ok(frames)
    }

    /// Release the subscription and stop a cycle started by this view.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            if self.live {
                self.manager.stop_real_time_updates();
                self.live = false;
            }
            debug!("dashboard unmounted");
        }
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        self.release();
    }
}
