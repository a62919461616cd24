// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellable repeating task on the Tokio runtime.
//!
//! A [`PeriodicTask`] runs a synchronous tick closure once per period until it
//! is stopped or dropped. Each tick runs to completion; stopping only
//! prevents future ticks.

use crate::{AirwellError, Result, StopToken};
use core::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

#[cfg(feature = "tracing")]
use tracing::debug;

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// Handle to a running periodic tick loop.
///
/// The first tick fires one full period after spawning. Dropping the handle
/// stops the loop.
///
/// ```
/// use airwell_core::PeriodicTask;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let ticks = Arc::new(AtomicUsize::new(0));
/// let counter = ticks.clone();
///
/// let task = PeriodicTask::spawn(Duration::from_millis(100), move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// })
/// .unwrap();
///
/// tokio::time::sleep(Duration::from_millis(350)).await;
/// task.stop();
/// assert_eq!(ticks.load(Ordering::SeqCst), 3);
/// # }
/// ```
#[derive(Debug)]
pub struct PeriodicTask {
    stop: StopToken,
    period: Duration,
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    /// Spawn `on_tick` on the current Tokio runtime, repeating every `period`.
    ///
    /// # Errors
    ///
    /// Returns [`AirwellError::InvalidInterval`] for a zero period and
    /// [`AirwellError::NoRuntime`] when called outside a Tokio runtime.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        if period.is_zero() {
            return Err(AirwellError::InvalidInterval);
        }
        let runtime = Handle::try_current().map_err(|_| AirwellError::NoRuntime)?;

        let stop = StopToken::new();
        let task_stop = stop.clone();
        let first_tick = Instant::now() + period;

        let handle = runtime.spawn(async move {
            let mut ticker = interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    () = task_stop.stopped() => break,
                    _ = ticker.tick() => {
                        if task_stop.is_stopped() {
                            break;
                        }
                        on_tick();
                    }
                }
            }

            debug!("periodic task ({:?}) exited", period);
        });

        Ok(Self {
            stop,
            period,
            handle,
        })
    }

    /// Request the loop to stop. No tick starts after this returns.
    pub fn stop(&self) {
        self.stop.stop();
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// `true` once the loop has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.stop.stop();
    }
}
