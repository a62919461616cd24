// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared stop flag for background update cycles.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// Cloneable stop flag with an awaitable "stopped" notification.
///
/// All clones share one flag. Once [`stop`](Self::stop) has returned, every
/// clone observes [`is_stopped`](Self::is_stopped) as `true` and every
/// pending [`stopped`](Self::stopped) future resolves.
///
/// ```
/// use airwell_core::StopToken;
///
/// let token = StopToken::new();
/// let observer = token.clone();
/// assert!(!observer.is_stopped());
///
/// token.stop();
/// assert!(observer.is_stopped());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    stopped: AtomicBool,
    event: Event,
}

impl StopToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag and wake every waiter. Idempotent.
    pub fn stop(&self) {
        self.inner.stopped.store(true, Ordering::Release);
        self.inner.event.notify(usize::MAX);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.inner.stopped.load(Ordering::Acquire)
    }

    /// Resolves once the flag is raised; immediately if it already is.
    pub fn stopped(&self) -> Stopped<'_> {
        Stopped {
            token: self,
            listener: None,
        }
    }
}

/// Future returned by [`StopToken::stopped`].
pub struct Stopped<'a> {
    token: &'a StopToken,
    listener: Option<EventListener>,
}

impl Future for Stopped<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.token.is_stopped() {
            return Poll::Ready(());
        }

        let this = &mut *self;
        let listener = match this.listener.as_mut() {
            Some(listener) => listener,
            None => {
                let listener = this.token.inner.event.listen();
                // stop() may have run between the check above and listen()
                if this.token.is_stopped() {
                    return Poll::Ready(());
                }
                this.listener.insert(listener)
            }
        };

        Pin::new(listener).poll(cx)
    }
}
