// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Subscription;
use airwell_core::SensorReading;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc::UnboundedReceiver;
use futures::Stream;

/// Async view of a subscription: one item per notification.
///
/// The first item is the reading set at the time of subscribing. The stream
/// is unbounded; a slow consumer sees every snapshot, in order. Dropping the
/// stream unsubscribes.
pub struct ReadingStream {
    receiver: UnboundedReceiver<Vec<SensorReading>>,
    subscription: Subscription,
}

impl ReadingStream {
    pub(crate) fn new(
        receiver: UnboundedReceiver<Vec<SensorReading>>,
        subscription: Subscription,
    ) -> Self {
        Self {
            receiver,
            subscription,
        }
    }

    /// Unsubscribe now. Snapshots already queued can still be read.
    pub fn close(&mut self) {
        self.subscription.unsubscribe();
        self.receiver.close();
    }
}

impl Stream for ReadingStream {
    type Item = Vec<SensorReading>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}
