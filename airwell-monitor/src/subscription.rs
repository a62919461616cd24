// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::listener_registry::{ListenerId, ListenerRegistry};
use crate::logging::debug;
use parking_lot::Mutex;
use std::sync::Weak;

/// Handle returned by [`SensorDataManager::subscribe`](crate::SensorDataManager::subscribe).
///
/// [`unsubscribe`](Self::unsubscribe) removes exactly the listener this
/// handle was created for; calling it again is a no-op. Dropping the handle
/// unsubscribes as well, so a subscription scoped to a view is released on
/// every exit path. Use [`detach`](Self::detach) to keep the listener for the
/// lifetime of the manager instead.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<Mutex<ListenerRegistry>>,
    detached: bool,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, registry: Weak<Mutex<ListenerRegistry>>) -> Self {
        Self {
            id,
            registry,
            detached: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Stop delivering notifications to this listener.
    ///
    /// Notifications already being dispatched when this is called may still
    /// reach the listener; later ones never do.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.lock().remove(self.id) {
                debug!("listener {:?} unsubscribed", self.id);
            }
        }
    }

    /// `true` while the listener still receives notifications.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.lock().listeners_contain(self.id))
    }

    /// Release the handle without unsubscribing.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.detached {
            self.unsubscribe();
        }
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("detached", &self.detached)
            .finish()
    }
}
