//! Ordered, self-expiring notification queue.
//!
//! Expiry is judged against the injected clock on every read, so a toast is
//! never reported past its deadline even when the reaper task that removes it
//! runs late or not at all.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;

use super::{Notification, NotificationId, NotificationTtl, Severity};

/// Insertion-ordered toasts plus the id counter.
pub struct NotificationQueue {
    clock: Arc<dyn Clock + Send + Sync>,
    ttl: NotificationTtl,
    next_id: u64,
    entries: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new(clock: Arc<dyn Clock + Send + Sync>, ttl: NotificationTtl) -> Self {
        Self {
            clock,
            ttl,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// Append a toast and return its id.
    pub fn enqueue(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId::new(self.next_id);
        self.next_id += 1;
        let created_at = self.clock.utc();
        self.entries.push(Notification {
            id,
            message: message.into(),
            severity,
            created_at,
            expires_at: created_at
                .checked_add_signed(self.ttl.as_delta())
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
        id
    }

    /// Remove `id`; returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Toasts still inside their lifetime, oldest first.
    pub fn visible(&self) -> Vec<Notification> {
        let now = self.clock.utc();
        self.entries
            .iter()
            .filter(|entry| entry.is_visible_at(now))
            .cloned()
            .collect()
    }

    /// Drop every toast past its deadline; returns how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.utc();
        let before = self.entries.len();
        self.entries.retain(|entry| entry.is_visible_at(now));
        before - self.entries.len()
    }

    /// Entries held in memory, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
