// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! Only one toast is on screen at a time. Pushing a new one evicts the
//! current toast at once and cancels its timers. Every toast goes through
//! `Entering` (slide-in delay), `Shown`, then `Leaving` (exit transition)
//! before it is removed.

use super::notification::{Notification, NotificationId};
use crate::config::{NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_EXIT_MS};
use crate::ui::state::{Scheduler, TimerId};
use std::time::{Duration, Instant};
use tracing::debug;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button pressed.
    Dismiss(NotificationId),
    /// Slide-in delay elapsed.
    Entered(NotificationId),
    /// Auto-dismiss delay elapsed.
    Expired(NotificationId),
    /// Exit transition finished.
    Removed(NotificationId),
}

/// Display phase of the current toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug)]
struct Current {
    notification: Notification,
    phase: Phase,
    timers: Vec<TimerId>,
}

/// Holds the visible toast and its timers.
#[derive(Debug)]
pub struct Manager {
    current: Option<Current>,
    scheduler: Scheduler<Message>,
    auto_dismiss: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::config::DEFAULT_NOTIFICATION_DURATION_MS,
        ))
    }
}

impl Manager {
    #[must_use]
    pub fn new(auto_dismiss: Duration) -> Self {
        Self {
            current: None,
            scheduler: Scheduler::new(),
            auto_dismiss,
        }
    }

    /// Shows a notification now, replacing any visible one.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.push_at(Instant::now(), notification)
    }

    /// [`Manager::push`] with an explicit clock.
    pub fn push_at(&mut self, now: Instant, notification: Notification) -> NotificationId {
        if let Some(previous) = self.current.take() {
            debug!(key = previous.notification.message_key(), "toast evicted");
            self.cancel_timers(&previous.timers);
        }

        let id = notification.id();
        debug!(key = notification.message_key(), "toast shown");
        let timers = vec![
            self.scheduler.schedule(
                now,
                Duration::from_millis(NOTIFICATION_ENTER_DELAY_MS),
                Message::Entered(id),
            ),
            self.scheduler
                .schedule(now, self.auto_dismiss, Message::Expired(id)),
        ];
        self.current = Some(Current {
            notification,
            phase: Phase::Entering,
            timers,
        });
        id
    }

    /// Starts the exit transition of a notification.
    ///
    /// Returns `false` if it is not the visible one or is already leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(Instant::now(), id)
    }

    fn dismiss_at(&mut self, now: Instant, id: NotificationId) -> bool {
        let Some(current) = self.current.as_mut() else {
            return false;
        };
        if current.notification.id() != id || current.phase == Phase::Leaving {
            return false;
        }

        let pending = std::mem::take(&mut current.timers);
        current.phase = Phase::Leaving;
        for timer in pending {
            self.scheduler.cancel(timer);
        }
        let removal = self.scheduler.schedule(
            now,
            Duration::from_millis(NOTIFICATION_EXIT_MS),
            Message::Removed(id),
        );
        if let Some(current) = self.current.as_mut() {
            current.timers.push(removal);
        }
        true
    }

    /// Applies a message. Messages about another toast are ignored.
    pub fn handle_message(&mut self, message: Message) {
        self.handle_message_at(Instant::now(), message);
    }

    fn handle_message_at(&mut self, now: Instant, message: Message) {
        match message {
            Message::Dismiss(id) | Message::Expired(id) => {
                self.dismiss_at(now, id);
            }
            Message::Entered(id) => {
                if let Some(current) = self.current_with(id) {
                    if current.phase == Phase::Entering {
                        current.phase = Phase::Shown;
                    }
                }
            }
            Message::Removed(id) => {
                if self.current_with(id).is_some() {
                    self.current = None;
                }
            }
        }
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for message in self.scheduler.drain_due(now) {
            self.handle_message_at(now, message);
        }
    }

    /// The toast on screen and its phase.
    #[must_use]
    pub fn visible(&self) -> Option<(&Notification, Phase)> {
        self.current
            .as_ref()
            .map(|current| (&current.notification, current.phase))
    }

    /// Returns `true` while any timer is pending; no tick is needed otherwise.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.scheduler.is_empty()
    }

    fn current_with(&mut self, id: NotificationId) -> Option<&mut Current> {
        self.current
            .as_mut()
            .filter(|current| current.notification.id() == id)
    }

    fn cancel_timers(&mut self, timers: &[TimerId]) {
        for timer in timers {
            self.scheduler.cancel(*timer);
        }
    }
}
