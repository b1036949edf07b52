//! # Notification Queue
//!
//! FIFO of transient messages with at most one visible at a time.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            enqueue                                                      │
//! │   ┌───────┐ ─────────────► ┌──────────────────────────┐                │
//! │   │ Empty │                │ Showing { current,       │ ◄── enqueue    │
//! │   └───────┘ ◄───┐          │           pending }      │     (append)   │
//! │       ▲         │          └────────────┬─────────────┘                │
//! │       │         │                       │ dismiss(current.id)          │
//! │       │  finish_exit                    ▼                              │
//! │       │  (pending empty)   ┌──────────────────────────┐                │
//! │       └────────────────────│ Exiting { pending }      │ ◄── enqueue    │
//! │                            └────────────┬─────────────┘     (append)   │
//! │                                         │ finish_exit                  │
//! │                                         │ (pending non-empty)          │
//! │                                         ▼                              │
//! │                              Showing { head of pending }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The queue itself has no clock. The notification store drives
//! `dismiss` from the auto-hide timer and `finish_exit` from the exit
//! animation timer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use ts_rs::TS;
use uuid::Uuid;

use crate::DEFAULT_AUTO_HIDE_MS;

// =============================================================================
// Notification
// =============================================================================

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// A single toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    /// How long the toast stays up before it dismisses itself.
    #[ts(type = "number")]
    pub auto_hide_ms: u64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification with a fresh id. A missing duration means
    /// [`DEFAULT_AUTO_HIDE_MS`].
    pub fn new(message: impl Into<String>, severity: Severity, auto_hide_ms: Option<u64>) -> Self {
        Notification {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            severity,
            auto_hide_ms: auto_hide_ms.unwrap_or(DEFAULT_AUTO_HIDE_MS),
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Queue
// =============================================================================

/// Queue state. See the module diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueueState {
    #[default]
    Empty,
    Showing {
        current: Notification,
        pending: VecDeque<Notification>,
    },
    Exiting {
        pending: VecDeque<Notification>,
    },
}

/// What `enqueue` did with the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    /// Nothing was showing, so it became the current notification.
    Shown,
    /// Appended behind the current (or exiting) one.
    Queued,
}

/// What `dismiss` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    /// The visible notification was hidden; the queue is now exiting.
    Hidden,
    /// A waiting notification was dropped before it was ever shown.
    Dropped,
    /// No notification has that id (already dismissed, or a stale timer).
    NotFound,
}

/// Serializable view of the queue for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QueueSnapshot {
    pub current: Option<Notification>,
    pub pending: usize,
    pub exiting: bool,
}

/// Single-visible FIFO notification queue.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    state: QueueState,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &QueueState {
        &self.state
    }

    /// The visible notification, if any.
    pub fn current(&self) -> Option<&Notification> {
        match &self.state {
            QueueState::Showing { current, .. } => Some(current),
            _ => None,
        }
    }

    /// Number of notifications waiting behind the visible one.
    pub fn pending_len(&self) -> usize {
        match &self.state {
            QueueState::Empty => 0,
            QueueState::Showing { pending, .. } | QueueState::Exiting { pending } => pending.len(),
        }
    }

    /// True while the exit animation of a dismissed notification runs.
    pub fn is_exiting(&self) -> bool {
        matches!(self.state, QueueState::Exiting { .. })
    }

    /// Appends a notification, showing it immediately when nothing is
    /// displayed and nothing is exiting.
    pub fn enqueue(&mut self, notification: Notification) -> EnqueueOutcome {
        if let QueueState::Showing { pending, .. } | QueueState::Exiting { pending } =
            &mut self.state
        {
            pending.push_back(notification);
            return EnqueueOutcome::Queued;
        }

        self.state = QueueState::Showing {
            current: notification,
            pending: VecDeque::new(),
        };
        EnqueueOutcome::Shown
    }

    /// Hides the visible notification or drops a waiting one.
    pub fn dismiss(&mut self, id: &str) -> DismissOutcome {
        match std::mem::take(&mut self.state) {
            QueueState::Showing { current, pending } if current.id == id => {
                self.state = QueueState::Exiting { pending };
                DismissOutcome::Hidden
            }
            QueueState::Showing {
                current,
                mut pending,
            } => {
                let outcome = drop_pending(&mut pending, id);
                self.state = QueueState::Showing { current, pending };
                outcome
            }
            QueueState::Exiting { mut pending } => {
                let outcome = drop_pending(&mut pending, id);
                self.state = QueueState::Exiting { pending };
                outcome
            }
            QueueState::Empty => DismissOutcome::NotFound,
        }
    }

    /// Ends the exit animation: shows the next waiting notification, or
    /// returns to empty. Outside the exiting state this does nothing.
    pub fn finish_exit(&mut self) -> Option<&Notification> {
        self.state = match std::mem::take(&mut self.state) {
            QueueState::Exiting { mut pending } => match pending.pop_front() {
                Some(current) => QueueState::Showing { current, pending },
                None => QueueState::Empty,
            },
            other => other,
        };
        self.current()
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            current: self.current().cloned(),
            pending: self.pending_len(),
            exiting: self.is_exiting(),
        }
    }
}

fn drop_pending(pending: &mut VecDeque<Notification>, id: &str) -> DismissOutcome {
    match pending.iter().position(|n| n.id == id) {
        Some(index) => {
            pending.remove(index);
            DismissOutcome::Dropped
        }
        None => DismissOutcome::NotFound,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn note(message: &str) -> Notification {
        Notification::new(message, Severity::Info, None)
    }

    #[test]
    fn test_new_uses_default_duration() {
        let n = Notification::new("Saved", Severity::Success, None);
        assert_eq!(n.auto_hide_ms, 5_000);
        assert_eq!(Notification::new("x", Severity::Info, Some(3_000)).auto_hide_ms, 3_000);
        assert_ne!(n.id, note("Saved").id);
    }

    #[test]
    fn test_only_first_is_visible() {
        let mut queue = NotificationQueue::new();
        let m1 = note("m1");
        let m2 = note("m2");

        assert_eq!(queue.enqueue(m1.clone()), EnqueueOutcome::Shown);
        assert_eq!(queue.enqueue(m2.clone()), EnqueueOutcome::Queued);

        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("m1"));
        assert_eq!(queue.pending_len(), 1);
    }

    #[test]
    fn test_dismiss_then_exit_shows_next() {
        let mut queue = NotificationQueue::new();
        let m1 = note("m1");
        queue.enqueue(m1.clone());
        queue.enqueue(note("m2"));

        assert_eq!(queue.dismiss(&m1.id), DismissOutcome::Hidden);
        assert!(queue.current().is_none());
        assert!(queue.is_exiting());

        let next = queue.finish_exit().map(|n| n.message.clone());
        assert_eq!(next.as_deref(), Some("m2"));
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn test_exit_with_nothing_pending_empties() {
        let mut queue = NotificationQueue::new();
        let m1 = note("m1");
        queue.enqueue(m1.clone());
        queue.dismiss(&m1.id);

        assert!(queue.finish_exit().is_none());
        assert_eq!(queue.state(), &QueueState::Empty);
    }

    #[test]
    fn test_enqueue_during_exit_waits_for_animation() {
        let mut queue = NotificationQueue::new();
        let m1 = note("m1");
        queue.enqueue(m1.clone());
        queue.dismiss(&m1.id);

        assert_eq!(queue.enqueue(note("m2")), EnqueueOutcome::Queued);
        assert!(queue.current().is_none());
        assert_eq!(queue.finish_exit().map(|n| n.message.as_str()), Some("m2"));
    }

    #[test]
    fn test_dismiss_pending_drops_it() {
        let mut queue = NotificationQueue::new();
        let m2 = note("m2");
        queue.enqueue(note("m1"));
        queue.enqueue(m2.clone());
        queue.enqueue(note("m3"));

        assert_eq!(queue.dismiss(&m2.id), DismissOutcome::Dropped);
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("m1"));
        assert_eq!(queue.pending_len(), 1);
    }

    #[test]
    fn test_stale_dismiss_is_not_found() {
        let mut queue = NotificationQueue::new();
        let m1 = note("m1");
        queue.enqueue(m1.clone());
        queue.dismiss(&m1.id);

        assert_eq!(queue.dismiss(&m1.id), DismissOutcome::NotFound);
        assert_eq!(NotificationQueue::new().dismiss("nope"), DismissOutcome::NotFound);
    }

    #[test]
    fn test_finish_exit_outside_exiting_is_noop() {
        let mut queue = NotificationQueue::new();
        queue.enqueue(note("m1"));
        queue.enqueue(note("m2"));

        assert_eq!(queue.finish_exit().map(|n| n.message.as_str()), Some("m1"));
        assert_eq!(queue.pending_len(), 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut queue = NotificationQueue::new();
        queue.enqueue(Notification::new("Saved", Severity::Success, None));
        let json = serde_json::to_value(queue.snapshot()).unwrap();
        assert_eq!(json["current"]["severity"], "success");
        assert_eq!(json["current"]["autoHideMs"], 5000);
        assert_eq!(json["pending"], 0);
        assert_eq!(json["exiting"], false);
    }
}
