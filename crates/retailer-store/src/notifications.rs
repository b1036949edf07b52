//! # Notification Center
//!
//! Drives the [`NotificationQueue`] with real timers.
//!
//! ## Timers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  notification becomes visible                                           │
//! │       │                                                                 │
//! │       └── spawn: sleep(auto_hide_ms) ──► remove(id)                    │
//! │                                              │                          │
//! │  remove(id) of the visible one ◄─────────────┘                          │
//! │       │ queue: Showing ──► Exiting                                      │
//! │       │                                                                 │
//! │       └── spawn: sleep(exit_animation) ──► finish_exit()               │
//! │                                              │                          │
//! │                     next one visible? ───────┴──► schedule its timer   │
//! │                                                                         │
//! │  Timers hold the notification id only. A timer whose notification is  │
//! │  already gone finds nothing and does nothing.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `add` and `remove` spawn onto the current Tokio runtime, so they must be
//! called from inside one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use retailer_core::notification::{DismissOutcome, EnqueueOutcome, QueueSnapshot};
use retailer_core::{Notification, NotificationQueue, Severity};
use tracing::debug;

use crate::events::DashboardEventEmitter;

/// Notification store.
///
/// Cheap to clone; clones share the same queue.
#[derive(Clone)]
pub struct NotificationCenter {
    queue: Arc<Mutex<NotificationQueue>>,
    default_auto_hide_ms: u64,
    exit_animation: Duration,
    emitter: Arc<dyn DashboardEventEmitter>,
}

impl NotificationCenter {
    pub fn new(
        default_auto_hide_ms: u64,
        exit_animation: Duration,
        emitter: Arc<dyn DashboardEventEmitter>,
    ) -> Self {
        NotificationCenter {
            queue: Arc::new(Mutex::new(NotificationQueue::new())),
            default_auto_hide_ms,
            exit_animation,
            emitter,
        }
    }

    fn lock(&self) -> MutexGuard<'_, NotificationQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, snapshot: QueueSnapshot) {
        self.emitter.emit_notifications(&snapshot);
    }

    /// The visible notification, if any.
    pub fn current(&self) -> Option<Notification> {
        self.lock().current().cloned()
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        self.lock().snapshot()
    }

    /// Queues a notification. It shows at once if nothing else is visible
    /// or exiting, otherwise after everything queued before it.
    ///
    /// `auto_hide_ms` of `None` uses the configured default.
    pub fn add(
        &self,
        message: impl Into<String>,
        severity: Severity,
        auto_hide_ms: Option<u64>,
    ) -> Notification {
        let notification = Notification::new(
            message,
            severity,
            Some(auto_hide_ms.unwrap_or(self.default_auto_hide_ms)),
        );

        let (outcome, snapshot) = {
            let mut queue = self.lock();
            let outcome = queue.enqueue(notification.clone());
            (outcome, queue.snapshot())
        };

        debug!(id = %notification.id, ?severity, ?outcome, "Notification added");

        if outcome == EnqueueOutcome::Shown {
            self.schedule_auto_hide(&notification);
        }
        self.emit(snapshot);
        notification
    }

    /// Dismisses a notification by id.
    ///
    /// Hiding the visible one starts the exit animation; the next waiting
    /// notification appears when it ends. Dismissing a waiting one drops it.
    /// Unknown ids do nothing.
    pub fn remove(&self, id: &str) -> DismissOutcome {
        let (outcome, snapshot) = {
            let mut queue = self.lock();
            let outcome = queue.dismiss(id);
            (outcome, queue.snapshot())
        };

        debug!(id, ?outcome, "Notification dismissed");

        match outcome {
            DismissOutcome::Hidden => {
                self.schedule_exit();
                self.emit(snapshot);
            }
            DismissOutcome::Dropped => self.emit(snapshot),
            DismissOutcome::NotFound => {}
        }
        outcome
    }

    fn schedule_auto_hide(&self, notification: &Notification) {
        let center = self.clone();
        let id = notification.id.clone();
        let delay = Duration::from_millis(notification.auto_hide_ms);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            center.remove(&id);
        });
    }

    fn schedule_exit(&self) {
        let center = self.clone();
        let delay = self.exit_animation;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            center.finish_exit();
        });
    }

    fn finish_exit(&self) {
        let (next, snapshot) = {
            let mut queue = self.lock();
            let next = queue.finish_exit().cloned();
            (next, queue.snapshot())
        };

        if let Some(next) = &next {
            debug!(id = %next.id, "Next notification shown");
            self.schedule_auto_hide(next);
        }
        self.emit(snapshot);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::testing::RecordingEmitter;
    use crate::events::NoOpEmitter;

    const EXIT: Duration = Duration::from_millis(300);

    fn center() -> NotificationCenter {
        NotificationCenter::new(5_000, EXIT, Arc::new(NoOpEmitter))
    }

    fn visible(center: &NotificationCenter) -> Option<String> {
        center.current().map(|n| n.message)
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_waits_for_first() {
        let center = center();
        let m1 = center.add("m1", Severity::Info, None);
        center.add("m2", Severity::Success, None);

        assert_eq!(visible(&center).as_deref(), Some("m1"));
        assert_eq!(center.snapshot().pending, 1);

        assert_eq!(center.remove(&m1.id), DismissOutcome::Hidden);
        assert_eq!(visible(&center), None);

        sleep_ms(301).await;
        assert_eq!(visible(&center).as_deref(), Some("m2"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_hide_after_default_duration() {
        let center = center();
        center.add("Saved", Severity::Success, None);

        sleep_ms(4_999).await;
        assert_eq!(visible(&center).as_deref(), Some("Saved"));

        sleep_ms(2).await;
        assert_eq!(visible(&center), None);
        assert!(center.snapshot().exiting);

        sleep_ms(300).await;
        assert!(!center.snapshot().exiting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_duration() {
        let center = center();
        let n = center.add("Theme", Severity::Info, Some(3_000));
        assert_eq!(n.auto_hide_ms, 3_000);

        sleep_ms(3_001).await;
        assert_eq!(visible(&center), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queue_drains_in_order() {
        let center = center();
        center.add("m1", Severity::Info, Some(1_000));
        center.add("m2", Severity::Info, Some(1_000));
        center.add("m3", Severity::Info, Some(1_000));

        sleep_ms(1_001).await;
        sleep_ms(300).await;
        assert_eq!(visible(&center).as_deref(), Some("m2"));

        sleep_ms(1_001).await;
        sleep_ms(300).await;
        assert_eq!(visible(&center).as_deref(), Some("m3"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss_cancels_nothing_else() {
        let center = center();
        let m1 = center.add("m1", Severity::Info, Some(1_000));
        center.add("m2", Severity::Info, Some(5_000));

        center.remove(&m1.id);
        sleep_ms(301).await;
        assert_eq!(visible(&center).as_deref(), Some("m2"));

        // m1's own timer fires now and must not touch m2.
        sleep_ms(1_000).await;
        assert_eq!(visible(&center).as_deref(), Some("m2"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_unknown_is_silent() {
        let emitter = Arc::new(RecordingEmitter::default());
        let center = NotificationCenter::new(5_000, EXIT, emitter.clone());

        assert_eq!(center.remove("missing"), DismissOutcome::NotFound);
        assert!(emitter.notifications.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_on_changes() {
        let emitter = Arc::new(RecordingEmitter::default());
        let center = NotificationCenter::new(5_000, EXIT, emitter.clone());

        let n = center.add("m1", Severity::Warning, None);
        center.remove(&n.id);
        sleep_ms(301).await;

        let events = emitter.notifications.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert!(events[0].current.is_some());
        assert!(events[1].exiting);
        assert!(events[2].current.is_none() && !events[2].exiting);
    }
}
