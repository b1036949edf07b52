//! # Change Events
//!
//! Every store reports its new state to an event emitter after each change.
//! The desktop app forwards these to the WebView; tests record them.
//!
//! ```text
//! SettingsStore ──┐
//! ProductCatalog ─┼──► DashboardEventEmitter ──► "settings:changed"
//! Notifications ──┘                              "catalog:changed"
//!                                                "notification:changed"
//! ```

use retailer_core::notification::QueueSnapshot;
use retailer_core::Settings;

use crate::catalog::CatalogSnapshot;

/// Receives state changes from the stores.
///
/// Called with the store's lock released, so implementations may read the
/// stores again.
pub trait DashboardEventEmitter: Send + Sync {
    /// Settings were replaced by a new snapshot.
    fn emit_settings(&self, settings: &Settings);

    /// Product list or fetch status changed.
    fn emit_catalog(&self, catalog: &CatalogSnapshot);

    /// Visible or waiting notifications changed.
    fn emit_notifications(&self, queue: &QueueSnapshot);
}

/// No-op event emitter for testing.
pub struct NoOpEmitter;

impl DashboardEventEmitter for NoOpEmitter {
    fn emit_settings(&self, _settings: &Settings) {}
    fn emit_catalog(&self, _catalog: &CatalogSnapshot) {}
    fn emit_notifications(&self, _queue: &QueueSnapshot) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Emitter that keeps every event it receives.
    #[derive(Default)]
    pub struct RecordingEmitter {
        pub settings: Mutex<Vec<Settings>>,
        pub catalog: Mutex<Vec<CatalogSnapshot>>,
        pub notifications: Mutex<Vec<QueueSnapshot>>,
    }

    impl DashboardEventEmitter for RecordingEmitter {
        fn emit_settings(&self, settings: &Settings) {
            self.settings.lock().unwrap().push(*settings);
        }

        fn emit_catalog(&self, catalog: &CatalogSnapshot) {
            self.catalog.lock().unwrap().push(catalog.clone());
        }

        fn emit_notifications(&self, queue: &QueueSnapshot) {
            self.notifications.lock().unwrap().push(queue.clone());
        }
    }
}
