//! # Store Events
//!
//! Forwards store changes to the WebView.
//!
//! ## Event Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  Frontend                                                                │
//! │  ────────                                                                │
//! │                                                                          │
//! │  const { listen } = window.__TAURI__.event;                              │
//! │                                                                          │
//! │  listen('settings:changed', (event) => {                                 │
//! │    rerender(event.payload);                                              │
//! │  });                                                                     │
//! │                                                                          │
//! │  listen('notification:changed', (event) => {                             │
//! │    showToast(event.payload.current);                                     │
//! │  });                                                                     │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```

use retailer_core::notification::QueueSnapshot;
use retailer_core::Settings;
use retailer_store::{CatalogSnapshot, DashboardEventEmitter};
use tauri::{AppHandle, Emitter};
use tracing::{debug, error};

pub const SETTINGS_CHANGED: &str = "settings:changed";
pub const CATALOG_CHANGED: &str = "catalog:changed";
pub const NOTIFICATION_CHANGED: &str = "notification:changed";

/// Tauri-based event emitter.
#[derive(Clone)]
pub struct TauriEventEmitter {
    app_handle: AppHandle,
}

impl TauriEventEmitter {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl DashboardEventEmitter for TauriEventEmitter {
    fn emit_settings(&self, settings: &Settings) {
        if let Err(e) = self.app_handle.emit(SETTINGS_CHANGED, settings) {
            error!(?e, "Failed to emit settings:changed event");
        }
        debug!(?settings, "Emitted settings:changed");
    }

    fn emit_catalog(&self, catalog: &CatalogSnapshot) {
        if let Err(e) = self.app_handle.emit(CATALOG_CHANGED, catalog) {
            error!(?e, "Failed to emit catalog:changed event");
        }
        debug!(
            count = catalog.products.len(),
            status = ?catalog.status,
            "Emitted catalog:changed"
        );
    }

    fn emit_notifications(&self, queue: &QueueSnapshot) {
        if let Err(e) = self.app_handle.emit(NOTIFICATION_CHANGED, queue) {
            error!(?e, "Failed to emit notification:changed event");
        }
        debug!(
            visible = queue.current.is_some(),
            pending = queue.pending,
            "Emitted notification:changed"
        );
    }
}
