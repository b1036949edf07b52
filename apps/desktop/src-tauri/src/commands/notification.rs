//! # Notification Commands
//!
//! Toast queue commands. These are `async` so they run on the Tokio runtime,
//! where the auto-dismiss and exit-animation timers are spawned.

use retailer_core::notification::{DismissOutcome, QueueSnapshot};
use retailer_core::page::theme_notice;
use retailer_core::{Notification, Severity};
use retailer_store::{NotificationCenter, SettingsStore};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;

/// Queues a notification.
///
/// ## Arguments
/// * `severity` - Defaults to `info`
/// * `auto_hide_ms` - Defaults to the configured duration
#[tauri::command]
pub async fn add_notification(
    notifications: State<'_, NotificationCenter>,
    message: String,
    severity: Option<Severity>,
    auto_hide_ms: Option<u64>,
) -> Result<Notification, ApiError> {
    debug!(message = %message, ?severity, ?auto_hide_ms, "add_notification command");
    Ok(notifications.add(message, severity.unwrap_or_default(), auto_hide_ms))
}

/// Dismisses a notification.
///
/// ## Returns
/// `true` if a visible or waiting notification had that id.
#[tauri::command]
pub async fn remove_notification(
    notifications: State<'_, NotificationCenter>,
    id: String,
) -> Result<bool, ApiError> {
    debug!(id = %id, "remove_notification command");
    Ok(notifications.remove(&id) != DismissOutcome::NotFound)
}

#[tauri::command]
pub fn get_notifications(notifications: State<'_, NotificationCenter>) -> QueueSnapshot {
    notifications.snapshot()
}

/// Dashboard "Show Current Theme" button.
#[tauri::command]
pub async fn show_theme_notice(
    settings: State<'_, SettingsStore>,
    notifications: State<'_, NotificationCenter>,
) -> Result<Notification, ApiError> {
    debug!("show_theme_notice command");
    let notice = theme_notice(&settings.snapshot());
    Ok(notifications.add(notice.message, notice.severity, Some(notice.auto_hide_ms)))
}
