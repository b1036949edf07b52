//! # Store Setup
//!
//! Configuration and the root handle that owns every dashboard store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Dashboard Stores                               │
//! │                                                                         │
//! │  Tauri App Startup                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new() ← delays, durations, initial settings              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stores::new(config, emitter)                                          │
//! │       │                                                                 │
//! │       ├── settings()      SettingsStore     (watch channel)            │
//! │       ├── catalog()       ProductCatalog    (RwLock + fetch delay)     │
//! │       ├── notifications() NotificationCenter (Mutex + timers)          │
//! │       └── shell_ui()      ShellUiStore      (Mutex, per variant)       │
//! │                                                                         │
//! │  Accessors hand out clones that share state with the root.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use retailer_core::{Settings, DEFAULT_AUTO_HIDE_MS, EXIT_ANIMATION_MS, FETCH_DELAY_MS};
use tracing::info;

use crate::catalog::ProductCatalog;
use crate::events::DashboardEventEmitter;
use crate::notifications::NotificationCenter;
use crate::settings::SettingsStore;
use crate::shell_ui::ShellUiStore;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use retailer_store::StoreConfig;
///
/// let config = StoreConfig::new()
///     .fetch_delay(Duration::from_millis(250))
///     .default_auto_hide_ms(4_000);
/// assert_eq!(config.default_auto_hide_ms, 4_000);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Simulated latency of the product fetch.
    /// Default: 1 second
    pub fetch_delay: Duration,

    /// Auto-dismiss delay for notifications added without one.
    /// Default: 5000 ms
    pub default_auto_hide_ms: u64,

    /// Time between hiding a notification and showing the next.
    /// Default: 300 ms
    pub exit_animation: Duration,

    /// When set, every fetch fails with this message.
    /// Default: none
    pub fail_fetch_with: Option<String>,

    /// Settings the dashboard starts with.
    pub initial_settings: Settings,
}

impl StoreConfig {
    pub fn new() -> Self {
        StoreConfig {
            fetch_delay: Duration::from_millis(FETCH_DELAY_MS),
            default_auto_hide_ms: DEFAULT_AUTO_HIDE_MS,
            exit_animation: Duration::from_millis(EXIT_ANIMATION_MS),
            fail_fetch_with: None,
            initial_settings: Settings::default(),
        }
    }

    /// Sets the simulated fetch latency.
    pub fn fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Sets the default auto-dismiss delay.
    pub fn default_auto_hide_ms(mut self, ms: u64) -> Self {
        self.default_auto_hide_ms = ms;
        self
    }

    /// Sets the exit animation length.
    pub fn exit_animation(mut self, duration: Duration) -> Self {
        self.exit_animation = duration;
        self
    }

    /// Makes every fetch fail with `message`.
    pub fn fail_fetch_with(mut self, message: impl Into<String>) -> Self {
        self.fail_fetch_with = Some(message.into());
        self
    }

    pub fn initial_settings(mut self, settings: Settings) -> Self {
        self.initial_settings = settings;
        self
    }

    /// Configuration with no delays (for testing).
    ///
    /// Notifications still auto-hide, after the default duration.
    pub fn instant() -> Self {
        StoreConfig {
            fetch_delay: Duration::ZERO,
            exit_animation: Duration::ZERO,
            ..StoreConfig::new()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Stores
// =============================================================================

/// Root handle for the dashboard state.
#[derive(Clone)]
pub struct Stores {
    settings: SettingsStore,
    catalog: ProductCatalog,
    notifications: NotificationCenter,
    shell_ui: ShellUiStore,
}

impl Stores {
    /// Creates every store from one configuration.
    ///
    /// The catalog starts empty and `idle`; call `catalog().fetch()` to
    /// load it.
    pub fn new(config: StoreConfig, emitter: Arc<dyn DashboardEventEmitter>) -> Self {
        info!(
            fetch_delay_ms = config.fetch_delay.as_millis() as u64,
            auto_hide_ms = config.default_auto_hide_ms,
            simulated_failure = config.fail_fetch_with.is_some(),
            "Initializing dashboard stores"
        );

        Stores {
            settings: SettingsStore::new(config.initial_settings, emitter.clone()),
            catalog: ProductCatalog::new(config.fetch_delay, config.fail_fetch_with, emitter.clone()),
            notifications: NotificationCenter::new(
                config.default_auto_hide_ms,
                config.exit_animation,
                emitter,
            ),
            shell_ui: ShellUiStore::new(),
        }
    }

    pub fn settings(&self) -> SettingsStore {
        self.settings.clone()
    }

    pub fn catalog(&self) -> ProductCatalog {
        self.catalog.clone()
    }

    pub fn notifications(&self) -> NotificationCenter {
        self.notifications.clone()
    }

    pub fn shell_ui(&self) -> ShellUiStore {
        self.shell_ui.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NoOpEmitter;
    use retailer_core::product::FetchStatus;
    use retailer_core::settings::{LayoutVariant, SettingsAction};
    use retailer_core::{NewProduct, Severity};

    fn stores(config: StoreConfig) -> Stores {
        Stores::new(config, Arc::new(NoOpEmitter))
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new()
            .fetch_delay(Duration::from_millis(10))
            .exit_animation(Duration::from_millis(20))
            .fail_fetch_with("offline");

        assert_eq!(config.fetch_delay, Duration::from_millis(10));
        assert_eq!(config.exit_animation, Duration::from_millis(20));
        assert_eq!(config.fail_fetch_with.as_deref(), Some("offline"));
        assert_eq!(config.default_auto_hide_ms, 5_000);
    }

    #[test]
    fn test_accessors_share_state() {
        let stores = stores(StoreConfig::instant());
        stores
            .settings()
            .dispatch(SettingsAction::SetLayoutVariant(LayoutVariant::Minimal));
        assert_eq!(stores.settings().snapshot().layout_variant, LayoutVariant::Minimal);

        stores
            .catalog()
            .add(NewProduct {
                name: "Mug".to_string(),
                description: String::new(),
                price_cents: 899,
                category: "Home".to_string(),
                stock_quantity: 1,
                image_url: None,
            })
            .unwrap();
        assert_eq!(stores.catalog().list().len(), 1);
    }

    #[test]
    fn test_initial_settings() {
        let initial = Settings::default().toggle_dark_mode();
        let stores = stores(StoreConfig::instant().initial_settings(initial));
        assert!(stores.settings().snapshot().dark_mode);
    }

    #[tokio::test(start_paused = true)]
    async fn test_instant_fetch() {
        let stores = stores(StoreConfig::instant());
        stores.catalog().fetch().await.unwrap();
        assert_eq!(stores.catalog().status(), FetchStatus::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifications_available() {
        let stores = stores(StoreConfig::instant());
        stores.notifications().add("Welcome", Severity::Info, None);
        assert!(stores.notifications().current().is_some());
    }
}
