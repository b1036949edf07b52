//! # Settings Store
//!
//! Holds the current [`Settings`] snapshot in a `watch` channel.
//!
//! ```text
//! dispatch(action) ──► Settings::apply ──► changed? ──┬──► watch receivers
//!                                                     └──► emit_settings
//! ```
//!
//! Every change replaces the whole snapshot. Readers always see a complete,
//! consistent `Settings` value.

use std::sync::Arc;

use retailer_core::layout::ShellView;
use retailer_core::settings::SettingsAction;
use retailer_core::theme::{ThemeMode, ThemePalette};
use retailer_core::{resolve_theme, select_shell, Settings};
use tokio::sync::watch;
use tracing::debug;

use crate::events::DashboardEventEmitter;

/// Settings store.
///
/// Cheap to clone; clones share the same snapshot.
#[derive(Clone)]
pub struct SettingsStore {
    state_tx: Arc<watch::Sender<Settings>>,
    emitter: Arc<dyn DashboardEventEmitter>,
}

impl SettingsStore {
    pub fn new(initial: Settings, emitter: Arc<dyn DashboardEventEmitter>) -> Self {
        let (state_tx, _) = watch::channel(initial);
        SettingsStore {
            state_tx: Arc::new(state_tx),
            emitter,
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Settings {
        *self.state_tx.borrow()
    }

    /// Receiver that wakes on every change.
    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.state_tx.subscribe()
    }

    /// Applies one action and returns the new snapshot.
    ///
    /// Actions that leave the settings unchanged (setting a field to its
    /// current value, closing an already closed panel) notify nobody.
    pub fn dispatch(&self, action: SettingsAction) -> Settings {
        let mut next = Settings::default();
        let changed = self.state_tx.send_if_modified(|current| {
            next = current.apply(action);
            let changed = next != *current;
            *current = next;
            changed
        });

        debug!(action = action.name(), changed, "Settings action");

        if changed {
            self.emitter.emit_settings(&next);
        }
        next
    }

    /// Palette for the current preset and dark flag.
    pub fn theme(&self) -> (ThemePalette, ThemeMode) {
        let settings = self.snapshot();
        (
            resolve_theme(settings.theme_preset, settings.dark_mode),
            ThemeMode::for_preset(settings.theme_preset, settings.dark_mode),
        )
    }

    /// Shell regions for the current settings.
    pub fn shell(&self) -> ShellView {
        let settings = self.snapshot();
        select_shell(settings.layout_variant).view(&settings)
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
    use retailer_core::settings::{LayoutVariant, ThemePreset};

    fn store() -> SettingsStore {
        SettingsStore::new(Settings::default(), Arc::new(NoOpEmitter))
    }

    #[test]
    fn test_dispatch_replaces_field() {
        let store = store();
        let next = store.dispatch(SettingsAction::SetThemePreset(ThemePreset::Elegant));
        assert_eq!(next.theme_preset, ThemePreset::Elegant);
        assert_eq!(store.snapshot(), next);
    }

    #[test]
    fn test_default_dark_theme() {
        let store = store();
        store.dispatch(SettingsAction::ToggleDarkMode);

        let (palette, mode) = store.theme();
        assert_eq!(palette.background, "#0f172a");
        assert_eq!(palette.primary, "#0ea5e9");
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn test_footer_shell() {
        let store = store();
        store.dispatch(SettingsAction::SetLayoutVariant(LayoutVariant::Footer));

        let shell = store.shell();
        assert!(shell.footer.is_some());
        assert!(shell.sidebar.is_none());
    }

    #[test]
    fn test_unchanged_dispatch_emits_nothing() {
        let emitter = Arc::new(RecordingEmitter::default());
        let store = SettingsStore::new(Settings::default(), emitter.clone());

        store.dispatch(SettingsAction::CloseSettingsPanel);
        assert!(emitter.settings.lock().unwrap().is_empty());

        store.dispatch(SettingsAction::ToggleSettingsPanel);
        store.dispatch(SettingsAction::CloseSettingsPanel);
        let events = emitter.settings.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].settings_panel_open);
        assert!(!events[1].settings_panel_open);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = store();
        let mut rx = store.subscribe();

        store.dispatch(SettingsAction::ToggleDarkMode);
        rx.changed().await.unwrap();
        assert!(rx.borrow().dark_mode);
    }
}
