//! # Settings Commands
//!
//! One command per settings field plus the toggles. Every command returns
//! the full snapshot after the change.
//!
//! ```text
//! invoke('set_theme_preset', { value: 'creative' })
//!        │
//!        ▼
//! "creative".parse::<ThemePreset>()  ── unknown key ──► VALIDATION_ERROR
//!        │
//!        ▼
//! SettingsStore::dispatch(SetThemePreset(Creative)) ──► "settings:changed"
//! ```

use std::str::FromStr;

use retailer_core::settings::{
    ColorScheme, LayoutVariant, LayoutWidth, NavbarPosition, SettingsAction, SidebarStyle,
    ThemePreset,
};
use retailer_core::{Settings, ValidationError};
use retailer_store::SettingsStore;
use tauri::State;
use tracing::debug;

use crate::error::ApiError;

/// Parses a key strictly, then dispatches the action it maps to.
fn set_field<T>(
    settings: &SettingsStore,
    value: &str,
    action: impl FnOnce(T) -> SettingsAction,
) -> Result<Settings, ApiError>
where
    T: FromStr<Err = ValidationError>,
{
    let parsed = value.trim().parse::<T>()?;
    Ok(settings.dispatch(action(parsed)))
}

/// Gets the current settings snapshot.
#[tauri::command]
pub fn get_settings(settings: State<'_, SettingsStore>) -> Settings {
    debug!("get_settings command");
    settings.snapshot()
}

/// Sets content width (`compact`, `default`, `wide`).
#[tauri::command]
pub fn set_layout_width(
    settings: State<'_, SettingsStore>,
    value: String,
) -> Result<Settings, ApiError> {
    debug!(value = %value, "set_layout_width command");
    set_field::<LayoutWidth>(&settings, &value, SettingsAction::SetLayoutWidth)
}

/// Sets the sidebar-shell accent (`blue`, `green`, `purple`, `orange`, `teal`).
#[tauri::command]
pub fn set_color_scheme(
    settings: State<'_, SettingsStore>,
    value: String,
) -> Result<Settings, ApiError> {
    debug!(value = %value, "set_color_scheme command");
    set_field::<ColorScheme>(&settings, &value, SettingsAction::SetColorScheme)
}

#[tauri::command]
pub fn set_navbar_position(
    settings: State<'_, SettingsStore>,
    value: String,
) -> Result<Settings, ApiError> {
    debug!(value = %value, "set_navbar_position command");
    set_field::<NavbarPosition>(&settings, &value, SettingsAction::SetNavbarPosition)
}

#[tauri::command]
pub fn set_sidebar_style(
    settings: State<'_, SettingsStore>,
    value: String,
) -> Result<Settings, ApiError> {
    debug!(value = %value, "set_sidebar_style command");
    set_field::<SidebarStyle>(&settings, &value, SettingsAction::SetSidebarStyle)
}

/// Switches the dashboard shell.
///
/// ## Arguments
/// * `value` - One of the seven layout keys, e.g. `"content-focused"`
#[tauri::command]
pub fn set_layout_variant(
    settings: State<'_, SettingsStore>,
    value: String,
) -> Result<Settings, ApiError> {
    debug!(value = %value, "set_layout_variant command");
    set_field::<LayoutVariant>(&settings, &value, SettingsAction::SetLayoutVariant)
}

#[tauri::command]
pub fn set_theme_preset(
    settings: State<'_, SettingsStore>,
    value: String,
) -> Result<Settings, ApiError> {
    debug!(value = %value, "set_theme_preset command");
    set_field::<ThemePreset>(&settings, &value, SettingsAction::SetThemePreset)
}

#[tauri::command]
pub fn toggle_dark_mode(settings: State<'_, SettingsStore>) -> Settings {
    debug!("toggle_dark_mode command");
    settings.dispatch(SettingsAction::ToggleDarkMode)
}

#[tauri::command]
pub fn toggle_settings_panel(settings: State<'_, SettingsStore>) -> Settings {
    debug!("toggle_settings_panel command");
    settings.dispatch(SettingsAction::ToggleSettingsPanel)
}

#[tauri::command]
pub fn close_settings_panel(settings: State<'_, SettingsStore>) -> Settings {
    debug!("close_settings_panel command");
    settings.dispatch(SettingsAction::CloseSettingsPanel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use retailer_store::NoOpEmitter;
    use std::sync::Arc;

    fn store() -> SettingsStore {
        SettingsStore::new(Settings::default(), Arc::new(NoOpEmitter))
    }

    #[test]
    fn test_set_field_parses_and_dispatches() {
        let store = store();
        let next =
            set_field::<LayoutVariant>(&store, " footer ", SettingsAction::SetLayoutVariant).unwrap();
        assert_eq!(next.layout_variant, LayoutVariant::Footer);
    }

    #[test]
    fn test_set_field_rejects_unknown_key() {
        let store = store();
        let err = set_field::<ColorScheme>(&store, "magenta", SettingsAction::SetColorScheme)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(store.snapshot(), Settings::default());
    }
}
