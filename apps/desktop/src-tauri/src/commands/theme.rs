//! # Theme Commands
//!
//! Palette lookups for the current settings and for settings-panel
//! previews.

use retailer_core::settings::ColorScheme;
use retailer_core::theme::resolve_theme_key;
use retailer_core::{resolve_scheme_theme, resolve_theme, Settings, ThemeMode, ThemePalette};
use retailer_store::SettingsStore;
use serde::Serialize;
use tauri::State;
use tracing::debug;

/// Both theme axes for the current settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDto {
    /// From the theme preset.
    pub palette: ThemePalette,
    /// From the color scheme.
    pub scheme: ThemePalette,
    pub mode: ThemeMode,
}

/// Gets the palettes for the current settings.
#[tauri::command]
pub fn get_theme(settings: State<'_, SettingsStore>) -> ThemeDto {
    debug!("get_theme command");
    theme_for(&settings.snapshot())
}

/// Resolves both axes from one settings snapshot.
fn theme_for(settings: &Settings) -> ThemeDto {
    ThemeDto {
        palette: resolve_theme(settings.theme_preset, settings.dark_mode),
        scheme: resolve_scheme_theme(settings.color_scheme, settings.dark_mode),
        mode: ThemeMode::for_preset(settings.theme_preset, settings.dark_mode),
    }
}

/// Resolves a palette without changing the settings.
///
/// ## Arguments
/// * `preset` - Theme preset key; unknown keys preview `default`
/// * `scheme` - Optional color scheme key; when given, previews the scheme
///   axis instead of the preset
/// * `dark_mode` - Whether to apply the dark override
#[tauri::command]
pub fn preview_theme(preset: String, scheme: Option<String>, dark_mode: bool) -> ThemePalette {
    debug!(preset = %preset, ?scheme, dark_mode, "preview_theme command");
    match scheme {
        Some(key) => resolve_scheme_theme(ColorScheme::from_key(&key), dark_mode),
        None => resolve_theme_key(&preset, dark_mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retailer_core::settings::ThemePreset;

    #[test]
    fn test_theme_for_uses_one_snapshot() {
        let settings = Settings::default()
            .with_theme_preset(ThemePreset::Playful)
            .with_color_scheme(ColorScheme::Teal)
            .toggle_dark_mode();

        let dto = theme_for(&settings);
        assert_eq!(dto.palette, resolve_theme(ThemePreset::Playful, true));
        assert_eq!(dto.scheme, resolve_scheme_theme(ColorScheme::Teal, true));
        assert_eq!(dto.mode, ThemeMode::for_preset(ThemePreset::Playful, true));
        assert_eq!(dto.palette.background, dto.scheme.background);
    }
}
