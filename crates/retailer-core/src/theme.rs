//! # Theme Resolver
//!
//! Maps settings onto concrete palettes.
//!
//! ## Two Independent Axes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  (ThemePreset, dark_mode) ──► resolve_theme ──────► ThemePalette       │
//! │       7 presets                                     (page surfaces,    │
//! │                                                      text, status)     │
//! │                                                                         │
//! │  (ColorScheme, dark_mode) ──► resolve_scheme_theme ► ThemePalette      │
//! │       5 schemes                                     (shell accent in   │
//! │                                                      the sidebar       │
//! │                                                      layouts)          │
//! │                                                                         │
//! │  Dark override (both axes, except the `dark` preset):                  │
//! │    background     → #0f172a                                            │
//! │    paper          → #1e293b                                            │
//! │    text_primary   → #f1f5f9                                            │
//! │    text_secondary → #cbd5e1                                            │
//! │    everything else unchanged                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The axes are never synchronized: picking a color scheme does not change
//! the preset and vice versa.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::settings::{ColorScheme, ThemePreset};

// =============================================================================
// Palette
// =============================================================================

/// A resolved set of colors, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalette {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
    pub background: String,
    pub paper: String,
    pub text_primary: String,
    pub text_secondary: String,
}

/// Light or dark rendering mode, reported next to the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Mode for a preset under the dark-mode flag. The `dark` preset is
    /// always dark.
    pub fn for_preset(preset: ThemePreset, dark_mode: bool) -> Self {
        if dark_mode || preset == ThemePreset::Dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Capitalized label ("Dark" / "Light").
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

// =============================================================================
// Tables
// =============================================================================

/// Static palette row. Converted into an owned [`ThemePalette`] on lookup.
#[derive(Debug, Clone, Copy)]
struct PaletteSpec {
    primary: &'static str,
    secondary: &'static str,
    success: &'static str,
    warning: &'static str,
    error: &'static str,
    info: &'static str,
    background: &'static str,
    paper: &'static str,
    text_primary: &'static str,
    text_secondary: &'static str,
}

impl PaletteSpec {
    fn to_palette(self) -> ThemePalette {
        ThemePalette {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            success: self.success.to_string(),
            warning: self.warning.to_string(),
            error: self.error.to_string(),
            info: self.info.to_string(),
            background: self.background.to_string(),
            paper: self.paper.to_string(),
            text_primary: self.text_primary.to_string(),
            text_secondary: self.text_secondary.to_string(),
        }
    }
}

const DEFAULT: PaletteSpec = PaletteSpec {
    primary: "#0ea5e9",
    secondary: "#f59e0b",
    success: "#10b981",
    warning: "#f59e0b",
    error: "#ef4444",
    info: "#3b82f6",
    background: "#f8fafc",
    paper: "#ffffff",
    text_primary: "#1e293b",
    text_secondary: "#64748b",
};

const CORPORATE: PaletteSpec = PaletteSpec {
    primary: "#1e40af",
    secondary: "#475569",
    success: "#059669",
    warning: "#d97706",
    error: "#dc2626",
    info: "#0284c7",
    background: "#f1f5f9",
    paper: "#ffffff",
    text_primary: "#0f172a",
    text_secondary: "#475569",
};

const CREATIVE: PaletteSpec = PaletteSpec {
    primary: "#8b5cf6",
    secondary: "#ec4899",
    success: "#10b981",
    warning: "#f59e0b",
    error: "#ef4444",
    info: "#3b82f6",
    background: "#f5f3ff",
    paper: "#ffffff",
    text_primary: "#4c1d95",
    text_secondary: "#6d28d9",
};

const ELEGANT: PaletteSpec = PaletteSpec {
    primary: "#0f766e",
    secondary: "#ca8a04",
    success: "#15803d",
    warning: "#b45309",
    error: "#b91c1c",
    info: "#0369a1",
    background: "#f0fdfa",
    paper: "#ffffff",
    text_primary: "#134e4a",
    text_secondary: "#115e59",
};

const PLAYFUL: PaletteSpec = PaletteSpec {
    primary: "#f97316",
    secondary: "#8b5cf6",
    success: "#84cc16",
    warning: "#facc15",
    error: "#ef4444",
    info: "#06b6d4",
    background: "#fff7ed",
    paper: "#ffffff",
    text_primary: "#7c2d12",
    text_secondary: "#9a3412",
};

const MINIMAL: PaletteSpec = PaletteSpec {
    primary: "#525252",
    secondary: "#737373",
    success: "#16a34a",
    warning: "#ca8a04",
    error: "#dc2626",
    info: "#0284c7",
    background: "#fafafa",
    paper: "#ffffff",
    text_primary: "#171717",
    text_secondary: "#404040",
};

const DARK: PaletteSpec = PaletteSpec {
    primary: "#38bdf8",
    secondary: "#fb923c",
    success: "#4ade80",
    warning: "#fbbf24",
    error: "#f87171",
    info: "#60a5fa",
    background: "#0f172a",
    paper: "#1e293b",
    text_primary: "#f1f5f9",
    text_secondary: "#cbd5e1",
};

/// Surface and text colors swapped in when dark mode is on.
pub const DARK_BACKGROUND: &str = "#0f172a";
pub const DARK_PAPER: &str = "#1e293b";
pub const DARK_TEXT_PRIMARY: &str = "#f1f5f9";
pub const DARK_TEXT_SECONDARY: &str = "#cbd5e1";

fn preset_spec(preset: ThemePreset) -> PaletteSpec {
    match preset {
        ThemePreset::Default => DEFAULT,
        ThemePreset::Corporate => CORPORATE,
        ThemePreset::Creative => CREATIVE,
        ThemePreset::Elegant => ELEGANT,
        ThemePreset::Playful => PLAYFUL,
        ThemePreset::Minimal => MINIMAL,
        ThemePreset::Dark => DARK,
    }
}

fn apply_dark_override(palette: &mut ThemePalette) {
    palette.background = DARK_BACKGROUND.to_string();
    palette.paper = DARK_PAPER.to_string();
    palette.text_primary = DARK_TEXT_PRIMARY.to_string();
    palette.text_secondary = DARK_TEXT_SECONDARY.to_string();
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolves a preset under the dark-mode flag.
///
/// ## Rules
/// - Look up the preset's palette
/// - If `dark_mode` is set and the preset is not `dark`, replace background,
///   paper and both text colors with the dark quadruple
/// - The `dark` preset is returned unmodified whatever the flag says
///
/// ## Example
/// ```rust
/// use retailer_core::settings::ThemePreset;
/// use retailer_core::theme::resolve_theme;
///
/// let p = resolve_theme(ThemePreset::Corporate, true);
/// assert_eq!(p.primary, "#1e40af");
/// assert_eq!(p.paper, "#1e293b");
/// ```
pub fn resolve_theme(preset: ThemePreset, dark_mode: bool) -> ThemePalette {
    let mut palette = preset_spec(preset).to_palette();
    if dark_mode && preset != ThemePreset::Dark {
        apply_dark_override(&mut palette);
    }
    palette
}

/// Resolves a preset by key. Unknown keys resolve as the `default` preset.
pub fn resolve_theme_key(key: &str, dark_mode: bool) -> ThemePalette {
    resolve_theme(ThemePreset::from_key(key), dark_mode)
}

/// Resolves the color-scheme axis.
///
/// The base is the `default` preset with primary and secondary replaced by
/// the scheme's accent pair. Each scheme carries a lighter accent pair for
/// dark mode, and the dark override applies to the surfaces.
pub fn resolve_scheme_theme(scheme: ColorScheme, dark_mode: bool) -> ThemePalette {
    let (primary, secondary) = scheme.accent(dark_mode);
    let mut palette = DEFAULT.to_palette();
    palette.primary = primary.to_string();
    palette.secondary = secondary.to_string();
    if dark_mode {
        apply_dark_override(&mut palette);
    }
    palette
}

impl ColorScheme {
    /// Primary/secondary accent pair for light or dark mode.
    pub fn accent(&self, dark_mode: bool) -> (&'static str, &'static str) {
        match (self, dark_mode) {
            (ColorScheme::Blue, false) => ("#2196f3", "#ffc107"),
            (ColorScheme::Green, false) => ("#4caf50", "#ff9800"),
            (ColorScheme::Purple, false) => ("#673ab7", "#ffeb3b"),
            (ColorScheme::Orange, false) => ("#ff9800", "#03a9f4"),
            (ColorScheme::Teal, false) => ("#009688", "#e91e63"),
            (ColorScheme::Blue, true) => ("#42a5f5", "#ffca28"),
            (ColorScheme::Green, true) => ("#66bb6a", "#ffa726"),
            (ColorScheme::Purple, true) => ("#9575cd", "#fff176"),
            (ColorScheme::Orange, true) => ("#ffb74d", "#4fc3f7"),
            (ColorScheme::Teal, true) => ("#4db6ac", "#f06292"),
        }
    }

    /// Swatch shown for this scheme in the settings drawer.
    pub fn swatch(&self) -> &'static str {
        match self {
            ColorScheme::Blue => "#0ea5e9",
            ColorScheme::Green => "#10b981",
            ColorScheme::Purple => "#8b5cf6",
            ColorScheme::Orange => "#f59e0b",
            ColorScheme::Teal => "#14b8a6",
        }
    }
}

impl ThemePreset {
    /// Primary color of the preset, used as its swatch in the drawer.
    pub fn swatch(&self) -> &'static str {
        preset_spec(*self).primary
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_light() {
        let p = resolve_theme(ThemePreset::Default, false);
        assert_eq!(p.primary, "#0ea5e9");
        assert_eq!(p.background, "#f8fafc");
        assert_eq!(p.paper, "#ffffff");
        assert_eq!(p.text_primary, "#1e293b");
    }

    #[test]
    fn test_dark_override_replaces_only_surfaces() {
        for preset in ThemePreset::ALL.iter().filter(|p| **p != ThemePreset::Dark) {
            let light = resolve_theme(*preset, false);
            let dark = resolve_theme(*preset, true);

            assert_eq!(dark.background, DARK_BACKGROUND);
            assert_eq!(dark.paper, DARK_PAPER);
            assert_eq!(dark.text_primary, DARK_TEXT_PRIMARY);
            assert_eq!(dark.text_secondary, DARK_TEXT_SECONDARY);

            assert_eq!(dark.primary, light.primary);
            assert_eq!(dark.secondary, light.secondary);
            assert_eq!(dark.success, light.success);
            assert_eq!(dark.warning, light.warning);
            assert_eq!(dark.error, light.error);
            assert_eq!(dark.info, light.info);
        }
    }

    #[test]
    fn test_dark_preset_ignores_flag() {
        assert_eq!(
            resolve_theme(ThemePreset::Dark, true),
            resolve_theme(ThemePreset::Dark, false)
        );
        assert_eq!(resolve_theme(ThemePreset::Dark, false).primary, "#38bdf8");
    }

    #[test]
    fn test_resolution_is_pure() {
        assert_eq!(
            resolve_theme(ThemePreset::Playful, true),
            resolve_theme(ThemePreset::Playful, true)
        );
    }

    #[test]
    fn test_unknown_key_uses_default() {
        assert_eq!(
            resolve_theme_key("neon", false),
            resolve_theme(ThemePreset::Default, false)
        );
        assert_eq!(resolve_theme_key("elegant", false).primary, "#0f766e");
    }

    #[test]
    fn test_scheme_axis() {
        let light = resolve_scheme_theme(ColorScheme::Teal, false);
        assert_eq!(light.primary, "#009688");
        assert_eq!(light.secondary, "#e91e63");
        assert_eq!(light.background, "#f8fafc");

        let dark = resolve_scheme_theme(ColorScheme::Teal, true);
        assert_eq!(dark.primary, "#4db6ac");
        assert_eq!(dark.background, DARK_BACKGROUND);
        assert_eq!(dark.success, light.success);
    }

    #[test]
    fn test_mode() {
        assert_eq!(ThemeMode::for_preset(ThemePreset::Dark, false), ThemeMode::Dark);
        assert_eq!(ThemeMode::for_preset(ThemePreset::Minimal, false), ThemeMode::Light);
        assert_eq!(ThemeMode::for_preset(ThemePreset::Minimal, true).label(), "Dark");
    }

    #[test]
    fn test_swatches() {
        assert_eq!(ColorScheme::Teal.swatch(), "#14b8a6");
        assert_eq!(ThemePreset::Creative.swatch(), "#8b5cf6");
    }
}
