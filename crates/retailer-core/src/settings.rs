//! # Settings
//!
//! Display preferences for the dashboard and the actions that change them.
//!
//! ## Snapshot Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Settings Data Flow                                  │
//! │                                                                         │
//! │  Settings drawer click                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SettingsAction::SetThemePreset(Creative)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Settings::apply(action) ──► NEW Settings snapshot (old one untouched) │
//! │       │                                                                 │
//! │       ├──► resolve_theme(preset, dark_mode)    → ThemePalette          │
//! │       └──► select_shell(layout_variant)        → Shell                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field always holds exactly one valid value. Keys coming from the
//! frontend are parsed either strictly (`FromStr`, unknown key is a
//! [`ValidationError`]) or leniently (`from_key`, unknown key becomes the
//! field's default).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Keyed Enums
// =============================================================================

/// Implements the key table shared by every settings enum.
///
/// The keys are the same strings serde writes, so a value read back from
/// the frontend round-trips through either path.
macro_rules! keyed_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $ty {
            /// Every value, in the order the settings drawer lists them.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Accepted keys, parallel to [`Self::ALL`].
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            /// Returns the wire key for this value.
            pub const fn as_key(&self) -> &'static str {
                match self {
                    $($ty::$variant => $key),+
                }
            }

            /// Parses a key, falling back to the default value when the
            /// key is unknown.
            pub fn from_key(key: &str) -> Self {
                key.parse().unwrap_or_default()
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($ty::$variant),)+
                    _ => Err(ValidationError::not_allowed($field, Self::KEYS)),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_key())
            }
        }
    };
}

/// Maximum width of the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutWidth {
    Compact,
    #[default]
    Default,
    Wide,
}

keyed_enum!(LayoutWidth, "layout", {
    Compact => "compact",
    Default => "default",
    Wide => "wide",
});

/// Accent color axis, independent of the theme preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
}

keyed_enum!(ColorScheme, "colorScheme", {
    Blue => "blue",
    Green => "green",
    Purple => "purple",
    Orange => "orange",
    Teal => "teal",
});

/// Whether the top bar stays pinned while the page scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum NavbarPosition {
    #[default]
    Fixed,
    Static,
}

keyed_enum!(NavbarPosition, "navbarPosition", {
    Fixed => "fixed",
    Static => "static",
});

/// How much room the sidebar takes in shells that have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SidebarStyle {
    #[default]
    Full,
    Compact,
    Closed,
}

keyed_enum!(SidebarStyle, "sidebarStyle", {
    Full => "full",
    Compact => "compact",
    Closed => "closed",
});

/// Which of the seven dashboard shells wraps the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutVariant {
    #[default]
    Standard,
    Horizontal,
    Minimal,
    Footer,
    ContentFocused,
    CompactVertical,
    VerticalRight,
}

keyed_enum!(LayoutVariant, "layoutVariant", {
    Standard => "standard",
    Horizontal => "horizontal",
    Minimal => "minimal",
    Footer => "footer",
    ContentFocused => "content-focused",
    CompactVertical => "compact-vertical",
    VerticalRight => "vertical-right",
});

/// Named palette bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreset {
    #[default]
    Default,
    Corporate,
    Creative,
    Elegant,
    Playful,
    Minimal,
    Dark,
}

keyed_enum!(ThemePreset, "themeOption", {
    Default => "default",
    Corporate => "corporate",
    Creative => "creative",
    Elegant => "elegant",
    Playful => "playful",
    Minimal => "minimal",
    Dark => "dark",
});

// =============================================================================
// Settings Snapshot
// =============================================================================

/// The full set of display preferences.
///
/// ## Defaults
/// | Field | Default |
/// |-------|---------|
/// | layout_width | default |
/// | color_scheme | blue |
/// | navbar_position | fixed |
/// | sidebar_style | full |
/// | layout_variant | standard |
/// | theme_preset | default |
/// | dark_mode | false |
/// | settings_panel_open | false |
///
/// Settings are never persisted; a restart brings back these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub layout_width: LayoutWidth,
    pub color_scheme: ColorScheme,
    pub navbar_position: NavbarPosition,
    pub sidebar_style: SidebarStyle,
    pub layout_variant: LayoutVariant,
    pub theme_preset: ThemePreset,
    pub dark_mode: bool,
    pub settings_panel_open: bool,
}

impl Settings {
    /// Returns a snapshot with the layout width replaced.
    #[must_use]
    pub fn with_layout_width(self, layout_width: LayoutWidth) -> Self {
        Settings {
            layout_width,
            ..self
        }
    }

    /// Returns a snapshot with the color scheme replaced.
    #[must_use]
    pub fn with_color_scheme(self, color_scheme: ColorScheme) -> Self {
        Settings {
            color_scheme,
            ..self
        }
    }

    /// Returns a snapshot with the navbar position replaced.
    #[must_use]
    pub fn with_navbar_position(self, navbar_position: NavbarPosition) -> Self {
        Settings {
            navbar_position,
            ..self
        }
    }

    /// Returns a snapshot with the sidebar style replaced.
    #[must_use]
    pub fn with_sidebar_style(self, sidebar_style: SidebarStyle) -> Self {
        Settings {
            sidebar_style,
            ..self
        }
    }

    /// Returns a snapshot with the layout variant replaced.
    #[must_use]
    pub fn with_layout_variant(self, layout_variant: LayoutVariant) -> Self {
        Settings {
            layout_variant,
            ..self
        }
    }

    /// Returns a snapshot with the theme preset replaced.
    #[must_use]
    pub fn with_theme_preset(self, theme_preset: ThemePreset) -> Self {
        Settings {
            theme_preset,
            ..self
        }
    }

    /// Flips dark mode.
    #[must_use]
    pub fn toggle_dark_mode(self) -> Self {
        Settings {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    /// Flips the settings drawer open/closed.
    #[must_use]
    pub fn toggle_settings_panel(self) -> Self {
        Settings {
            settings_panel_open: !self.settings_panel_open,
            ..self
        }
    }

    /// Closes the settings drawer. Closing an already-closed drawer is a no-op.
    #[must_use]
    pub fn close_settings_panel(self) -> Self {
        Settings {
            settings_panel_open: false,
            ..self
        }
    }

    /// Applies one action and returns the resulting snapshot.
    ///
    /// ## Example
    /// ```rust
    /// use retailer_core::settings::{LayoutVariant, Settings, SettingsAction};
    ///
    /// let next = Settings::default().apply(SettingsAction::SetLayoutVariant(LayoutVariant::Footer));
    /// assert_eq!(next.layout_variant, LayoutVariant::Footer);
    /// ```
    #[must_use]
    pub fn apply(self, action: SettingsAction) -> Self {
        match action {
            SettingsAction::SetLayoutWidth(v) => self.with_layout_width(v),
            SettingsAction::SetColorScheme(v) => self.with_color_scheme(v),
            SettingsAction::SetNavbarPosition(v) => self.with_navbar_position(v),
            SettingsAction::SetSidebarStyle(v) => self.with_sidebar_style(v),
            SettingsAction::SetLayoutVariant(v) => self.with_layout_variant(v),
            SettingsAction::SetThemePreset(v) => self.with_theme_preset(v),
            SettingsAction::ToggleDarkMode => self.toggle_dark_mode(),
            SettingsAction::ToggleSettingsPanel => self.toggle_settings_panel(),
            SettingsAction::CloseSettingsPanel => self.close_settings_panel(),
        }
    }
}

// =============================================================================
// Actions
// =============================================================================

/// A single change to the settings.
///
/// ## Serialization
/// ```json
/// { "type": "setThemePreset", "value": "creative" }
/// { "type": "toggleDarkMode" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum SettingsAction {
    SetLayoutWidth(LayoutWidth),
    SetColorScheme(ColorScheme),
    SetNavbarPosition(NavbarPosition),
    SetSidebarStyle(SidebarStyle),
    SetLayoutVariant(LayoutVariant),
    SetThemePreset(ThemePreset),
    ToggleDarkMode,
    ToggleSettingsPanel,
    CloseSettingsPanel,
}

impl SettingsAction {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            SettingsAction::SetLayoutWidth(_) => "set_layout_width",
            SettingsAction::SetColorScheme(_) => "set_color_scheme",
            SettingsAction::SetNavbarPosition(_) => "set_navbar_position",
            SettingsAction::SetSidebarStyle(_) => "set_sidebar_style",
            SettingsAction::SetLayoutVariant(_) => "set_layout_variant",
            SettingsAction::SetThemePreset(_) => "set_theme_preset",
            SettingsAction::ToggleDarkMode => "toggle_dark_mode",
            SettingsAction::ToggleSettingsPanel => "toggle_settings_panel",
            SettingsAction::CloseSettingsPanel => "close_settings_panel",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
