//! # Layout Selector
//!
//! Chooses one of seven dashboard shells from the layout variant and
//! describes the regions it lays out.
//!
//! ## Shell Regions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NavbarRegion  (fixed: content starts below it / static: in flow)      │
//! ├──────────────┬──────────────────────────────────────────────────────────┤
//! │              │                                                          │
//! │ SidebarRegion│   ContentFrame                                           │
//! │ (left/right, │   max width from LayoutWidth                             │
//! │  240 or 70px │   ┌──────────────────────────────────────────────┐      │
//! │  or absent)  │   │  page body (dashboard / products)            │      │
//! │              │   └──────────────────────────────────────────────┘      │
//! ├──────────────┴──────────────────────────────────────────────────────────┤
//! │  FooterRegion (footer variant only)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Variant Table
//! | Variant | Sidebar | Footer | Navbar | Accent axis |
//! |---------|---------|--------|--------|-------------|
//! | standard | left, by style | - | fixed | color scheme |
//! | horizontal | - | - | per setting, inline links | preset |
//! | minimal | - | - | per setting, 56px | preset |
//! | footer | - | yes | per setting | preset |
//! | content-focused | - | - | static | preset |
//! | compact-vertical | left, 70px rail | - | fixed | color scheme |
//! | vertical-right | right, by style | - | fixed | color scheme |

mod shells;
mod ui_state;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::settings::{LayoutVariant, LayoutWidth, NavbarPosition, Settings, SidebarStyle};

pub use shells::{
    CompactVerticalShell, ContentFocusedShell, FooterShell, HorizontalShell, MinimalShell,
    StandardShell, VerticalRightShell,
};
pub use ui_state::ShellUiState;

// =============================================================================
// Dimensions
// =============================================================================

/// Width of an expanded sidebar.
pub const SIDEBAR_FULL_PX: u32 = 240;

/// Width of a collapsed sidebar or icon rail.
pub const SIDEBAR_COMPACT_PX: u32 = 70;

/// Height of the regular top bar.
pub const NAVBAR_HEIGHT_PX: u32 = 64;

/// Height of the minimal top bar.
pub const MINIMAL_NAVBAR_HEIGHT_PX: u32 = 56;

/// Content width caps for the compact and default layout widths.
pub const CONTENT_COMPACT_PX: u32 = 960;
pub const CONTENT_DEFAULT_PX: u32 = 1200;

// =============================================================================
// Regions
// =============================================================================

/// Which shell property drives the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeAxis {
    /// Accent comes from the theme preset palette.
    Preset,
    /// Accent comes from the color scheme palette.
    ColorScheme,
}

/// A navigation entry. Entries without a path open a popover instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub path: Option<String>,
}

impl NavItem {
    fn link(id: &str, label: &str, path: &str) -> Self {
        NavItem {
            id: id.to_string(),
            label: label.to_string(),
            path: Some(path.to_string()),
        }
    }

    fn popover(id: &str, label: &str) -> Self {
        NavItem {
            id: id.to_string(),
            label: label.to_string(),
            path: None,
        }
    }
}

/// Side the sidebar is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SidebarAnchor {
    Left,
    Right,
}

/// Top bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavbarRegion {
    pub position: NavbarPosition,
    pub height_px: u32,
    pub title: String,
    /// Hamburger button opening a menu (minimal shell).
    pub menu_button: bool,
    /// Links rendered inline in the bar (horizontal-style shells).
    pub links: Vec<NavItem>,
}

/// Side navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SidebarRegion {
    pub anchor: SidebarAnchor,
    pub width_px: u32,
    /// Icons only, labels hidden or shown as captions.
    pub collapsed: bool,
    pub title: String,
    pub items: Vec<NavItem>,
}

/// Page footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FooterRegion {
    pub about: String,
    pub quick_links: Vec<NavItem>,
    pub contact: Vec<String>,
    pub copyright: String,
}

/// Area the page body is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContentFrame {
    /// `None` means the content spans the full width.
    pub max_width_px: Option<u32>,
    pub padding_px: u32,
    pub offset_top_px: u32,
    pub offset_left_px: u32,
    pub offset_right_px: u32,
}

impl ContentFrame {
    /// Frame for a layout width with no offsets.
    pub fn for_width(width: LayoutWidth) -> Self {
        let (max_width_px, padding_px) = match width {
            LayoutWidth::Compact => (Some(CONTENT_COMPACT_PX), 16),
            LayoutWidth::Default => (Some(CONTENT_DEFAULT_PX), 24),
            LayoutWidth::Wide => (None, 24),
        };
        ContentFrame {
            max_width_px,
            padding_px,
            offset_top_px: 0,
            offset_left_px: 0,
            offset_right_px: 0,
        }
    }

    /// Pushes the content below a fixed navbar.
    fn below(mut self, navbar: &NavbarRegion) -> Self {
        if navbar.position == NavbarPosition::Fixed {
            self.offset_top_px = navbar.height_px;
        }
        self
    }

    /// Moves the content beside a sidebar.
    fn beside(mut self, sidebar: Option<&SidebarRegion>) -> Self {
        if let Some(sidebar) = sidebar {
            match sidebar.anchor {
                SidebarAnchor::Left => self.offset_left_px = sidebar.width_px,
                SidebarAnchor::Right => self.offset_right_px = sidebar.width_px,
            }
        }
        self
    }
}

/// Everything a shell contributes to a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    pub variant: LayoutVariant,
    pub theme_axis: ThemeAxis,
    pub navbar: NavbarRegion,
    pub sidebar: Option<SidebarRegion>,
    pub footer: Option<FooterRegion>,
    pub content: ContentFrame,
}

// =============================================================================
// Shell Trait
// =============================================================================

/// A dashboard shell: one arrangement of navbar, sidebar, footer and
/// content regions.
///
/// Implementations are stateless unit structs; all inputs come from the
/// settings snapshot passed in.
pub trait Shell: Send + Sync {
    /// Variant this shell renders.
    fn variant(&self) -> LayoutVariant;

    /// Theme axis feeding the shell's accent color.
    fn theme_axis(&self) -> ThemeAxis {
        ThemeAxis::Preset
    }

    /// Top bar.
    fn navbar(&self, settings: &Settings) -> NavbarRegion;

    /// Side navigation, if the shell has one.
    fn sidebar(&self, _settings: &Settings) -> Option<SidebarRegion> {
        None
    }

    /// Footer, if the shell has one.
    fn footer(&self, _settings: &Settings) -> Option<FooterRegion> {
        None
    }

    /// Content frame before offsets are applied.
    fn content_frame(&self, settings: &Settings) -> ContentFrame {
        ContentFrame::for_width(settings.layout_width)
    }

    /// Assembles all regions, offsetting the content around the navbar and
    /// sidebar.
    fn view(&self, settings: &Settings) -> ShellView {
        let navbar = self.navbar(settings);
        let sidebar = self.sidebar(settings);
        let content = self
            .content_frame(settings)
            .below(&navbar)
            .beside(sidebar.as_ref());

        ShellView {
            variant: self.variant(),
            theme_axis: self.theme_axis(),
            footer: self.footer(settings),
            navbar,
            sidebar,
            content,
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Returns the shell for a layout variant.
///
/// ## Example
/// ```rust
/// use retailer_core::layout::select_shell;
/// use retailer_core::settings::{LayoutVariant, Settings};
///
/// let view = select_shell(LayoutVariant::Footer).view(&Settings::default());
/// assert!(view.footer.is_some());
/// assert!(view.sidebar.is_none());
/// ```
pub fn select_shell(variant: LayoutVariant) -> &'static dyn Shell {
    match variant {
        LayoutVariant::Standard => &StandardShell,
        LayoutVariant::Horizontal => &HorizontalShell,
        LayoutVariant::Minimal => &MinimalShell,
        LayoutVariant::Footer => &FooterShell,
        LayoutVariant::ContentFocused => &ContentFocusedShell,
        LayoutVariant::CompactVertical => &CompactVerticalShell,
        LayoutVariant::VerticalRight => &VerticalRightShell,
    }
}

/// Returns the shell for a variant key. Unknown keys select the standard
/// shell.
pub fn select_shell_key(key: &str) -> &'static dyn Shell {
    select_shell(LayoutVariant::from_key(key))
}

// =============================================================================
// Shared Content
// =============================================================================

/// Main menu of the sidebar and the minimal shell's drawer.
pub fn main_menu() -> Vec<NavItem> {
    vec![
        NavItem::link("dashboard", "Dashboard", "/"),
        NavItem::link("products", "Products", "/products"),
        NavItem::link("customers", "Customers", "/customers"),
        NavItem::link("orders", "Orders", "/orders"),
        NavItem::link("reports", "Reports", "/reports"),
        NavItem::link("settings", "Settings", "/settings"),
    ]
}

/// Links rendered inline by the horizontal-style top bars.
pub fn page_links() -> Vec<NavItem> {
    vec![
        NavItem::link("dashboard", "Dashboard", "/"),
        NavItem::link("products", "Products", "/products"),
    ]
}

/// Items of the icon rails. Each opens a popover.
pub fn rail_items() -> Vec<NavItem> {
    vec![
        NavItem::popover("dashboard", "Dashboard"),
        NavItem::popover("services", "Services"),
        NavItem::popover("reports", "Reports"),
        NavItem::popover("support", "Support"),
        NavItem::popover("settings", "Settings"),
        NavItem::popover("logout", "Logout"),
    ]
}

/// Sidebar width for a style, `None` when the sidebar is closed.
pub fn sidebar_width(style: SidebarStyle) -> Option<u32> {
    match style {
        SidebarStyle::Full => Some(SIDEBAR_FULL_PX),
        SidebarStyle::Compact => Some(SIDEBAR_COMPACT_PX),
        SidebarStyle::Closed => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_selects_its_shell() {
        for variant in LayoutVariant::ALL {
            assert_eq!(select_shell(*variant).variant(), *variant);
        }
    }

    #[test]
    fn test_unknown_key_selects_standard() {
        assert_eq!(
            select_shell_key("unknown-value").variant(),
            LayoutVariant::Standard
        );
        assert_eq!(
            select_shell_key("vertical-right").variant(),
            LayoutVariant::VerticalRight
        );
    }

    #[test]
    fn test_content_frame_widths() {
        assert_eq!(
            ContentFrame::for_width(LayoutWidth::Compact).max_width_px,
            Some(960)
        );
        assert_eq!(ContentFrame::for_width(LayoutWidth::Compact).padding_px, 16);
        assert_eq!(
            ContentFrame::for_width(LayoutWidth::Default).max_width_px,
            Some(1200)
        );
        assert_eq!(ContentFrame::for_width(LayoutWidth::Wide).max_width_px, None);
    }

    #[test]
    fn test_sidebar_width() {
        assert_eq!(sidebar_width(SidebarStyle::Full), Some(240));
        assert_eq!(sidebar_width(SidebarStyle::Compact), Some(70));
        assert_eq!(sidebar_width(SidebarStyle::Closed), None);
    }

    #[test]
    fn test_main_menu_paths() {
        let menu = main_menu();
        assert_eq!(menu.len(), 6);
        assert_eq!(menu[0].path.as_deref(), Some("/"));
        assert_eq!(menu[1].path.as_deref(), Some("/products"));
        assert!(rail_items().iter().all(|item| item.path.is_none()));
    }
}
