//! The seven shell implementations.

use crate::settings::{LayoutVariant, NavbarPosition, Settings};
use crate::{APP_TITLE, APP_TITLE_SHORT};

use super::{
    main_menu, page_links, rail_items, sidebar_width, ContentFrame, FooterRegion, NavItem,
    NavbarRegion, Shell, SidebarAnchor, SidebarRegion, ThemeAxis, MINIMAL_NAVBAR_HEIGHT_PX,
    NAVBAR_HEIGHT_PX, SIDEBAR_COMPACT_PX, SIDEBAR_FULL_PX,
};

fn bar(position: NavbarPosition, height_px: u32, links: Vec<NavItem>) -> NavbarRegion {
    NavbarRegion {
        position,
        height_px,
        title: APP_TITLE.to_string(),
        menu_button: false,
        links,
    }
}

/// Menu sidebar sized by the sidebar style. `None` when the style is closed.
fn menu_sidebar(settings: &Settings, anchor: SidebarAnchor) -> Option<SidebarRegion> {
    let width_px = sidebar_width(settings.sidebar_style)?;
    let collapsed = width_px < SIDEBAR_FULL_PX;
    Some(SidebarRegion {
        anchor,
        width_px,
        collapsed,
        title: if collapsed { APP_TITLE_SHORT } else { APP_TITLE }.to_string(),
        items: main_menu(),
    })
}

// =============================================================================
// Standard
// =============================================================================

/// Left sidebar plus fixed top bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardShell;

impl Shell for StandardShell {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::Standard
    }

    fn theme_axis(&self) -> ThemeAxis {
        ThemeAxis::ColorScheme
    }

    fn navbar(&self, _settings: &Settings) -> NavbarRegion {
        bar(NavbarPosition::Fixed, NAVBAR_HEIGHT_PX, Vec::new())
    }

    fn sidebar(&self, settings: &Settings) -> Option<SidebarRegion> {
        menu_sidebar(settings, SidebarAnchor::Left)
    }
}

// =============================================================================
// Horizontal
// =============================================================================

/// Top navigation only, page links inline in the bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalShell;

impl Shell for HorizontalShell {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::Horizontal
    }

    fn navbar(&self, settings: &Settings) -> NavbarRegion {
        bar(settings.navbar_position, NAVBAR_HEIGHT_PX, page_links())
    }
}

// =============================================================================
// Minimal
// =============================================================================

/// Slim top bar whose menu button opens the main menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalShell;

impl Shell for MinimalShell {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::Minimal
    }

    fn navbar(&self, settings: &Settings) -> NavbarRegion {
        NavbarRegion {
            menu_button: true,
            ..bar(
                settings.navbar_position,
                MINIMAL_NAVBAR_HEIGHT_PX,
                main_menu(),
            )
        }
    }
}

// =============================================================================
// Footer
// =============================================================================

/// Top navigation plus a footer with about, quick links and contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterShell;

impl Shell for FooterShell {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::Footer
    }

    fn navbar(&self, settings: &Settings) -> NavbarRegion {
        bar(settings.navbar_position, NAVBAR_HEIGHT_PX, page_links())
    }

    fn footer(&self, _settings: &Settings) -> Option<FooterRegion> {
        let mut quick_links = page_links();
        quick_links.extend([
            NavItem::popover("help", "Help Center"),
            NavItem::popover("docs", "Documentation"),
            NavItem::popover("api", "API Reference"),
        ]);

        Some(FooterRegion {
            about: "Retailer Web is a comprehensive management system designed to help \
                    retailers streamline their operations, manage inventory, and grow \
                    their business."
                .to_string(),
            quick_links,
            contact: vec![
                "123 Retail Street, San Francisco, CA 94107".to_string(),
                "info@retailerweb.com".to_string(),
                "+1 (555) 123-4567".to_string(),
            ],
            copyright: format!("© {}. All rights reserved.", APP_TITLE),
        })
    }
}

// =============================================================================
// Content Focused
// =============================================================================

/// Dense static bar, full-width content, nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFocusedShell;

impl Shell for ContentFocusedShell {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::ContentFocused
    }

    fn navbar(&self, _settings: &Settings) -> NavbarRegion {
        bar(NavbarPosition::Static, MINIMAL_NAVBAR_HEIGHT_PX, Vec::new())
    }

    fn content_frame(&self, settings: &Settings) -> ContentFrame {
        ContentFrame {
            max_width_px: None,
            ..ContentFrame::for_width(settings.layout_width)
        }
    }
}

// =============================================================================
// Compact Vertical
// =============================================================================

/// Fixed top bar plus a 70px icon rail on the left.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactVerticalShell;

impl Shell for CompactVerticalShell {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::CompactVertical
    }

    fn theme_axis(&self) -> ThemeAxis {
        ThemeAxis::ColorScheme
    }

    fn navbar(&self, _settings: &Settings) -> NavbarRegion {
        bar(NavbarPosition::Fixed, NAVBAR_HEIGHT_PX, Vec::new())
    }

    fn sidebar(&self, _settings: &Settings) -> Option<SidebarRegion> {
        Some(SidebarRegion {
            anchor: SidebarAnchor::Left,
            width_px: SIDEBAR_COMPACT_PX,
            collapsed: true,
            title: APP_TITLE_SHORT.to_string(),
            items: rail_items(),
        })
    }
}

// =============================================================================
// Vertical Right
// =============================================================================

/// Fixed top bar plus a popover rail on the right, sized by sidebar style.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalRightShell;

impl Shell for VerticalRightShell {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::VerticalRight
    }

    fn theme_axis(&self) -> ThemeAxis {
        ThemeAxis::ColorScheme
    }

    fn navbar(&self, _settings: &Settings) -> NavbarRegion {
        bar(NavbarPosition::Fixed, NAVBAR_HEIGHT_PX, Vec::new())
    }

    fn sidebar(&self, settings: &Settings) -> Option<SidebarRegion> {
        let width_px = sidebar_width(settings.sidebar_style)?;
        Some(SidebarRegion {
            anchor: SidebarAnchor::Right,
            width_px,
            collapsed: width_px < SIDEBAR_FULL_PX,
            title: APP_TITLE.to_string(),
            items: rail_items(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::select_shell;
    use crate::settings::{LayoutWidth, SidebarStyle};

    #[test]
    fn test_standard_sidebar_follows_style() {
        let full = StandardShell.view(&Settings::default());
        let sidebar = full.sidebar.expect("standard has a sidebar");
        assert_eq!(sidebar.anchor, SidebarAnchor::Left);
        assert_eq!(sidebar.width_px, 240);
        assert!(!sidebar.collapsed);
        assert_eq!(full.content.offset_left_px, 240);
        assert_eq!(full.content.offset_top_px, 64);

        let compact = StandardShell.view(&Settings::default().with_sidebar_style(SidebarStyle::Compact));
        assert_eq!(compact.sidebar.as_ref().map(|s| s.width_px), Some(70));
        assert_eq!(compact.sidebar.map(|s| s.title), Some("RW".to_string()));

        let closed = StandardShell.view(&Settings::default().with_sidebar_style(SidebarStyle::Closed));
        assert!(closed.sidebar.is_none());
        assert_eq!(closed.content.offset_left_px, 0);
    }

    #[test]
    fn test_standard_ignores_navbar_setting() {
        let settings = Settings::default().with_navbar_position(NavbarPosition::Static);
        assert_eq!(StandardShell.navbar(&settings).position, NavbarPosition::Fixed);
    }

    #[test]
    fn test_horizontal_has_no_sidebar() {
        let view = HorizontalShell.view(&Settings::default());
        assert!(view.sidebar.is_none());
        assert!(view.footer.is_none());
        assert_eq!(view.navbar.links.len(), 2);
        assert_eq!(view.content.offset_top_px, 64);

        let static_bar = HorizontalShell
            .view(&Settings::default().with_navbar_position(NavbarPosition::Static));
        assert_eq!(static_bar.content.offset_top_px, 0);
    }

    #[test]
    fn test_minimal_offset() {
        let view = MinimalShell.view(&Settings::default());
        assert!(view.navbar.menu_button);
        assert_eq!(view.navbar.height_px, 56);
        assert_eq!(view.content.offset_top_px, 56);
        assert!(view.sidebar.is_none());
        assert!(view.footer.is_none());
    }

    #[test]
    fn test_footer_shell() {
        let view = FooterShell.view(&Settings::default());
        let footer = view.footer.expect("footer shell has a footer");
        assert!(view.sidebar.is_none());
        assert_eq!(footer.contact.len(), 3);
        assert_eq!(footer.quick_links[0].path.as_deref(), Some("/"));
    }

    #[test]
    fn test_content_focused_is_static_and_full_width() {
        let settings = Settings::default()
            .with_layout_width(LayoutWidth::Compact)
            .with_navbar_position(NavbarPosition::Fixed);
        let view = ContentFocusedShell.view(&settings);
        assert_eq!(view.navbar.position, NavbarPosition::Static);
        assert_eq!(view.content.max_width_px, None);
        assert_eq!(view.content.offset_top_px, 0);
        assert!(view.sidebar.is_none());
    }

    #[test]
    fn test_compact_vertical_rail_is_always_70() {
        for style in SidebarStyle::ALL {
            let view = CompactVerticalShell.view(&Settings::default().with_sidebar_style(*style));
            assert_eq!(view.sidebar.map(|s| s.width_px), Some(70));
        }
    }

    #[test]
    fn test_vertical_right_anchors_right() {
        let view = VerticalRightShell.view(&Settings::default());
        let sidebar = view.sidebar.expect("vertical-right has a rail");
        assert_eq!(sidebar.anchor, SidebarAnchor::Right);
        assert_eq!(sidebar.width_px, 240);
        assert_eq!(view.content.offset_right_px, 240);
        assert_eq!(view.content.offset_left_px, 0);
    }

    #[test]
    fn test_theme_axis_per_variant() {
        use crate::settings::LayoutVariant::*;
        for (variant, axis) in [
            (Standard, ThemeAxis::ColorScheme),
            (Horizontal, ThemeAxis::Preset),
            (Minimal, ThemeAxis::Preset),
            (Footer, ThemeAxis::Preset),
            (ContentFocused, ThemeAxis::Preset),
            (CompactVertical, ThemeAxis::ColorScheme),
            (VerticalRight, ThemeAxis::ColorScheme),
        ] {
            assert_eq!(select_shell(variant).theme_axis(), axis, "{variant}");
        }
    }
}
