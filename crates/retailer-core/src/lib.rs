//! # retailer-core: Pure Dashboard Logic for Retailer Web
//!
//! This crate is the **heart** of Retailer Web. Every derivation the dashboard
//! performs (settings → theme palette, settings → shell layout, products →
//! filtered list, notifications → visible toast) lives here as a pure
//! function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Retailer Web Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Shell ──► Dashboard / Products ──► Settings Drawer ──► Toast │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    set_theme_preset, render_page, add_product, etc.             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               retailer-store (timers, locks)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ retailer-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ settings │ │  theme   │ │  layout  │ │ notification     │  │   │
//! │  │   │ Settings │ │ Palette  │ │  Shell   │ │ NotificationQueue│  │   │
//! │  │   │ Action   │ │ resolve  │ │  select  │ │ (state machine)  │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ product  │ │   page   │ │  money   │ │ validation       │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBALS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`settings`] - Display preferences and the actions that replace them
//! - [`theme`] - Preset and color-scheme palette tables, dark override
//! - [`layout`] - The seven dashboard shells and their selection
//! - [`product`] - Product model, seed list, filtering, stock levels
//! - [`notification`] - Single-visible FIFO notification queue
//! - [`page`] - Routes and page view models
//! - [`money`] - Integer-cent money type
//! - [`error`] / [`validation`] - Domain errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use retailer_core::settings::Settings;
//! use retailer_core::theme::resolve_theme;
//!
//! let settings = Settings::default().toggle_dark_mode();
//! let palette = resolve_theme(settings.theme_preset, settings.dark_mode);
//!
//! assert_eq!(palette.background, "#0f172a");
//! assert_eq!(palette.primary, "#0ea5e9");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod layout;
pub mod money;
pub mod notification;
pub mod page;
pub mod product;
pub mod settings;
pub mod theme;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use retailer_core::Settings` instead of
// `use retailer_core::settings::Settings`

pub use error::{CoreError, CoreResult, ValidationError};
pub use layout::{select_shell, select_shell_key, Shell, ShellView};
pub use money::Money;
pub use notification::{Notification, NotificationQueue, QueueState, Severity};
pub use page::{render_page, RenderedPage, Route};
pub use product::{NewProduct, Product, StockLevel};
pub use settings::{
    ColorScheme, LayoutVariant, LayoutWidth, NavbarPosition, Settings, SettingsAction,
    SidebarStyle, ThemePreset,
};
pub use theme::{resolve_scheme_theme, resolve_theme, ThemeMode, ThemePalette};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// How long a notification stays visible when no duration is given.
pub const DEFAULT_AUTO_HIDE_MS: u64 = 5_000;

/// Delay between dismissing a notification and showing the next one.
///
/// Matches the slide-out transition of the toast in the frontend.
pub const EXIT_ANIMATION_MS: u64 = 300;

/// Simulated latency of the product fetch.
pub const FETCH_DELAY_MS: u64 = 1_000;

/// Duration of the "current theme" toast on the dashboard.
pub const THEME_NOTICE_MS: u64 = 3_000;

/// Application title shown in the sidebar and navbar.
pub const APP_TITLE: &str = "Retailer Web";

/// Short title used when the sidebar is collapsed.
pub const APP_TITLE_SHORT: &str = "RW";
