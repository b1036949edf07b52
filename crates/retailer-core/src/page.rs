//! # Pages
//!
//! Route parsing and the view models of the two pages, composed inside the
//! selected shell.
//!
//! ## Render Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  path "/products" ──► Route::from_path ──► Route::Products             │
//! │                                                 │                       │
//! │  Settings ──┬──► select_shell(variant).view() ──┤                       │
//! │             ├──► resolve_theme(preset, dark)  ──┤                       │
//! │             └──► resolve_scheme_theme(...)    ──┤ (sidebar shells only) │
//! │                                                 │                       │
//! │  CatalogInput (products, status) + query ───────┤                       │
//! │                                                 ▼                       │
//! │                                           RenderedPage                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::layout::{select_shell, ShellView, ThemeAxis};
use crate::money::Money;
use crate::notification::{Notification, Severity};
use crate::product::{filter_products, FetchStatus, Product, StockLevel};
use crate::settings::Settings;
use crate::theme::{resolve_scheme_theme, resolve_theme, ThemeMode, ThemePalette};
use crate::THEME_NOTICE_MS;

// =============================================================================
// Routes
// =============================================================================

/// The two routed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Dashboard,
    Products,
}

impl Route {
    /// Parses a location path. Anything that is not `/products` renders the
    /// dashboard, the same as redirecting unknown paths to `/`.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/products" | "products" => Route::Products,
            _ => Route::Dashboard,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Products => "/products",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Products => "Products",
        }
    }
}

// =============================================================================
// Dashboard
// =============================================================================

/// One headline figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Trend line under the value.
    pub subtitle: String,
    /// Progress bar fill, 0..=100.
    pub progress: Option<u8>,
    pub color: String,
}

/// Shortcut card under the stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: Vec<StatCard>,
    pub quick_actions: Vec<QuickAction>,
    /// Heading of the theme showcase, e.g. "Corporate Theme (Dark Mode)".
    pub theme_title: String,
}

/// Static headline figures. The dashboard has no data source behind them.
pub fn dashboard_stats() -> Vec<StatCard> {
    [
        ("TOTAL SALES", "$24,780", "\u{2191} 8% from last month", 75, "#0ea5e9"),
        ("NEW CUSTOMERS", "385", "\u{2191} 12% from last month", 68, "#f59e0b"),
        ("INVENTORY ITEMS", "2,490", "\u{2193} 2% from last month", 45, "#10b981"),
        ("PENDING ORDERS", "48", "\u{2191} 5% from last month", 30, "#ef4444"),
    ]
    .into_iter()
    .map(|(title, value, subtitle, progress, color)| StatCard {
        title: title.to_string(),
        value: value.to_string(),
        subtitle: subtitle.to_string(),
        progress: Some(progress),
        color: color.to_string(),
    })
    .collect()
}

pub fn quick_actions() -> Vec<QuickAction> {
    [
        ("add-product", "Add Product", "Create a new product listing"),
        ("process-orders", "Process Orders", "View and process pending orders"),
        ("manage-inventory", "Manage Inventory", "Update stock levels and availability"),
        ("view-reports", "View Reports", "Analyze sales and performance data"),
    ]
    .into_iter()
    .map(|(id, title, description)| QuickAction {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Notification raised by the dashboard's "Show Current Theme" button.
///
/// ## Example
/// ```rust
/// use retailer_core::page::theme_notice;
/// use retailer_core::settings::Settings;
///
/// let n = theme_notice(&Settings::default().toggle_dark_mode());
/// assert_eq!(n.message, "Current theme: default (Dark mode)");
/// assert_eq!(n.auto_hide_ms, 3000);
/// ```
pub fn theme_notice(settings: &Settings) -> Notification {
    let mode = if settings.dark_mode { "Dark" } else { "Light" };
    Notification::new(
        format!("Current theme: {} ({} mode)", settings.theme_preset, mode),
        Severity::Info,
        Some(THEME_NOTICE_MS),
    )
}

fn dashboard_view(settings: &Settings) -> DashboardView {
    let key = settings.theme_preset.as_key();
    let mut name = key.to_string();
    if let Some(first) = name.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    let mode = if settings.dark_mode { "Dark" } else { "Light" };

    DashboardView {
        stats: dashboard_stats(),
        quick_actions: quick_actions(),
        theme_title: format!("{} Theme ({} Mode)", name, mode),
    }
}

// =============================================================================
// Products
// =============================================================================

/// What the product page needs from the catalog store.
#[derive(Debug, Clone, Copy)]
pub struct CatalogInput<'a> {
    pub products: &'a [Product],
    pub status: FetchStatus,
    pub error: Option<&'a str>,
}

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub product: Product,
    pub price_label: String,
    pub stock_level: StockLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductListView {
    pub query: String,
    pub cards: Vec<ProductCard>,
    /// Products in the catalog before filtering.
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Sum of price × stock over the visible cards.
    pub inventory_value: String,
}

/// Builds the product page for a search query.
pub fn product_list_view(catalog: CatalogInput<'_>, query: &str) -> ProductListView {
    let visible = filter_products(catalog.products, query);
    let inventory_value: Money = visible.iter().map(|p| p.price() * p.stock_quantity).sum();

    ProductListView {
        query: query.trim().to_string(),
        cards: visible
            .into_iter()
            .map(|p| ProductCard {
                price_label: p.price().to_string(),
                stock_level: p.stock_level(),
                product: p.clone(),
            })
            .collect(),
        total: catalog.products.len(),
        loading: catalog.status == FetchStatus::Pending,
        error: match catalog.status {
            FetchStatus::Failed => catalog.error.map(str::to_string),
            _ => None,
        },
        inventory_value: inventory_value.to_string(),
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Body of the routed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageBody {
    Dashboard(DashboardView),
    Products(ProductListView),
}

/// A page inside its shell with the colors to paint it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub route: Route,
    pub title: String,
    pub shell: ShellView,
    /// Page surfaces and text, from the theme preset.
    pub palette: ThemePalette,
    /// Shell chrome accent. The color-scheme palette for sidebar shells,
    /// the preset palette otherwise.
    pub accent: ThemePalette,
    pub mode: ThemeMode,
    pub body: PageBody,
}

/// Renders a route for a settings snapshot.
///
/// Pure: the same settings, route, catalog and query always produce the
/// same page.
pub fn render_page(
    settings: &Settings,
    route: Route,
    catalog: CatalogInput<'_>,
    query: &str,
) -> RenderedPage {
    let shell = select_shell(settings.layout_variant).view(settings);
    let palette = resolve_theme(settings.theme_preset, settings.dark_mode);
    let accent = match shell.theme_axis {
        ThemeAxis::ColorScheme => resolve_scheme_theme(settings.color_scheme, settings.dark_mode),
        ThemeAxis::Preset => palette.clone(),
    };
    let body = match route {
        Route::Dashboard => PageBody::Dashboard(dashboard_view(settings)),
        Route::Products => PageBody::Products(product_list_view(catalog, query)),
    };

    RenderedPage {
        route,
        title: route.title().to_string(),
        shell,
        palette,
        accent,
        mode: ThemeMode::for_preset(settings.theme_preset, settings.dark_mode),
        body,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{seed_products, NewProduct};
    use crate::settings::{ColorScheme, LayoutVariant, ThemePreset};

    fn idle(products: &[Product]) -> CatalogInput<'_> {
        CatalogInput {
            products,
            status: FetchStatus::Succeeded,
            error: None,
        }
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/products"), Route::Products);
        assert_eq!(Route::from_path("/products/"), Route::Products);
        assert_eq!(Route::from_path("/customers"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
    }

    #[test]
    fn test_footer_variant_dashboard() {
        let settings = Settings::default().with_layout_variant(LayoutVariant::Footer);
        let page = render_page(&settings, Route::Dashboard, idle(&[]), "");

        assert!(page.shell.footer.is_some());
        assert!(page.shell.sidebar.is_none());
        assert!(matches!(page.body, PageBody::Dashboard(_)));
    }

    #[test]
    fn test_dark_mode_page_palette() {
        let settings = Settings::default().toggle_dark_mode();
        let page = render_page(&settings, Route::Dashboard, idle(&[]), "");

        assert_eq!(page.palette.background, "#0f172a");
        assert_eq!(page.palette.primary, "#0ea5e9");
        assert_eq!(page.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_accent_follows_shell_axis() {
        let settings = Settings::default().with_color_scheme(ColorScheme::Purple);

        let standard = render_page(&settings, Route::Dashboard, idle(&[]), "");
        assert_eq!(standard.accent.primary, "#673ab7");
        assert_eq!(standard.palette.primary, "#0ea5e9");

        let horizontal = render_page(
            &settings.with_layout_variant(LayoutVariant::Horizontal),
            Route::Dashboard,
            idle(&[]),
            "",
        );
        assert_eq!(horizontal.accent, horizontal.palette);
    }

    #[test]
    fn test_products_page_filters_and_badges() {
        let products = seed_products();
        let page = render_page(&Settings::default(), Route::Products, idle(&products), "watch");

        let PageBody::Products(view) = page.body else {
            panic!("expected products page");
        };
        assert_eq!(view.total, 4);
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].price_label, "$199.99");
        assert_eq!(view.cards[0].stock_level, StockLevel::Warning);
        assert_eq!(view.inventory_value, "$8999.55");
        assert!(!view.loading);
    }

    #[test]
    fn test_products_page_huge_price_saturates() {
        let input = NewProduct {
            name: "Gold Bar".to_string(),
            description: "Vault item".to_string(),
            price_cents: i64::MAX / 2,
            category: "Luxury".to_string(),
            stock_quantity: 3,
            image_url: None,
        };
        assert!(input.validate().is_ok());
        let products = vec![input.into_product("gold")];

        let view = product_list_view(idle(&products), "");
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.inventory_value, "$92233720368547758.07");
    }

    #[test]
    fn test_products_page_loading_and_error() {
        let pending = product_list_view(
            CatalogInput {
                products: &[],
                status: FetchStatus::Pending,
                error: None,
            },
            "",
        );
        assert!(pending.loading);

        let failed = product_list_view(
            CatalogInput {
                products: &[],
                status: FetchStatus::Failed,
                error: Some("Failed to fetch products"),
            },
            "",
        );
        assert_eq!(failed.error.as_deref(), Some("Failed to fetch products"));
        assert!(!failed.loading);
    }

    #[test]
    fn test_dashboard_content() {
        let settings = Settings::default()
            .with_theme_preset(ThemePreset::Corporate)
            .toggle_dark_mode();
        let view = dashboard_view(&settings);
        assert_eq!(view.stats.len(), 4);
        assert_eq!(view.stats[3].title, "PENDING ORDERS");
        assert_eq!(view.stats[3].progress, Some(30));
        assert_eq!(view.quick_actions[0].title, "Add Product");
        assert_eq!(view.theme_title, "Corporate Theme (Dark Mode)");
    }

    #[test]
    fn test_theme_notice_light() {
        let n = theme_notice(&Settings::default().with_theme_preset(ThemePreset::Playful));
        assert_eq!(n.message, "Current theme: playful (Light mode)");
        assert_eq!(n.severity, Severity::Info);
    }
}
