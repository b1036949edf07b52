//! # Page Commands
//!
//! Renders a route inside the current shell, and drives the shell's menus.
//!
//! ```text
//! invoke('render_page', { path: '/products', query: 'elec' })
//!        │
//!        ▼
//! Route::from_path ──► settings snapshot + catalog snapshot
//!        │
//!        ▼
//! retailer_core::render_page ──► PageDto { page, menus }
//! ```

use retailer_core::layout::ShellUiState;
use retailer_core::page::CatalogInput;
use retailer_core::{RenderedPage, Route};
use retailer_store::{ProductCatalog, SettingsStore, ShellUiStore};
use serde::Serialize;
use tauri::State;
use tracing::debug;

/// A rendered page plus the menus its shell has open.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub page: RenderedPage,
    pub menus: ShellUiState,
}

/// Renders the page at `path`.
///
/// ## Arguments
/// * `path` - `/` or `/products`; anything else renders the dashboard
/// * `query` - Product search text (products page only)
#[tauri::command]
pub fn render_page(
    settings: State<'_, SettingsStore>,
    catalog: State<'_, ProductCatalog>,
    shell_ui: State<'_, ShellUiStore>,
    path: String,
    query: Option<String>,
) -> PageDto {
    let route = Route::from_path(&path);
    debug!(path = %path, ?route, "render_page command");

    let snapshot = settings.snapshot();
    let catalog = catalog.snapshot();
    let input = CatalogInput {
        products: &catalog.products,
        status: catalog.status,
        error: catalog.error.as_deref(),
    };

    PageDto {
        page: retailer_core::render_page(&snapshot, route, input, query.as_deref().unwrap_or("")),
        menus: shell_ui.get(snapshot.layout_variant),
    }
}

/// Opens a rail item's popover, or closes it when it is already open.
#[tauri::command]
pub fn toggle_shell_popover(
    settings: State<'_, SettingsStore>,
    shell_ui: State<'_, ShellUiStore>,
    item_id: String,
) -> ShellUiState {
    debug!(item_id = %item_id, "toggle_shell_popover command");
    shell_ui.toggle_popover(settings.snapshot().layout_variant, &item_id)
}

#[tauri::command]
pub fn toggle_user_menu(
    settings: State<'_, SettingsStore>,
    shell_ui: State<'_, ShellUiStore>,
) -> ShellUiState {
    debug!("toggle_user_menu command");
    shell_ui.toggle_user_menu(settings.snapshot().layout_variant)
}

/// Click-away: closes every menu of the current shell.
#[tauri::command]
pub fn close_shell_menus(
    settings: State<'_, SettingsStore>,
    shell_ui: State<'_, ShellUiStore>,
) -> ShellUiState {
    debug!("close_shell_menus command");
    shell_ui.close_all(settings.snapshot().layout_variant)
}
