//! # Retailer Desktop Library
//!
//! Core library for the Retailer Web desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! retailer_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── events.rs   ◄─── Store changes → WebView events
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── settings.rs ◄─── Settings commands
//! │   ├── theme.rs    ◄─── Theme commands
//! │   ├── page.rs     ◄─── Page rendering commands
//! │   ├── product.rs  ◄─── Catalog commands
//! │   └── notification.rs ◄─── Toast commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use retailer_store::Stores;
use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, TauriEventEmitter};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info, debug for retailer crates; RUST_LOG overrides      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState::from_env (RETAILER_* variables)                      │
/// │                                                                         │
/// │  3. Create Stores ────────────────────────────────────────────────────► │
/// │     • Emitter bound to the app handle                                   │
/// │     • Settings, catalog (idle), notifications, shell menus              │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Manage each store as its own state                                │
/// │     • Register all commands                                             │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Retailer Web Desktop Application");

    let config = ConfigState::from_env();
    info!(
        store_name = %config.store_name,
        theme = %config.initial_theme,
        layout = %config.initial_layout,
        "Configuration loaded"
    );

    let result = tauri::Builder::default()
        .setup(move |app| {
            let emitter = Arc::new(TauriEventEmitter::new(app.handle().clone()));
            let stores = Stores::new(config.store_config(), emitter);

            app.manage(stores.settings());
            app.manage(stores.catalog());
            app.manage(stores.notifications());
            app.manage(stores.shell_ui());
            app.manage(config);

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Settings commands
            commands::settings::get_settings,
            commands::settings::set_layout_width,
            commands::settings::set_color_scheme,
            commands::settings::set_navbar_position,
            commands::settings::set_sidebar_style,
            commands::settings::set_layout_variant,
            commands::settings::set_theme_preset,
            commands::settings::toggle_dark_mode,
            commands::settings::toggle_settings_panel,
            commands::settings::close_settings_panel,
            // Theme commands
            commands::theme::get_theme,
            commands::theme::preview_theme,
            // Page commands
            commands::page::render_page,
            commands::page::toggle_shell_popover,
            commands::page::toggle_user_menu,
            commands::page::close_shell_menus,
            // Product commands
            commands::product::fetch_products,
            commands::product::list_products,
            commands::product::add_product,
            commands::product::update_product,
            commands::product::delete_product,
            commands::product::set_stock,
            // Notification commands
            commands::notification::add_notification,
            commands::notification::remove_notification,
            commands::notification::get_notifications,
            commands::notification::show_theme_notice,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!(?e, "Error while running tauri application");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=retailer_store=trace` - Trace the stores only
/// - Default: INFO, DEBUG for retailer crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,retailer_store=debug,retailer_desktop_lib=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
