//! # retailer-store: Dashboard State for Retailer Web
//!
//! Shared, mutable dashboard state behind the Tauri commands: settings,
//! product catalog, notification queue and per-shell menu state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Retailer Web Data Flow                            │
//! │                                                                         │
//! │  Tauri Command (add_product)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   retailer-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌────────────────┐  ┌─────────────────┐   │   │
//! │  │   │ SettingsStore │  │ ProductCatalog │  │ Notification-   │   │   │
//! │  │   │ (watch)       │  │ (RwLock)       │  │ Center (timers) │   │   │
//! │  │   └───────┬───────┘  └───────┬────────┘  └────────┬────────┘   │   │
//! │  │           └──────────────────┼────────────────────┘            │   │
//! │  │                              ▼                                  │   │
//! │  │                   DashboardEventEmitter                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  retailer-core (pure rules: reducer, palettes, shells, queue)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use retailer_store::{NoOpEmitter, StoreConfig, Stores};
//!
//! # async fn demo() -> retailer_store::StoreResult<()> {
//! let stores = Stores::new(StoreConfig::new(), Arc::new(NoOpEmitter));
//! let products = stores.catalog().fetch().await?;
//! assert_eq!(products.len(), 4);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod events;
pub mod notifications;
pub mod settings;
pub mod shell_ui;
pub mod stores;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{CatalogSnapshot, ProductCatalog};
pub use error::{StoreError, StoreResult};
pub use events::{DashboardEventEmitter, NoOpEmitter};
pub use notifications::NotificationCenter;
pub use settings::SettingsStore;
pub use shell_ui::ShellUiStore;
pub use stores::{StoreConfig, Stores};
