//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! Each store is registered as its own Tauri state, so commands declare
//! exactly which stores they touch.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(stores.settings());                                 │   │
//! │  │  app.manage(stores.catalog());                                  │   │
//! │  │  app.manage(stores.notifications());                            │   │
//! │  │  app.manage(stores.shell_ui());                                 │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌──────────────┬───────┴───────┬──────────────┐                  │
//! │       ▼              ▼               ▼              ▼                   │
//! │  SettingsStore  ProductCatalog  NotificationCenter  ConfigState        │
//! │  (watch)        (RwLock)        (Mutex + timers)    (read-only)        │
//! │                                                                         │
//! │  Every store reports changes through TauriEventEmitter.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod events;

pub use config::ConfigState;
pub use events::TauriEventEmitter;
