//! # Tauri Commands Module
//!
//! All commands exposed to the dashboard frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── settings.rs      ◄─── Settings setters and toggles
//! ├── theme.rs         ◄─── Palette lookup and preview
//! ├── page.rs          ◄─── Page rendering and shell menus
//! ├── product.rs       ◄─── Catalog fetch and CRUD
//! ├── notification.rs  ◄─── Toast queue
//! └── config.rs        ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const page = await invoke('render_page', {                             │
//! │    path: '/products',                                                   │
//! │    query: 'coffee'                                                      │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn render_page(                                                        │
//! │      settings: State<'_, SettingsStore>,  ◄── Injected by Tauri        │
//! │      catalog: State<'_, ProductCatalog>,                               │
//! │      path: String,                        ◄── From invoke params       │
//! │      query: Option<String>,               ◄── Optional param           │
//! │  ) -> PageDto                                                           │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { page, menus }                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod notification;
pub mod page;
pub mod product;
pub mod settings;
pub mod theme;
