//! # Retailer Web Desktop Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Retailer Web Desktop                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  • Dashboard (stats, quick actions)   • Products (search, grid)  │  │
//! │  │  • Settings drawer                    • Toasts                   │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                           │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Logging, configuration, stores, commands         │  │
//! │  │  commands/ ──► render_page, set_theme_preset, add_product, ...  │  │
//! │  │  state/ ─────► ConfigState, TauriEventEmitter                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │          retailer-store (state)  ──►  retailer-core (rules)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    retailer_desktop_lib::run();
}
