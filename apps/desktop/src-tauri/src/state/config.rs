//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RETAILER_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use retailer_core::settings::{LayoutVariant, ThemePreset};
use retailer_core::{Settings, APP_TITLE, DEFAULT_AUTO_HIDE_MS, FETCH_DELAY_MS};
use retailer_store::StoreConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name; the frontend uses it as the window title
    pub store_name: String,

    /// Simulated product fetch latency
    pub fetch_delay_ms: u64,

    /// Default notification auto-dismiss delay
    pub notify_ms: u64,

    /// Theme preset the dashboard opens with
    pub initial_theme: ThemePreset,

    /// Shell the dashboard opens with
    pub initial_layout: LayoutVariant,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Retailer Web"
    /// - Fetch delay: 1 s, notifications: 5 s
    /// - Theme `default`, layout `standard`
    fn default() -> Self {
        ConfigState {
            store_name: APP_TITLE.to_string(),
            fetch_delay_ms: FETCH_DELAY_MS,
            notify_ms: DEFAULT_AUTO_HIDE_MS,
            initial_theme: ThemePreset::default(),
            initial_layout: LayoutVariant::default(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RETAILER_STORE_NAME`: Override store name
    /// - `RETAILER_FETCH_DELAY_MS`: Simulated fetch latency
    /// - `RETAILER_NOTIFY_MS`: Default notification duration
    /// - `RETAILER_THEME`: Initial theme preset key (unknown → `default`)
    /// - `RETAILER_LAYOUT`: Initial layout key (unknown → `standard`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("RETAILER_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(ms) = parse_ms(&lookup, "RETAILER_FETCH_DELAY_MS") {
            config.fetch_delay_ms = ms;
        }

        if let Some(ms) = parse_ms(&lookup, "RETAILER_NOTIFY_MS") {
            config.notify_ms = ms;
        }

        if let Some(key) = lookup("RETAILER_THEME") {
            config.initial_theme = ThemePreset::from_key(&key);
        }

        if let Some(key) = lookup("RETAILER_LAYOUT") {
            config.initial_layout = LayoutVariant::from_key(&key);
        }

        config
    }

    /// Store configuration derived from these settings.
    pub fn store_config(&self) -> StoreConfig {
        let initial = Settings::default()
            .with_theme_preset(self.initial_theme)
            .with_layout_variant(self.initial_layout);

        StoreConfig::new()
            .fetch_delay(Duration::from_millis(self.fetch_delay_ms))
            .default_auto_hide_ms(self.notify_ms)
            .initial_settings(initial)
    }
}

fn parse_ms(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "Ignoring invalid duration");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ConfigState {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = config_from(&[]);
        assert_eq!(config.store_name, "Retailer Web");
        assert_eq!(config.fetch_delay_ms, 1_000);
        assert_eq!(config.notify_ms, 5_000);
        assert_eq!(config.initial_layout, LayoutVariant::Standard);
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("RETAILER_STORE_NAME", "Corner Shop"),
            ("RETAILER_FETCH_DELAY_MS", "250"),
            ("RETAILER_NOTIFY_MS", "nope"),
            ("RETAILER_THEME", "elegant"),
            ("RETAILER_LAYOUT", "vertical-right"),
        ]);
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.fetch_delay_ms, 250);
        assert_eq!(config.notify_ms, 5_000);
        assert_eq!(config.initial_theme, ThemePreset::Elegant);
        assert_eq!(config.initial_layout, LayoutVariant::VerticalRight);
    }

    #[test]
    fn test_unknown_layout_falls_back() {
        let config = config_from(&[("RETAILER_LAYOUT", "unknown-value")]);
        assert_eq!(config.initial_layout, LayoutVariant::Standard);
    }

    #[test]
    fn test_store_config() {
        let config = config_from(&[("RETAILER_THEME", "dark"), ("RETAILER_FETCH_DELAY_MS", "0")]);
        let store = config.store_config();
        assert_eq!(store.fetch_delay, Duration::ZERO);
        assert_eq!(store.initial_settings.theme_preset, ThemePreset::Dark);
    }
}
