//! Per-shell menu state (open rail popover, user menu).
//!
//! Each layout variant keeps its own [`ShellUiState`]; switching variants
//! and back finds the menus as they were left.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use retailer_core::layout::ShellUiState;
use retailer_core::settings::LayoutVariant;
use tracing::debug;

#[derive(Clone, Default)]
pub struct ShellUiStore {
    states: Arc<Mutex<HashMap<LayoutVariant, ShellUiState>>>,
}

impl ShellUiStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<LayoutVariant, ShellUiState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(
        &self,
        variant: LayoutVariant,
        f: impl FnOnce(ShellUiState) -> ShellUiState,
    ) -> ShellUiState {
        let mut states = self.lock();
        let slot = states.entry(variant).or_default();
        *slot = f(std::mem::take(slot));
        slot.clone()
    }

    pub fn get(&self, variant: LayoutVariant) -> ShellUiState {
        self.lock().get(&variant).cloned().unwrap_or_default()
    }

    pub fn toggle_popover(&self, variant: LayoutVariant, item_id: &str) -> ShellUiState {
        let state = self.update(variant, |s| s.toggle_popover(item_id));
        debug!(variant = %variant, item_id, open = ?state.open_popover, "Popover toggled");
        state
    }

    pub fn toggle_user_menu(&self, variant: LayoutVariant) -> ShellUiState {
        self.update(variant, ShellUiState::toggle_user_menu)
    }

    pub fn close_all(&self, variant: LayoutVariant) -> ShellUiState {
        self.update(variant, ShellUiState::close_all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_per_variant() {
        let store = ShellUiStore::new();
        store.toggle_popover(LayoutVariant::CompactVertical, "reports");

        assert_eq!(
            store.get(LayoutVariant::CompactVertical).open_popover.as_deref(),
            Some("reports")
        );
        assert_eq!(store.get(LayoutVariant::VerticalRight).open_popover, None);
    }

    #[test]
    fn test_toggle_same_item_closes() {
        let store = ShellUiStore::new();
        store.toggle_popover(LayoutVariant::VerticalRight, "support");
        let state = store.toggle_popover(LayoutVariant::VerticalRight, "support");
        assert_eq!(state.open_popover, None);
    }

    #[test]
    fn test_close_all() {
        let store = ShellUiStore::new();
        store.toggle_user_menu(LayoutVariant::Standard);
        store.toggle_popover(LayoutVariant::Standard, "settings");

        let state = store.close_all(LayoutVariant::Standard);
        assert_eq!(state, ShellUiState::default());
    }
}
