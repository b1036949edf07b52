//! Transient per-shell UI state (open popover, user menu).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Menus a shell has open.
///
/// Each shell owns its own copy; switching variants never carries an open
/// popover over to the next shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShellUiState {
    /// Rail item whose popover is showing.
    pub open_popover: Option<String>,
    pub user_menu_open: bool,
}

impl ShellUiState {
    /// Clicking an item opens its popover; clicking the same item again
    /// closes it. Clicking a different item switches to that one.
    #[must_use]
    pub fn toggle_popover(self, item_id: &str) -> Self {
        let open_popover = match self.open_popover.as_deref() {
            Some(open) if open == item_id => None,
            _ => Some(item_id.to_string()),
        };
        ShellUiState {
            open_popover,
            ..self
        }
    }

    #[must_use]
    pub fn toggle_user_menu(self) -> Self {
        ShellUiState {
            user_menu_open: !self.user_menu_open,
            ..self
        }
    }

    /// Click-away: closes everything.
    #[must_use]
    pub fn close_all(self) -> Self {
        ShellUiState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_item_closes_popover() {
        let state = ShellUiState::default().toggle_popover("reports");
        assert_eq!(state.open_popover.as_deref(), Some("reports"));

        let state = state.toggle_popover("reports");
        assert_eq!(state.open_popover, None);
    }

    #[test]
    fn test_other_item_switches_popover() {
        let state = ShellUiState::default()
            .toggle_popover("reports")
            .toggle_popover("support");
        assert_eq!(state.open_popover.as_deref(), Some("support"));
    }

    #[test]
    fn test_close_all() {
        let state = ShellUiState::default()
            .toggle_popover("settings")
            .toggle_user_menu()
            .close_all();
        assert_eq!(state, ShellUiState::default());
    }
}
