// SPDX-License-Identifier: MPL-2.0
//! Serializable snapshot of the shell state.

use crate::domain::section::SectionId;
use crate::ui::modal::ModalKind;
use serde::{Deserialize, Serialize};

/// Everything the shell decides on, in one place.
///
/// `sidebar_open` is the expanded contacts panel of the docked sidebar;
/// `mobile_menu_open` is the full-window navigation of the compact layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    pub active_section: SectionId,
    pub sidebar_open: bool,
    pub mobile_menu_open: bool,
    pub modal: Option<ModalKind>,
    pub splash_done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_state_serializes_with_lowercase_tags() {
        let state = UiState {
            active_section: SectionId::Film,
            sidebar_open: true,
            mobile_menu_open: false,
            modal: Some(ModalKind::Gallery),
            splash_done: true,
        };

        let encoded = toml::to_string(&state).expect("serialize");
        assert!(encoded.contains("active_section = \"film\""));
        assert!(encoded.contains("modal = \"gallery\""));

        let decoded: UiState = toml::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, state);
    }

    #[test]
    fn closed_modal_is_omitted() {
        let encoded = toml::to_string(&UiState::default()).expect("serialize");
        assert!(!encoded.contains("modal"));
    }
}
