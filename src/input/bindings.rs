//! Key Bindings
//!
//! Defines editor/system key bindings as a data structure, enabling future
//! remapping and centralizing input documentation. Movement keys live on
//! [`MovementKeys`](super::keyboard::MovementKeys) directly; this table
//! covers the edge-triggered actions.

use super::keyboard::{KeyCode, ModifierState};

/// Edge-triggered actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Toggle the exhibit editor on/off.
    ToggleEditMode,
    /// Export the current exhibit layout.
    ExportLayout,
    /// Release pointer capture.
    ReleasePointer,
}

/// Key → action bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub toggle_edit_mode: KeyCode,
    /// Export fires only while shift is held, so a bare press of the same
    /// key stays available to the host.
    pub export_layout: KeyCode,
    pub release_pointer: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_edit_mode: KeyCode::Backquote,
            export_layout: KeyCode::E,
            release_pointer: KeyCode::Escape,
        }
    }
}

impl KeyBindings {
    /// Resolve a pressed key to an action, honoring modifiers.
    pub fn action_for(&self, key: KeyCode, modifiers: &ModifierState) -> Option<InputAction> {
        if key == self.toggle_edit_mode {
            return Some(InputAction::ToggleEditMode);
        }
        if key == self.export_layout && modifiers.shift {
            return Some(InputAction::ExportLayout);
        }
        if key == self.release_pointer {
            return Some(InputAction::ReleasePointer);
        }
        None
    }
}
