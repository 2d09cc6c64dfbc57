//! Input Module
//!
//! Platform-agnostic input state for the walkthrough core. A thin adapter at
//! the windowing boundary (see [`winit_adapter`]) writes this state; the
//! camera and editor subsystems only ever read it. No core subsystem
//! registers event callbacks.
//!
//! # Example
//!
//! ```ignore
//! use gallery_walk::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // In the event adapter:
//! input.handle_key(KeyCode::W, true);
//! input.pointer.accumulate_delta(10.0, -5.0);
//!
//! // In the simulation:
//! if input.keyboard.movement.forward {
//!     // move forward
//! }
//!
//! // At end of frame:
//! input.end_frame();
//! ```

pub mod bindings;
pub mod capture;
pub mod keyboard;
pub mod pointer;
pub mod winit_adapter;

pub use bindings::{InputAction, KeyBindings};
pub use capture::PointerCapture;
pub use keyboard::{KeyCode, KeyboardState, ModifierState, MovementKeys};
pub use pointer::{ButtonEdge, PointerButton, PointerState};

/// Combined keyboard + pointer state plus edge-triggered editor actions.
///
/// Mutated only by the platform adapter; read-only to every per-step
/// subsystem. Edge flags (`edit_toggle`, `export_layout`, `release_pointer`)
/// latch until [`InputState::end_frame`].
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub pointer: PointerState,
    bindings: KeyBindings,
    /// Edit-mode toggle requested this frame.
    edit_toggle: bool,
    /// Layout export requested this frame.
    export_layout: bool,
    /// Pointer-capture release requested this frame.
    release_pointer: bool,
}

impl InputState {
    /// Create a new input state with default bindings and nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press/release, updating movement flags, modifiers, and
    /// edge-triggered actions through the binding table.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        self.keyboard.handle_key(key, pressed);

        if !pressed {
            return;
        }
        match self.bindings.action_for(key, &self.keyboard.modifiers) {
            Some(InputAction::ToggleEditMode) => self.edit_toggle = true,
            Some(InputAction::ExportLayout) => self.export_layout = true,
            Some(InputAction::ReleasePointer) => self.release_pointer = true,
            _ => {}
        }
    }

    /// Whether an edit-mode toggle was requested this frame.
    pub fn edit_toggle_requested(&self) -> bool {
        self.edit_toggle
    }

    /// Whether a layout export was requested this frame.
    pub fn export_requested(&self) -> bool {
        self.export_layout
    }

    /// Whether a pointer-capture release was requested this frame.
    pub fn release_requested(&self) -> bool {
        self.release_pointer
    }

    /// Clear per-frame edges. Call once per frame after the simulation has
    /// consumed the state.
    pub fn end_frame(&mut self) {
        self.edit_toggle = false;
        self.export_layout = false;
        self.release_pointer = false;
        self.pointer.end_frame();
    }

    /// Reset everything to the released/idle state.
    pub fn reset(&mut self) {
        let bindings = self.bindings.clone();
        *self = Self {
            bindings,
            ..Self::default()
        };
    }
}
