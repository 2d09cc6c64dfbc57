//! Keyboard Input
//!
//! Keyboard state tracking for movement keys and modifiers, decoupled from
//! the windowing system via a generic key-code enum.

/// Generic key codes relevant to the walkthrough core, independent of the
/// windowing system. The adapter maps platform codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,

    // Editor
    Backquote,
    E,

    // System
    Escape,

    /// Catch-all for keys the core does not care about.
    Unknown,
}

/// Which movement keys are currently held.
///
/// Held-state booleans allow smooth continuous movement; the integrator
/// samples them once per fixed step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W - walk forward
    pub forward: bool,
    /// S - walk backward
    pub backward: bool,
    /// A - strafe left
    pub left: bool,
    /// D - strafe right
    pub right: bool,
    /// Space - ascend (free-fly)
    pub up: bool,
    /// Shift - sprint
    pub sprint: bool,
}

impl MovementKeys {
    /// All keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from a key press/release. Returns `true` if the key was a
    /// movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => self.forward = pressed,
            KeyCode::S => self.backward = pressed,
            KeyCode::A => self.left = pressed,
            KeyCode::D => self.right = pressed,
            KeyCode::Space => self.up = pressed,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.sprint = pressed,
            _ => return false,
        }
        true
    }

    /// Whether any movement key is held.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up
    }
}

/// State of keyboard modifier keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierState {
    pub shift: bool,
}

/// Tracks all keyboard state the core reads.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pub movement: MovementKeys,
    pub modifiers: ModifierState,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press/release event.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if let KeyCode::ShiftLeft | KeyCode::ShiftRight = key {
            self.modifiers.shift = pressed;
        }
        self.movement.handle_key(key, pressed);
    }

    /// Release every key. Used on focus loss and capture transitions so keys
    /// never stick.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_handle_wasd() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.forward);
        assert!(keys.handle_key(KeyCode::A, true));
        assert!(keys.left);
        assert!(keys.handle_key(KeyCode::W, false));
        assert!(!keys.forward);
        assert!(keys.left);
    }

    #[test]
    fn test_non_movement_key_ignored() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Backquote, true));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_either_shift_sprints() {
        let mut kb = KeyboardState::new();
        kb.handle_key(KeyCode::ShiftRight, true);
        assert!(kb.movement.sprint);
        assert!(kb.modifiers.shift);
        kb.handle_key(KeyCode::ShiftRight, false);
        assert!(!kb.movement.sprint);
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut kb = KeyboardState::new();
        kb.handle_key(KeyCode::W, true);
        kb.handle_key(KeyCode::ShiftLeft, true);
        kb.reset();
        assert!(!kb.movement.any_pressed());
        assert!(!kb.movement.sprint);
        assert!(!kb.modifiers.shift);
    }
}
