//! Pointer Capture
//!
//! Tracks whether the application owns raw pointer motion (captured /
//! locked cursor) and debounces the first events after acquisition.
//! On some platforms the first reported motion delta after a capture
//! transition is garbage, so a short window after `acquire` discards
//! incoming deltas entirely.

/// Pointer capture state with a post-acquisition debounce window.
///
/// The simulation ticks the debounce timer with clamped frame time; the
/// orientation controller only consumes deltas while `deltas_usable()`.
#[derive(Debug, Clone)]
pub struct PointerCapture {
    /// Whether the pointer is currently captured.
    captured: bool,
    /// Seconds of debounce remaining after the last acquisition.
    debounce_remaining_s: f32,
    /// Debounce window applied on every acquisition.
    debounce_window_s: f32,
}

impl PointerCapture {
    /// Create an uncaptured pointer with the given debounce window.
    pub fn new(debounce_window_s: f32) -> Self {
        Self {
            captured: false,
            debounce_remaining_s: 0.0,
            debounce_window_s,
        }
    }

    /// Whether the pointer is currently captured.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Whether accumulated deltas may be consumed this frame: captured and
    /// past the debounce window.
    pub fn deltas_usable(&self) -> bool {
        self.captured && self.debounce_remaining_s <= 0.0
    }

    /// The pointer was captured (platform lock acquired). Starts the
    /// debounce window. Returns `true` on an actual transition.
    pub fn acquire(&mut self) -> bool {
        if self.captured {
            return false;
        }
        self.captured = true;
        self.debounce_remaining_s = self.debounce_window_s;
        true
    }

    /// The pointer was released (platform lock lost or Escape). Returns
    /// `true` on an actual transition.
    pub fn release(&mut self) -> bool {
        if !self.captured {
            return false;
        }
        self.captured = false;
        self.debounce_remaining_s = 0.0;
        true
    }

    /// Advance the debounce timer by one frame's clamped delta.
    pub fn tick(&mut self, dt_s: f32) {
        if self.debounce_remaining_s > 0.0 {
            self.debounce_remaining_s = (self.debounce_remaining_s - dt_s).max(0.0);
        }
    }
}
