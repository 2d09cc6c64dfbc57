//! Pointer Input
//!
//! Pointer state with delta accumulation for captured-pointer camera
//! control, plus the normalized position and button edges the editor picks
//! with. Raw deltas accumulate between frames and are consumed atomically.

/// Pointer button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    /// Additional buttons (button 4, 5, ...).
    Other(u16),
}

/// Pressed/edge state of a single button. Edges latch until `end_frame`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl ButtonEdge {
    fn set(&mut self, pressed: bool) {
        self.just_pressed = pressed && !self.pressed;
        self.just_released = !pressed && self.pressed;
        self.pressed = pressed;
    }

    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Pointer state: last normalized device coordinates, accumulated raw
/// deltas, and primary-button edges.
///
/// NDC follow the ray-construction convention: x in [-1, 1] growing right,
/// y in [-1, 1] growing up.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Last pointer position in normalized device coordinates.
    ndc: (f32, f32),
    /// Accumulated raw motion since last consume.
    delta: (f32, f32),
    /// Primary (left) button state and edges.
    pub left: ButtonEdge,
}

impl PointerState {
    /// New pointer state with zero deltas and nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pointer position from window coordinates.
    ///
    /// `(x, y)` are in pixels with y growing down; `(width, height)` is the
    /// window size. Stored as NDC with y flipped to grow up.
    pub fn set_position(&mut self, x: f32, y: f32, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.ndc = (
            (x / width as f32) * 2.0 - 1.0,
            -((y / height as f32) * 2.0 - 1.0),
        );
    }

    /// Record the pointer position directly in NDC.
    pub fn set_ndc(&mut self, x: f32, y: f32) {
        self.ndc = (x, y);
    }

    /// Last pointer position in NDC.
    pub fn ndc(&self) -> (f32, f32) {
        self.ndc
    }

    /// Accumulate a raw motion delta from the event loop.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        self.delta.0 += dx;
        self.delta.1 += dy;
    }

    /// Return the accumulated delta and reset it to zero.
    pub fn consume_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.delta)
    }

    /// Discard any accumulated delta without consuming it. Used on capture
    /// transitions where the pending delta is unreliable.
    pub fn clear_delta(&mut self) {
        self.delta = (0.0, 0.0);
    }

    /// Peek at the accumulated delta without consuming it.
    pub fn pending_delta(&self) -> (f32, f32) {
        self.delta
    }

    /// Handle a button press/release event.
    pub fn set_button(&mut self, button: PointerButton, pressed: bool) {
        if let PointerButton::Left = button {
            self.left.set(pressed);
        }
    }

    /// Clear per-frame button edges.
    pub fn end_frame(&mut self) {
        self.left.clear_edges();
    }

    /// Reset to the idle state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_accumulates_and_consumes_atomically() {
        let mut pointer = PointerState::new();
        pointer.accumulate_delta(10.0, -5.0);
        pointer.accumulate_delta(3.0, 2.0);

        let (dx, dy) = pointer.consume_delta();
        assert_eq!((dx, dy), (13.0, -3.0));
        assert_eq!(pointer.consume_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_set_position_maps_to_ndc() {
        let mut pointer = PointerState::new();
        pointer.set_position(400.0, 300.0, 800, 600);
        let (x, y) = pointer.ndc();
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);

        pointer.set_position(800.0, 0.0, 800, 600);
        let (x, y) = pointer.ndc();
        assert!((x - 1.0).abs() < 1e-6);
        assert!((y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_size_window_ignored() {
        let mut pointer = PointerState::new();
        pointer.set_ndc(0.5, 0.5);
        pointer.set_position(10.0, 10.0, 0, 0);
        assert_eq!(pointer.ndc(), (0.5, 0.5));
    }

    #[test]
    fn test_button_edges_latch_until_end_frame() {
        let mut pointer = PointerState::new();
        pointer.set_button(PointerButton::Left, true);
        assert!(pointer.left.pressed);
        assert!(pointer.left.just_pressed);

        pointer.end_frame();
        assert!(pointer.left.pressed);
        assert!(!pointer.left.just_pressed);

        pointer.set_button(PointerButton::Left, false);
        assert!(pointer.left.just_released);
    }

    #[test]
    fn test_ignored_buttons_do_not_disturb_left() {
        let mut pointer = PointerState::new();
        pointer.set_button(PointerButton::Right, true);
        pointer.set_button(PointerButton::Other(4), true);
        assert!(!pointer.left.pressed);
    }
}
