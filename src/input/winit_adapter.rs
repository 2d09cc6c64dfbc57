//! Winit Adapter
//!
//! Translation from winit event types into the core input model. This is
//! the only place the crate touches the windowing system; everything past
//! this boundary reads [`InputState`](super::InputState) instead of
//! registering callbacks.

use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::KeyCode as WinitKeyCode;

use super::keyboard::KeyCode;
use super::pointer::PointerButton;
use super::InputState;

/// Map a winit key code to a core key code.
pub fn translate_key(key: WinitKeyCode) -> KeyCode {
    match key {
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::KeyE => KeyCode::E,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::ShiftLeft => KeyCode::ShiftLeft,
        WinitKeyCode::ShiftRight => KeyCode::ShiftRight,
        WinitKeyCode::Backquote => KeyCode::Backquote,
        WinitKeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

/// Map a winit mouse button to a core pointer button.
pub fn translate_button(button: WinitMouseButton) -> PointerButton {
    match button {
        WinitMouseButton::Left => PointerButton::Left,
        WinitMouseButton::Middle => PointerButton::Middle,
        WinitMouseButton::Right => PointerButton::Right,
        WinitMouseButton::Back => PointerButton::Other(4),
        WinitMouseButton::Forward => PointerButton::Other(5),
        WinitMouseButton::Other(n) => PointerButton::Other(n),
    }
}

/// Feed a keyboard event into the input state.
pub fn apply_key_event(input: &mut InputState, key: WinitKeyCode, pressed: bool) {
    input.handle_key(translate_key(key), pressed);
}

/// Feed a mouse button event into the input state.
pub fn apply_button_event(input: &mut InputState, button: WinitMouseButton, pressed: bool) {
    input.pointer.set_button(translate_button(button), pressed);
}

/// Feed raw device motion (DeviceEvent::MouseMotion) into the input state.
pub fn apply_raw_motion(input: &mut InputState, dx: f64, dy: f64) {
    input.pointer.accumulate_delta(dx as f32, dy as f32);
}

/// Feed a cursor position (WindowEvent::CursorMoved) into the input state.
pub fn apply_cursor_position(input: &mut InputState, x: f64, y: f64, width: u32, height: u32) {
    input.pointer.set_position(x as f32, y as f32, width, height);
}
