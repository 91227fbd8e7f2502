use winit::event::{ElementState, KeyEvent as WinitKeyEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey};

use crate::input::keys::*;
use crate::input::{KeyAction, KeyCode, KeyEvent, Modifiers};

/// Translates a winit keyboard event into an engine `KeyEvent`.
///
/// Returns `None` for keys without a native code. winit does not expose a
/// portable scancode, so `scancode` is always `0`.
pub fn translate_key_event(event: &WinitKeyEvent, modifiers: Modifiers) -> Option<KeyEvent> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };

    Some(KeyEvent {
        code: map_key_code(code)?,
        scancode: 0,
        action: map_action(event.state, event.repeat),
        modifiers,
    })
}

pub fn map_action(state: ElementState, repeat: bool) -> KeyAction {
    match state {
        ElementState::Pressed if repeat => KeyAction::Repeating,
        ElementState::Pressed => KeyAction::Pressed,
        ElementState::Released => KeyAction::Released,
    }
}

pub fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

pub fn map_key_code(code: WinitKeyCode) -> Option<KeyCode> {
    let key = match code {
        WinitKeyCode::Space => KEY_SPACE,
        WinitKeyCode::Quote => KEY_APOSTROPHE,
        WinitKeyCode::Comma => KEY_COMMA,
        WinitKeyCode::Minus => KEY_MINUS,
        WinitKeyCode::Period => KEY_PERIOD,
        WinitKeyCode::Slash => KEY_SLASH,
        WinitKeyCode::Semicolon => KEY_SEMICOLON,
        WinitKeyCode::Equal => KEY_EQUAL,
        WinitKeyCode::BracketLeft => KEY_LEFT_BRACKET,
        WinitKeyCode::Backslash => KEY_BACKSLASH,
        WinitKeyCode::BracketRight => KEY_RIGHT_BRACKET,
        WinitKeyCode::Backquote => KEY_GRAVE_ACCENT,

        WinitKeyCode::Digit0 => KEY_0,
        WinitKeyCode::Digit1 => KEY_0 + 1,
        WinitKeyCode::Digit2 => KEY_0 + 2,
        WinitKeyCode::Digit3 => KEY_0 + 3,
        WinitKeyCode::Digit4 => KEY_0 + 4,
        WinitKeyCode::Digit5 => KEY_0 + 5,
        WinitKeyCode::Digit6 => KEY_0 + 6,
        WinitKeyCode::Digit7 => KEY_0 + 7,
        WinitKeyCode::Digit8 => KEY_0 + 8,
        WinitKeyCode::Digit9 => KEY_9,

        WinitKeyCode::KeyA => KEY_A,
        WinitKeyCode::KeyB => KEY_A + 1,
        WinitKeyCode::KeyC => KEY_A + 2,
        WinitKeyCode::KeyD => KEY_A + 3,
        WinitKeyCode::KeyE => KEY_A + 4,
        WinitKeyCode::KeyF => KEY_A + 5,
        WinitKeyCode::KeyG => KEY_A + 6,
        WinitKeyCode::KeyH => KEY_A + 7,
        WinitKeyCode::KeyI => KEY_A + 8,
        WinitKeyCode::KeyJ => KEY_A + 9,
        WinitKeyCode::KeyK => KEY_A + 10,
        WinitKeyCode::KeyL => KEY_A + 11,
        WinitKeyCode::KeyM => KEY_A + 12,
        WinitKeyCode::KeyN => KEY_A + 13,
        WinitKeyCode::KeyO => KEY_A + 14,
        WinitKeyCode::KeyP => KEY_A + 15,
        WinitKeyCode::KeyQ => KEY_A + 16,
        WinitKeyCode::KeyR => KEY_R,
        WinitKeyCode::KeyS => KEY_A + 18,
        WinitKeyCode::KeyT => KEY_A + 19,
        WinitKeyCode::KeyU => KEY_A + 20,
        WinitKeyCode::KeyV => KEY_A + 21,
        WinitKeyCode::KeyW => KEY_A + 22,
        WinitKeyCode::KeyX => KEY_A + 23,
        WinitKeyCode::KeyY => KEY_A + 24,
        WinitKeyCode::KeyZ => KEY_Z,

        WinitKeyCode::Escape => KEY_ESCAPE,
        WinitKeyCode::Enter => KEY_ENTER,
        WinitKeyCode::Tab => KEY_TAB,
        WinitKeyCode::Backspace => KEY_BACKSPACE,
        WinitKeyCode::Insert => KEY_INSERT,
        WinitKeyCode::Delete => KEY_DELETE,
        WinitKeyCode::ArrowRight => KEY_RIGHT,
        WinitKeyCode::ArrowLeft => KEY_LEFT,
        WinitKeyCode::ArrowDown => KEY_DOWN,
        WinitKeyCode::ArrowUp => KEY_UP,
        WinitKeyCode::PageUp => KEY_PAGE_UP,
        WinitKeyCode::PageDown => KEY_PAGE_DOWN,
        WinitKeyCode::Home => KEY_HOME,
        WinitKeyCode::End => KEY_END,
        WinitKeyCode::CapsLock => KEY_CAPS_LOCK,
        WinitKeyCode::ScrollLock => KEY_SCROLL_LOCK,
        WinitKeyCode::NumLock => KEY_NUM_LOCK,
        WinitKeyCode::PrintScreen => KEY_PRINT_SCREEN,
        WinitKeyCode::Pause => KEY_PAUSE,

        WinitKeyCode::F1 => KEY_F1,
        WinitKeyCode::F2 => KEY_F1 + 1,
        WinitKeyCode::F3 => KEY_F1 + 2,
        WinitKeyCode::F4 => KEY_F1 + 3,
        WinitKeyCode::F5 => KEY_F1 + 4,
        WinitKeyCode::F6 => KEY_F1 + 5,
        WinitKeyCode::F7 => KEY_F1 + 6,
        WinitKeyCode::F8 => KEY_F1 + 7,
        WinitKeyCode::F9 => KEY_F1 + 8,
        WinitKeyCode::F10 => KEY_F1 + 9,
        WinitKeyCode::F11 => KEY_F11,
        WinitKeyCode::F12 => KEY_F1 + 11,
        WinitKeyCode::F13 => KEY_F1 + 12,
        WinitKeyCode::F14 => KEY_F1 + 13,
        WinitKeyCode::F15 => KEY_F1 + 14,
        WinitKeyCode::F16 => KEY_F1 + 15,
        WinitKeyCode::F17 => KEY_F1 + 16,
        WinitKeyCode::F18 => KEY_F1 + 17,
        WinitKeyCode::F19 => KEY_F1 + 18,
        WinitKeyCode::F20 => KEY_F1 + 19,
        WinitKeyCode::F21 => KEY_F1 + 20,
        WinitKeyCode::F22 => KEY_F1 + 21,
        WinitKeyCode::F23 => KEY_F1 + 22,
        WinitKeyCode::F24 => KEY_F1 + 23,
        WinitKeyCode::F25 => KEY_F25,

        WinitKeyCode::Numpad0 => KEY_KP_0,
        WinitKeyCode::Numpad1 => KEY_KP_0 + 1,
        WinitKeyCode::Numpad2 => KEY_KP_0 + 2,
        WinitKeyCode::Numpad3 => KEY_KP_0 + 3,
        WinitKeyCode::Numpad4 => KEY_KP_0 + 4,
        WinitKeyCode::Numpad5 => KEY_KP_0 + 5,
        WinitKeyCode::Numpad6 => KEY_KP_0 + 6,
        WinitKeyCode::Numpad7 => KEY_KP_0 + 7,
        WinitKeyCode::Numpad8 => KEY_KP_0 + 8,
        WinitKeyCode::Numpad9 => KEY_KP_9,
        WinitKeyCode::NumpadDecimal => KEY_KP_DECIMAL,
        WinitKeyCode::NumpadDivide => KEY_KP_DIVIDE,
        WinitKeyCode::NumpadMultiply => KEY_KP_MULTIPLY,
        WinitKeyCode::NumpadSubtract => KEY_KP_SUBTRACT,
        WinitKeyCode::NumpadAdd => KEY_KP_ADD,
        WinitKeyCode::NumpadEnter => KEY_KP_ENTER,
        WinitKeyCode::NumpadEqual => KEY_KP_EQUAL,

        WinitKeyCode::ShiftLeft => KEY_LEFT_SHIFT,
        WinitKeyCode::ControlLeft => KEY_LEFT_CONTROL,
        WinitKeyCode::AltLeft => KEY_LEFT_ALT,
        WinitKeyCode::SuperLeft => KEY_LEFT_SUPER,
        WinitKeyCode::ShiftRight => KEY_RIGHT_SHIFT,
        WinitKeyCode::ControlRight => KEY_RIGHT_CONTROL,
        WinitKeyCode::AltRight => KEY_RIGHT_ALT,
        WinitKeyCode::SuperRight => KEY_RIGHT_SUPER,
        WinitKeyCode::ContextMenu => KEY_MENU,

        _ => return None,
    };
    Some(key)
}
