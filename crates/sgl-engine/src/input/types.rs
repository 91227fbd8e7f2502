use std::fmt;

/// Keyboard key identifier in the native layer's numbering.
///
/// Valid codes lie in `0..max_key`, where `max_key` is fixed when a
/// [`Keyboard`](super::Keyboard) is constructed.
pub type KeyCode = u32;

/// Transition reported for a key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyAction {
    Pressed,
    Released,
    Repeating,
}

impl KeyAction {
    /// Maps the native action value (`0` release, `1` press, `2` repeat).
    pub fn from_native(action: i32) -> Option<Self> {
        match action {
            0 => Some(KeyAction::Released),
            1 => Some(KeyAction::Pressed),
            2 => Some(KeyAction::Repeating),
            _ => None,
        }
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KeyAction::Pressed => "PRESSED",
            KeyAction::Released => "RELEASED",
            KeyAction::Repeating => "REPEATING",
        };
        f.write_str(s)
    }
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    const SHIFT: u32 = 0x1;
    const CTRL: u32 = 0x2;
    const ALT: u32 = 0x4;
    const META: u32 = 0x8;

    /// Decodes the native modifier bitmask. Unknown bits are ignored.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            shift: bits & Self::SHIFT != 0,
            ctrl: bits & Self::CTRL != 0,
            alt: bits & Self::ALT != 0,
            meta: bits & Self::META != 0,
        }
    }

    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.shift {
            bits |= Self::SHIFT;
        }
        if self.ctrl {
            bits |= Self::CTRL;
        }
        if self.alt {
            bits |= Self::ALT;
        }
        if self.meta {
            bits |= Self::META;
        }
        bits
    }

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// One physical key transition as delivered by the windowing layer.
///
/// `scancode` and `modifiers` are passed through untouched; the key-state
/// store only tracks `code` and `action`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub scancode: u32,
    pub action: KeyAction,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, action: KeyAction) -> Self {
        Self {
            code,
            scancode: 0,
            action,
            modifiers: Modifiers::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_actions() {
        assert_eq!(KeyAction::from_native(0), Some(KeyAction::Released));
        assert_eq!(KeyAction::from_native(1), Some(KeyAction::Pressed));
        assert_eq!(KeyAction::from_native(2), Some(KeyAction::Repeating));
        assert_eq!(KeyAction::from_native(3), None);
        assert_eq!(KeyAction::from_native(-1), None);
    }

    #[test]
    fn modifier_bits_round_trip() {
        let m = Modifiers::from_bits(0x1 | 0x4);
        assert!(m.shift && m.alt);
        assert!(!m.ctrl && !m.meta);
        assert_eq!(m.bits(), 0x5);
    }

    #[test]
    fn modifier_unknown_bits_ignored() {
        let m = Modifiers::from_bits(0x10 | 0x20);
        assert!(!m.any());
        assert_eq!(m.bits(), 0);
    }
}
