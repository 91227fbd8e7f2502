//! Native key codes.
//!
//! Values follow the GLFW numbering, which is what the windowing layer hands
//! to [`Keyboard::on_key_event`](super::Keyboard::on_key_event).

use super::types::KeyCode;

pub const KEY_SPACE: KeyCode = 32;
pub const KEY_APOSTROPHE: KeyCode = 39;
pub const KEY_COMMA: KeyCode = 44;
pub const KEY_MINUS: KeyCode = 45;
pub const KEY_PERIOD: KeyCode = 46;
pub const KEY_SLASH: KeyCode = 47;
pub const KEY_0: KeyCode = 48;
pub const KEY_9: KeyCode = 57;
pub const KEY_SEMICOLON: KeyCode = 59;
pub const KEY_EQUAL: KeyCode = 61;
pub const KEY_A: KeyCode = 65;
pub const KEY_R: KeyCode = 82;
pub const KEY_Z: KeyCode = 90;
pub const KEY_LEFT_BRACKET: KeyCode = 91;
pub const KEY_BACKSLASH: KeyCode = 92;
pub const KEY_RIGHT_BRACKET: KeyCode = 93;
pub const KEY_GRAVE_ACCENT: KeyCode = 96;

pub const KEY_ESCAPE: KeyCode = 256;
pub const KEY_ENTER: KeyCode = 257;
pub const KEY_TAB: KeyCode = 258;
pub const KEY_BACKSPACE: KeyCode = 259;
pub const KEY_INSERT: KeyCode = 260;
pub const KEY_DELETE: KeyCode = 261;
pub const KEY_RIGHT: KeyCode = 262;
pub const KEY_LEFT: KeyCode = 263;
pub const KEY_DOWN: KeyCode = 264;
pub const KEY_UP: KeyCode = 265;
pub const KEY_PAGE_UP: KeyCode = 266;
pub const KEY_PAGE_DOWN: KeyCode = 267;
pub const KEY_HOME: KeyCode = 268;
pub const KEY_END: KeyCode = 269;
pub const KEY_CAPS_LOCK: KeyCode = 280;
pub const KEY_SCROLL_LOCK: KeyCode = 281;
pub const KEY_NUM_LOCK: KeyCode = 282;
pub const KEY_PRINT_SCREEN: KeyCode = 283;
pub const KEY_PAUSE: KeyCode = 284;
pub const KEY_F1: KeyCode = 290;
pub const KEY_F11: KeyCode = 300;
pub const KEY_F25: KeyCode = 314;
pub const KEY_KP_0: KeyCode = 320;
pub const KEY_KP_9: KeyCode = 329;
pub const KEY_KP_DECIMAL: KeyCode = 330;
pub const KEY_KP_DIVIDE: KeyCode = 331;
pub const KEY_KP_MULTIPLY: KeyCode = 332;
pub const KEY_KP_SUBTRACT: KeyCode = 333;
pub const KEY_KP_ADD: KeyCode = 334;
pub const KEY_KP_ENTER: KeyCode = 335;
pub const KEY_KP_EQUAL: KeyCode = 336;
pub const KEY_LEFT_SHIFT: KeyCode = 340;
pub const KEY_LEFT_CONTROL: KeyCode = 341;
pub const KEY_LEFT_ALT: KeyCode = 342;
pub const KEY_LEFT_SUPER: KeyCode = 343;
pub const KEY_RIGHT_SHIFT: KeyCode = 344;
pub const KEY_RIGHT_CONTROL: KeyCode = 345;
pub const KEY_RIGHT_ALT: KeyCode = 346;
pub const KEY_RIGHT_SUPER: KeyCode = 347;
pub const KEY_MENU: KeyCode = 348;

/// Highest valid key code.
pub const KEY_LAST: KeyCode = KEY_MENU;

/// Size of the key domain: codes are `0..KEY_COUNT`.
pub const KEY_COUNT: KeyCode = KEY_LAST + 1;

const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const FUNCTION_KEYS: [&str; 25] = [
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12", "F13",
    "F14", "F15", "F16", "F17", "F18", "F19", "F20", "F21", "F22", "F23", "F24", "F25",
];

const KEYPAD_DIGITS: [&str; 10] = [
    "KP_0", "KP_1", "KP_2", "KP_3", "KP_4", "KP_5", "KP_6", "KP_7", "KP_8", "KP_9",
];

/// Human-readable name for a key code, or `None` if the code is unassigned.
pub fn key_name(code: KeyCode) -> Option<&'static str> {
    let name = match code {
        KEY_A..=KEY_Z => LETTERS[(code - KEY_A) as usize],
        KEY_0..=KEY_9 => DIGITS[(code - KEY_0) as usize],
        KEY_F1..=KEY_F25 => FUNCTION_KEYS[(code - KEY_F1) as usize],
        KEY_KP_0..=KEY_KP_9 => KEYPAD_DIGITS[(code - KEY_KP_0) as usize],

        KEY_SPACE => "SPACE",
        KEY_APOSTROPHE => "APOSTROPHE",
        KEY_COMMA => "COMMA",
        KEY_MINUS => "MINUS",
        KEY_PERIOD => "PERIOD",
        KEY_SLASH => "SLASH",
        KEY_SEMICOLON => "SEMICOLON",
        KEY_EQUAL => "EQUAL",
        KEY_LEFT_BRACKET => "LEFT_BRACKET",
        KEY_BACKSLASH => "BACKSLASH",
        KEY_RIGHT_BRACKET => "RIGHT_BRACKET",
        KEY_GRAVE_ACCENT => "GRAVE_ACCENT",

        KEY_ESCAPE => "ESCAPE",
        KEY_ENTER => "ENTER",
        KEY_TAB => "TAB",
        KEY_BACKSPACE => "BACKSPACE",
        KEY_INSERT => "INSERT",
        KEY_DELETE => "DELETE",
        KEY_RIGHT => "RIGHT",
        KEY_LEFT => "LEFT",
        KEY_DOWN => "DOWN",
        KEY_UP => "UP",
        KEY_PAGE_UP => "PAGE_UP",
        KEY_PAGE_DOWN => "PAGE_DOWN",
        KEY_HOME => "HOME",
        KEY_END => "END",
        KEY_CAPS_LOCK => "CAPS_LOCK",
        KEY_SCROLL_LOCK => "SCROLL_LOCK",
        KEY_NUM_LOCK => "NUM_LOCK",
        KEY_PRINT_SCREEN => "PRINT_SCREEN",
        KEY_PAUSE => "PAUSE",

        KEY_KP_DECIMAL => "KP_DECIMAL",
        KEY_KP_DIVIDE => "KP_DIVIDE",
        KEY_KP_MULTIPLY => "KP_MULTIPLY",
        KEY_KP_SUBTRACT => "KP_SUBTRACT",
        KEY_KP_ADD => "KP_ADD",
        KEY_KP_ENTER => "KP_ENTER",
        KEY_KP_EQUAL => "KP_EQUAL",

        KEY_LEFT_SHIFT => "LEFT_SHIFT",
        KEY_LEFT_CONTROL => "LEFT_CONTROL",
        KEY_LEFT_ALT => "LEFT_ALT",
        KEY_LEFT_SUPER => "LEFT_SUPER",
        KEY_RIGHT_SHIFT => "RIGHT_SHIFT",
        KEY_RIGHT_CONTROL => "RIGHT_CONTROL",
        KEY_RIGHT_ALT => "RIGHT_ALT",
        KEY_RIGHT_SUPER => "RIGHT_SUPER",
        KEY_MENU => "MENU",

        _ => return None,
    };
    Some(name)
}
