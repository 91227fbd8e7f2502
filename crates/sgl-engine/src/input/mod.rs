//! Input subsystem.
//!
//! The windowing layer calls [`Keyboard::on_key_event`] once per physical key
//! transition; any thread may query the keyboard afterwards.
//! Backend-specific translation lives under [`platform`].

pub mod keys;
pub mod platform;
mod state;
mod types;

pub use state::{Keyboard, KeyboardSnapshot};
pub use types::{KeyAction, KeyCode, KeyEvent, Modifiers};
