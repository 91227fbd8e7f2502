//! Platform adapters.
//!
//! Each adapter turns one windowing backend's key events into [`KeyEvent`](super::KeyEvent)s.

pub mod winit;
