//! Error types.
//!
//! [`Error`] covers failures reported synchronously to callers of the engine
//! cores. Native-library failures are not raised through it: they are
//! translated into [`NativeError`] values and routed into the log instead.

pub mod gl;
pub mod native;

pub use gl::{GlError, GlErrorName};
pub use native::{translate, NativeError};

use thiserror::Error;

use crate::input::KeyCode;

/// Errors returned by the key-state store, the log history, and logger setup.
#[derive(Error, Debug)]
pub enum Error {
    /// A key code outside `[0, max)` was passed to a keyboard operation.
    #[error("invalid key code {code} (domain is 0..{max})")]
    InvalidKeyCode { code: KeyCode, max: KeyCode },

    /// A log position at or past the current size was requested.
    #[error("log index {index} out of range (size {size})")]
    IndexOutOfRange { index: usize, size: usize },

    /// The dispatcher's consumer thread could not be started.
    #[error("failed to spawn log dispatcher thread: {0}")]
    DispatcherSpawn(#[source] std::io::Error),
}

/// Alias for `std::result::Result<T, sgl_engine::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
