//! SGL engine crate.
//!
//! Owns the two pieces of the engine that other layers share across threads:
//! keyboard state fed by the windowing layer, and the asynchronous logger.

pub mod error;
pub mod input;
pub mod logging;

pub use error::{Error, Result};
