//! Native windowing-library error taxonomy.
//!
//! The native layer reports failures through an error callback carrying an
//! integer code and a description. [`translate`] turns that pair into a typed
//! [`NativeError`] so it can be attached to a log entry as its cause.

use thiserror::Error;

pub const NOT_INITIALIZED: i32 = 0x0001_0001;
pub const NO_CURRENT_CONTEXT: i32 = 0x0001_0002;
pub const INVALID_ENUM: i32 = 0x0001_0003;
pub const INVALID_VALUE: i32 = 0x0001_0004;
pub const OUT_OF_MEMORY: i32 = 0x0001_0005;
pub const API_UNAVAILABLE: i32 = 0x0001_0006;
pub const VERSION_UNAVAILABLE: i32 = 0x0001_0007;
pub const PLATFORM_ERROR: i32 = 0x0001_0008;
pub const FORMAT_UNAVAILABLE: i32 = 0x0001_0009;
pub const NO_WINDOW_CONTEXT: i32 = 0x0001_000A;

/// A typed native-library error.
///
/// Each known code maps to its own variant; anything else lands in
/// [`NativeError::Unknown`] with the raw code preserved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NativeError {
    #[error("{0}")]
    NotInitialized(String),

    #[error("{0}")]
    NoCurrentContext(String),

    #[error("{0}")]
    InvalidEnum(String),

    #[error("{0}")]
    InvalidValue(String),

    #[error("{0}")]
    OutOfMemory(String),

    #[error("{0}")]
    ApiUnavailable(String),

    #[error("{0}")]
    VersionUnavailable(String),

    #[error("{0}")]
    PlatformError(String),

    #[error("{0}")]
    FormatUnavailable(String),

    #[error("{0}")]
    NoWindowContext(String),

    /// A code outside the known set.
    #[error("{description} (code {code:#x})")]
    Unknown { code: i32, description: String },
}

/// Maps a native error code and its description to a [`NativeError`].
///
/// Total over `i32`: unrecognized codes produce [`NativeError::Unknown`].
pub fn translate(code: i32, description: &str) -> NativeError {
    let d = description.to_owned();
    match code {
        NOT_INITIALIZED => NativeError::NotInitialized(d),
        NO_CURRENT_CONTEXT => NativeError::NoCurrentContext(d),
        INVALID_ENUM => NativeError::InvalidEnum(d),
        INVALID_VALUE => NativeError::InvalidValue(d),
        OUT_OF_MEMORY => NativeError::OutOfMemory(d),
        API_UNAVAILABLE => NativeError::ApiUnavailable(d),
        VERSION_UNAVAILABLE => NativeError::VersionUnavailable(d),
        PLATFORM_ERROR => NativeError::PlatformError(d),
        FORMAT_UNAVAILABLE => NativeError::FormatUnavailable(d),
        NO_WINDOW_CONTEXT => NativeError::NoWindowContext(d),
        _ => NativeError::Unknown { code, description: d },
    }
}

impl NativeError {
    /// The native code this error was translated from.
    pub fn code(&self) -> i32 {
        match self {
            NativeError::NotInitialized(_) => NOT_INITIALIZED,
            NativeError::NoCurrentContext(_) => NO_CURRENT_CONTEXT,
            NativeError::InvalidEnum(_) => INVALID_ENUM,
            NativeError::InvalidValue(_) => INVALID_VALUE,
            NativeError::OutOfMemory(_) => OUT_OF_MEMORY,
            NativeError::ApiUnavailable(_) => API_UNAVAILABLE,
            NativeError::VersionUnavailable(_) => VERSION_UNAVAILABLE,
            NativeError::PlatformError(_) => PLATFORM_ERROR,
            NativeError::FormatUnavailable(_) => FORMAT_UNAVAILABLE,
            NativeError::NoWindowContext(_) => NO_WINDOW_CONTEXT,
            NativeError::Unknown { code, .. } => *code,
        }
    }

    /// Name rendered in log lines, e.g. `InvalidValue`.
    pub fn type_name(&self) -> &'static str {
        match self {
            NativeError::NotInitialized(_) => "NotInitialized",
            NativeError::NoCurrentContext(_) => "NoCurrentContext",
            NativeError::InvalidEnum(_) => "InvalidEnum",
            NativeError::InvalidValue(_) => "InvalidValue",
            NativeError::OutOfMemory(_) => "OutOfMemory",
            NativeError::ApiUnavailable(_) => "ApiUnavailable",
            NativeError::VersionUnavailable(_) => "VersionUnavailable",
            NativeError::PlatformError(_) => "PlatformError",
            NativeError::FormatUnavailable(_) => "FormatUnavailable",
            NativeError::NoWindowContext(_) => "NoWindowContext",
            NativeError::Unknown { .. } => "UnknownNativeError",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            NativeError::NotInitialized(d)
            | NativeError::NoCurrentContext(d)
            | NativeError::InvalidEnum(d)
            | NativeError::InvalidValue(d)
            | NativeError::OutOfMemory(d)
            | NativeError::ApiUnavailable(d)
            | NativeError::VersionUnavailable(d)
            | NativeError::PlatformError(d)
            | NativeError::FormatUnavailable(d)
            | NativeError::NoWindowContext(d) => d,
            NativeError::Unknown { description, .. } => description,
        }
    }
}
