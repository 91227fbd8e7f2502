use std::fmt;

use thiserror::Error;

/// OpenGL error names as reported by `glGetError`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GlErrorName {
    NoError,
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    StackOverflow,
    StackUnderflow,
    OutOfMemory,
    /// GL 3.0+
    InvalidFramebufferOperation,
    /// GL 4.5+
    ContextLost,
    /// The code is not a known `glGetError` value.
    Unknown,
}

impl GlErrorName {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => GlErrorName::NoError,
            1280 => GlErrorName::InvalidEnum,
            1281 => GlErrorName::InvalidValue,
            1282 => GlErrorName::InvalidOperation,
            1283 => GlErrorName::StackOverflow,
            1284 => GlErrorName::StackUnderflow,
            1285 => GlErrorName::OutOfMemory,
            1286 => GlErrorName::InvalidFramebufferOperation,
            1287 => GlErrorName::ContextLost,
            _ => GlErrorName::Unknown,
        }
    }

    /// `-1` for [`GlErrorName::Unknown`].
    pub fn code(self) -> i32 {
        match self {
            GlErrorName::NoError => 0,
            GlErrorName::InvalidEnum => 1280,
            GlErrorName::InvalidValue => 1281,
            GlErrorName::InvalidOperation => 1282,
            GlErrorName::StackOverflow => 1283,
            GlErrorName::StackUnderflow => 1284,
            GlErrorName::OutOfMemory => 1285,
            GlErrorName::InvalidFramebufferOperation => 1286,
            GlErrorName::ContextLost => 1287,
            GlErrorName::Unknown => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GlErrorName::NoError => "GL_NO_ERROR",
            GlErrorName::InvalidEnum => "GL_INVALID_ENUM",
            GlErrorName::InvalidValue => "GL_INVALID_VALUE",
            GlErrorName::InvalidOperation => "GL_INVALID_OPERATION",
            GlErrorName::StackOverflow => "GL_STACK_OVERFLOW",
            GlErrorName::StackUnderflow => "GL_STACK_UNDERFLOW",
            GlErrorName::OutOfMemory => "GL_OUT_OF_MEMORY",
            GlErrorName::InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            GlErrorName::ContextLost => "GL_CONTEXT_LOST",
            GlErrorName::Unknown => "[unknown]",
        }
    }
}

impl fmt::Display for GlErrorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A graphics-API error raised by `caller`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("an OpenGL error occurred in [{caller}]: {}", detail(.description, .name))]
pub struct GlError {
    pub caller: String,
    pub description: Option<String>,
    pub name: GlErrorName,
}

impl GlError {
    pub fn new(caller: impl Into<String>, code: i32) -> Self {
        Self {
            caller: caller.into(),
            description: None,
            name: GlErrorName::from_code(code),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn detail(description: &Option<String>, name: &GlErrorName) -> String {
    match description {
        Some(d) => format!("{d} ({name})"),
        None => name.to_string(),
    }
}
