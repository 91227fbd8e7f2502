use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::error::{GlError, NativeError};

/// Severity of a log entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed error attached to a log entry.
///
/// Cheap to clone; the error itself is shared.
#[derive(Clone)]
pub struct Cause {
    name: Cow<'static, str>,
    error: Arc<dyn StdError + Send + Sync>,
}

impl Cause {
    /// Wraps `error`, naming it after its Rust type (`GlError`, `Error`, ...).
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::named(short_type_name::<E>(), error)
    }

    pub fn named<E>(name: impl Into<Cow<'static, str>>, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            error: Arc::new(error),
        }
    }

    /// Name rendered in log lines.
    pub fn type_name(&self) -> &str {
        &self.name
    }

    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.error
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("name", &self.name)
            .field("error", &self.error)
            .finish()
    }
}

impl From<NativeError> for Cause {
    fn from(error: NativeError) -> Self {
        Self::named(error.type_name(), error)
    }
}

impl From<GlError> for Cause {
    fn from(error: GlError) -> Self {
        Self::new(error)
    }
}

fn short_type_name<E>() -> &'static str {
    let full = std::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// One log record.
///
/// `sequence` is assigned when the entry is appended to a
/// [`Log`](super::Log); after that the entry is shared read-only.
#[derive(Debug, Clone)]
pub struct LogEntry {
    sequence: usize,
    timestamp: DateTime<Local>,
    level: Level,
    cause: Option<Cause>,
    message: String,
}

impl LogEntry {
    /// Creates an entry stamped with the current local time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            sequence: 0,
            timestamp: Local::now(),
            level,
            cause: None,
            message: message.into(),
        }
    }

    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Overrides the creation timestamp.
    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub(crate) fn sealed(mut self, sequence: usize) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the sink line (without trailing newline):
    ///
    /// `[HH:MM:SS][LEVEL][TypeName:"cause message"] text`, or
    /// `[HH:MM:SS][LEVEL] text` when there is no cause.
    pub fn render(&self) -> String {
        let time = self.timestamp.format("%H:%M:%S");
        let text = self.message.trim();
        match &self.cause {
            Some(cause) => format!(
                "[{time}][{}][{}:\"{}\"] {text}",
                self.level,
                cause.type_name(),
                cause.message()
            ),
            None => format!("[{time}][{}] {text}", self.level),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::native::{translate, INVALID_VALUE};
    use chrono::TimeZone;

    fn nine_oh_five() -> DateTime<Local> {
        Local.with_ymd_and_hms(2016, 5, 17, 9, 5, 3).unwrap()
    }

    #[test]
    fn render_without_cause() {
        let e = LogEntry::new(Level::Info, "  Started SGL Test \n").at(nine_oh_five());
        assert_eq!(e.render(), "[09:05:03][INFO] Started SGL Test");
    }

    #[test]
    fn render_with_native_cause() {
        let e = LogEntry::new(Level::Error, "An internal native error occurred")
            .with_cause(translate(INVALID_VALUE, "bad width"))
            .at(nine_oh_five());
        assert_eq!(
            e.render(),
            "[09:05:03][ERROR][InvalidValue:\"bad width\"] An internal native error occurred"
        );
    }

    #[test]
    fn render_with_gl_cause() {
        let e = LogEntry::new(Level::Warning, "draw skipped")
            .with_cause(GlError::new("Canvas", 1285))
            .at(nine_oh_five());
        assert!(e.render().starts_with("[09:05:03][WARNING][GlError:\"an OpenGL error"));
        assert!(e.render().ends_with("GL_OUT_OF_MEMORY\"] draw skipped"));
    }

    #[test]
    fn cause_name_strips_path_and_generics() {
        #[derive(Debug)]
        struct Wrapped<T>(T);
        impl<T: fmt::Debug> fmt::Display for Wrapped<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}", self.0)
            }
        }
        impl<T: fmt::Debug> StdError for Wrapped<T> {}

        let cause = Cause::new(Wrapped(std::io::ErrorKind::Other));
        assert_eq!(cause.type_name(), "Wrapped");
        assert_eq!(Cause::new(std::fmt::Error).type_name(), "Error");
    }

    #[test]
    fn levels_render_upper_case() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert!(Level::Info < Level::Error);
    }
}
