use std::fmt;
use std::panic::{self, PanicHookInfo};
use std::sync::{Arc, Weak};
use std::thread;

use thiserror::Error;

use super::dispatcher::{DispatcherState, LogDispatcher, SinkFailurePolicy};
use super::entry::{Cause, Level, LogEntry};
use super::history::Log;
use super::sink::{LogSink, WriterSink};
use crate::error::{native, Result};

/// Message logged for every translated native error.
pub const NATIVE_ERROR_MESSAGE: &str = "An internal native error occurred";

/// Callback shape the native windowing layer invokes on errors.
pub type ErrorCallback = Box<dyn Fn(i32, &str) + Send + Sync + 'static>;

/// Logger configuration.
///
/// `name` is also the name of the dispatcher's consumer thread.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub name: String,
    pub failure_policy: SinkFailurePolicy,
}

impl LoggerConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn failure_policy(mut self, policy: SinkFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "sgl-logger".to_string(),
            failure_policy: SinkFailurePolicy::default(),
        }
    }
}

/// Handle to one log pipeline.
///
/// Clones share the same history and consumer thread. The pipeline shuts
/// down (flushing everything accepted) when the last clone is dropped, or
/// earlier via [`Logger::shutdown`].
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    dispatcher: LogDispatcher,
}

#[derive(Error, Debug)]
#[error("{0}")]
struct Panic(String);

impl Logger {
    /// Logger writing to stdout.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::with_sink(config, WriterSink::stdout())
    }

    pub fn with_sink(config: LoggerConfig, sink: impl LogSink + 'static) -> Result<Self> {
        let dispatcher = LogDispatcher::spawn(&config.name, Box::new(sink), config.failure_policy)?;
        Ok(Self {
            inner: Arc::new(Inner {
                name: config.name,
                dispatcher,
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Queues `entry` for output and returns its position in the history.
    pub fn log_entry(&self, entry: LogEntry) -> usize {
        self.inner.dispatcher.enqueue(entry)
    }

    pub fn log(&self, level: Level, message: impl Into<String>) -> usize {
        self.log_entry(LogEntry::new(level, message))
    }

    pub fn log_with_cause(
        &self,
        cause: impl Into<Cause>,
        level: Level,
        message: impl Into<String>,
    ) -> usize {
        self.log_entry(LogEntry::new(level, message).with_cause(cause))
    }

    pub fn info(&self, message: impl Into<String>) -> usize {
        self.log(Level::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> usize {
        self.log(Level::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> usize {
        self.log(Level::Error, message)
    }

    /// Translates a native error report and logs it at `ERROR`.
    pub fn native_error(&self, code: i32, description: &str) -> usize {
        self.log_with_cause(native::translate(code, description), Level::Error, NATIVE_ERROR_MESSAGE)
    }

    /// Plain function value for registration with the native layer.
    ///
    /// The callback keeps this logger alive for as long as it is registered.
    pub fn error_callback(&self) -> ErrorCallback {
        let logger = self.clone();
        Box::new(move |code, description| {
            logger.native_error(code, description);
        })
    }

    /// Routes panics from any thread into this logger.
    ///
    /// The previously installed hook still runs afterwards. The hook does not
    /// keep the logger alive; once every handle is dropped it only forwards.
    /// Installing twice for the same logger records each panic twice.
    pub fn install_panic_hook(&self) {
        let inner = Arc::downgrade(&self.inner);
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if let Some(logger) = Logger::upgrade(&inner) {
                logger.log_with_cause(
                    Cause::named("Panic", Panic(panic_message(info))),
                    Level::Error,
                    panic_context(info),
                );
            }
            previous(info);
        }));
    }

    fn upgrade(inner: &Weak<Inner>) -> Option<Self> {
        inner.upgrade().map(|inner| Self { inner })
    }

    /// Full history of accepted entries.
    ///
    /// Entries appended to it directly are recorded but never written.
    pub fn history(&self) -> &Log {
        self.inner.dispatcher.history()
    }

    pub fn state(&self) -> DispatcherState {
        self.inner.dispatcher.state()
    }

    /// Blocks until everything logged so far has reached the sink.
    pub fn flush(&self) {
        self.inner.dispatcher.flush();
    }

    /// Drains and stops the pipeline for every clone of this handle.
    pub fn shutdown(&self) {
        self.inner.dispatcher.shutdown();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .field("entries", &self.history().size())
            .finish()
    }
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_owned()
    }
}

fn panic_context(info: &PanicHookInfo<'_>) -> String {
    let current = thread::current();
    let thread = current.name().unwrap_or("<unnamed>");
    match info.location() {
        Some(loc) => format!("thread '{thread}' panicked at {}:{}", loc.file(), loc.line()),
        None => format!("thread '{thread}' panicked"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::native::{INVALID_ENUM, PLATFORM_ERROR};
    use parking_lot::Mutex;
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Clone, Default)]
    struct Lines(Arc<Mutex<Vec<String>>>);

    impl LogSink for Lines {
        fn write_entry(&mut self, entry: &LogEntry) -> io::Result<()> {
            self.0.lock().push(entry.render());
            Ok(())
        }
    }

    fn logger() -> (Logger, Lines) {
        let lines = Lines::default();
        let logger = Logger::with_sink(LoggerConfig::named("test-logger"), lines.clone()).unwrap();
        (logger, lines)
    }

    #[test]
    fn facade_levels() {
        let (logger, lines) = logger();
        logger.info("a");
        logger.warning("b");
        logger.error("c");
        logger.flush();

        let lines = lines.0.lock();
        assert!(lines[0].ends_with("[INFO] a"));
        assert!(lines[1].ends_with("[WARNING] b"));
        assert!(lines[2].ends_with("[ERROR] c"));
    }

    #[test]
    fn native_error_is_translated() {
        let (logger, lines) = logger();
        let seq = logger.native_error(PLATFORM_ERROR, "X11 went away");
        logger.flush();

        let entry = logger.history().get(seq).unwrap();
        assert_eq!(entry.level(), Level::Error);
        assert_eq!(entry.cause().unwrap().type_name(), "PlatformError");
        assert!(lines.0.lock()[0].ends_with(
            "[ERROR][PlatformError:\"X11 went away\"] An internal native error occurred"
        ));
    }

    #[test]
    fn error_callback_routes_into_same_log() {
        let (logger, lines) = logger();
        let callback = logger.error_callback();
        callback(INVALID_ENUM, "bad hint");
        callback(7, "who knows");
        logger.flush();

        let lines = lines.0.lock();
        assert!(lines[0].contains("[InvalidEnum:\"bad hint\"]"));
        assert!(lines[1].contains("[UnknownNativeError:\"who knows (code 0x7)\"]"));
    }

    #[test]
    fn clones_share_history() {
        let (logger, _) = logger();
        let other = logger.clone();
        logger.info("one");
        other.info("two");
        assert_eq!(logger.history().size(), 2);
        assert_eq!(other.name(), "test-logger");
    }

    #[test]
    fn shutdown_is_shared_by_clones() {
        let (logger, lines) = logger();
        let other = logger.clone();
        logger.info("before");
        other.shutdown();
        assert_eq!(logger.state(), DispatcherState::Closed);
        logger.info("after");
        logger.flush();
        assert_eq!(lines.0.lock().len(), 1);
        assert_eq!(logger.history().size(), 2);
    }

    /// The panic hook is process-wide; tests that swap it take turns.
    static HOOK: Mutex<()> = Mutex::new(());

    #[test]
    fn panic_hook_logs_panics() {
        let _hook = HOOK.lock();
        let (logger, _) = logger();
        logger.install_panic_hook();

        let result = thread::Builder::new()
            .name("doomed".into())
            .spawn(|| panic!("ran out of frames"))
            .unwrap()
            .join();
        assert!(result.is_err());

        let logged = logger.history().entries().into_iter().any(|e| {
            e.cause().is_some_and(|c| c.type_name() == "Panic" && c.message() == "ran out of frames")
                && e.message().starts_with("thread 'doomed' panicked")
        });
        assert!(logged);
    }

    #[test]
    fn panic_hook_does_not_keep_logger_alive() {
        /// Signals when the pipeline releases its sink.
        struct DropFlag(Arc<AtomicBool>);

        impl LogSink for DropFlag {
            fn write_entry(&mut self, _: &LogEntry) -> io::Result<()> {
                Ok(())
            }
        }

        impl Drop for DropFlag {
            fn drop(&mut self) {
                self.0.store(true, Ordering::Release);
            }
        }

        let _hook = HOOK.lock();
        let released = Arc::new(AtomicBool::new(false));
        let logger =
            Logger::with_sink(LoggerConfig::named("hooked"), DropFlag(Arc::clone(&released))).unwrap();
        logger.install_panic_hook();
        logger.info("hooked");
        drop(logger);

        assert!(released.load(Ordering::Acquire));

        // The orphaned hook still forwards without logging anywhere.
        let result = thread::spawn(|| panic!("after the logger is gone")).join();
        assert!(result.is_err());
    }
}
