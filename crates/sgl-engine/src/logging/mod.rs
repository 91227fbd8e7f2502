//! Asynchronous log pipeline.
//!
//! Any thread may log through a [`Logger`]; one background thread per logger
//! writes entries to its [`LogSink`] in the order they were accepted. Every
//! accepted entry is also kept in the logger's [`Log`] history.
//!
//! The engine's own diagnostics go through the `log` facade instead; see
//! [`init_logging`].

mod dispatcher;
mod entry;
mod history;
mod init;
mod logger;
mod sink;

pub use dispatcher::{DispatcherState, LogDispatcher, SinkFailurePolicy};
pub use entry::{Cause, Level, LogEntry};
pub use history::Log;
pub use init::{init_logging, LoggingConfig};
pub use logger::{ErrorCallback, Logger, LoggerConfig, NATIVE_ERROR_MESSAGE};
pub use sink::{LogSink, WriterSink};
