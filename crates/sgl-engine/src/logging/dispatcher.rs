//! Background dispatch of log entries to a sink.
//!
//! Producers call [`LogDispatcher::enqueue`] from any thread; it records the
//! entry in the [`Log`] history, pushes it onto a FIFO, and wakes the single
//! consumer thread. The consumer parks while the FIFO is empty, and on wake
//! takes every pending entry and writes the batch while holding the sink lock.
//!
//! Lock order is `pending -> history`. The consumer never holds `pending`
//! while it writes, and never holds `sink` while it waits.

use std::collections::VecDeque;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::{Condvar, Mutex};

use super::entry::LogEntry;
use super::history::Log;
use super::sink::LogSink;
use crate::error::{Error, Result};

/// Lifecycle of the consumer thread.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DispatcherState {
    /// Nothing pending; the consumer is parked.
    Idle,
    /// The consumer is writing a batch.
    Draining,
    /// Shut down; the consumer has exited.
    Closed,
}

/// What the consumer does when the sink rejects a write.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SinkFailurePolicy {
    /// Drop the failure and keep draining.
    #[default]
    Swallow,
    /// Report the failure through the `log` facade, then keep draining.
    Report,
}

struct Pending {
    queue: VecDeque<Arc<LogEntry>>,
    state: DispatcherState,
    open: bool,
    consumer_alive: bool,
    accepted: u64,
    written: u64,
}

struct Shared {
    pending: Mutex<Pending>,
    wake: Condvar,
    drained: Condvar,
    sink: Mutex<Box<dyn LogSink>>,
    policy: SinkFailurePolicy,
}

impl Shared {
    fn run(&self) {
        let _alive = ConsumerGuard(self);

        loop {
            let batch: Vec<Arc<LogEntry>> = {
                let mut pending = self.pending.lock();
                // Re-checked after every wake, spurious or not.
                while pending.queue.is_empty() && pending.open {
                    self.wake.wait(&mut pending);
                }
                if pending.queue.is_empty() {
                    return;
                }
                pending.state = DispatcherState::Draining;
                pending.queue.drain(..).collect()
            };

            self.write_batch(&batch);

            let mut pending = self.pending.lock();
            pending.written += batch.len() as u64;
            if pending.queue.is_empty() && pending.open {
                pending.state = DispatcherState::Idle;
            }
            drop(pending);
            self.drained.notify_all();
        }
    }

    fn write_batch(&self, batch: &[Arc<LogEntry>]) {
        let mut sink = self.sink.lock();
        for entry in batch {
            let written = panic::catch_unwind(AssertUnwindSafe(|| sink.write_entry(entry)));
            if let Err(err) = settle(written) {
                self.sink_failed(&err, Some(entry.sequence()));
            }
        }
        let flushed = panic::catch_unwind(AssertUnwindSafe(|| sink.flush()));
        if let Err(err) = settle(flushed) {
            self.sink_failed(&err, None);
        }
    }

    fn sink_failed(&self, err: &io::Error, sequence: Option<usize>) {
        if self.policy == SinkFailurePolicy::Swallow {
            return;
        }
        match sequence {
            Some(seq) => log::warn!("log sink rejected entry #{seq}: {err}"),
            None => log::warn!("log sink flush failed: {err}"),
        }
    }
}

/// A panicking sink call counts as a failed write.
fn settle(result: std::thread::Result<io::Result<()>>) -> io::Result<()> {
    result.unwrap_or_else(|_| Err(io::Error::other("log sink panicked")))
}

/// Marks the consumer gone however it exits, so `flush` cannot hang.
struct ConsumerGuard<'a>(&'a Shared);

impl Drop for ConsumerGuard<'_> {
    fn drop(&mut self) {
        let mut pending = self.0.pending.lock();
        pending.consumer_alive = false;
        pending.state = DispatcherState::Closed;
        drop(pending);
        self.0.drained.notify_all();
    }
}

/// Owns the pending queue and the one consumer thread that drains it.
pub struct LogDispatcher {
    shared: Arc<Shared>,
    history: Log,
    consumer: Mutex<Option<JoinHandle<()>>>,
}

impl LogDispatcher {
    /// Starts the consumer thread, named `name`.
    pub fn spawn(
        name: &str,
        sink: Box<dyn LogSink>,
        policy: SinkFailurePolicy,
    ) -> Result<Self> {
        let shared = Arc::new(Shared {
            pending: Mutex::new(Pending {
                queue: VecDeque::new(),
                state: DispatcherState::Idle,
                open: true,
                consumer_alive: true,
                accepted: 0,
                written: 0,
            }),
            wake: Condvar::new(),
            drained: Condvar::new(),
            sink: Mutex::new(sink),
            policy,
        });

        let worker = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name(name.to_owned())
            .spawn(move || worker.run())
            .map_err(Error::DispatcherSpawn)?;

        log::debug!("log dispatcher '{name}' started");

        Ok(Self {
            shared,
            history: Log::new(),
            consumer: Mutex::new(Some(handle)),
        })
    }

    /// Records `entry` and schedules it for the sink. Never waits on the sink.
    ///
    /// Returns the entry's position in [`history`](Self::history). After
    /// shutdown, or once the consumer thread is gone, the entry is still
    /// recorded but no longer written.
    pub fn enqueue(&self, entry: LogEntry) -> usize {
        let mut pending = self.shared.pending.lock();
        let entry = self.history.push(entry);
        let seq = entry.sequence();

        if !pending.open || !pending.consumer_alive {
            drop(pending);
            log::warn!("log dispatcher closed; entry #{seq} kept in history only");
            return seq;
        }

        pending.queue.push_back(entry);
        pending.accepted += 1;
        drop(pending);
        self.shared.wake.notify_one();
        seq
    }

    /// Every entry accepted so far.
    ///
    /// Appending to the returned [`Log`] directly records an entry without
    /// scheduling it for the sink; use [`enqueue`](Self::enqueue) for output.
    pub fn history(&self) -> &Log {
        &self.history
    }

    pub fn state(&self) -> DispatcherState {
        self.shared.pending.lock().state
    }

    /// Entries accepted but not yet taken by the consumer.
    pub fn pending(&self) -> usize {
        self.shared.pending.lock().queue.len()
    }

    /// Blocks until every entry accepted before this call has been written.
    ///
    /// Returns early if the consumer thread has died.
    pub fn flush(&self) {
        let mut pending = self.shared.pending.lock();
        let target = pending.accepted;
        while pending.written < target && pending.consumer_alive {
            self.shared.drained.wait(&mut pending);
        }
    }

    /// Stops accepting entries for the sink, drains what is pending, and joins
    /// the consumer. Idempotent.
    pub fn shutdown(&self) {
        self.shared.pending.lock().open = false;
        self.shared.wake.notify_all();

        let handle = self.consumer.lock().take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                log::error!("log dispatcher thread panicked");
            }
        }
    }
}

impl Drop for LogDispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}
