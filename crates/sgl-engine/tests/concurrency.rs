//! Cross-thread behavior of the keyboard and the log pipeline.

use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use parking_lot::Mutex;

use sgl_engine::input::{KeyAction, KeyEvent, Keyboard};
use sgl_engine::logging::{Level, LogEntry, LogSink, Logger, LoggerConfig, WriterSink};

/// `io::Write` over a shared buffer, so tests can inspect what the sink saw.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().clone())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

fn buffered_logger(name: &str) -> (Logger, SharedBuf) {
    let buf = SharedBuf::default();
    let logger = Logger::with_sink(LoggerConfig::named(name), WriterSink::new(buf.clone())).unwrap();
    (logger, buf)
}

#[test]
fn ten_producers_hundred_entries_each() {
    const THREADS: usize = 10;
    const PER_THREAD: usize = 100;

    let (logger, buf) = buffered_logger("scenario-d");
    let start = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                for i in 0..PER_THREAD {
                    logger.info(format!("producer {t} entry {i}"));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    logger.flush();

    assert_eq!(logger.history().size(), THREADS * PER_THREAD);

    let lines = buf.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    // Every line is whole and appears exactly once.
    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with('['), "malformed line: {line:?}");
        let (_, text) = line.split_once("[INFO] ").expect("missing level tag");
        assert!(seen.insert(text.to_owned()), "duplicate line: {line:?}");
    }

    // Per producer, entries arrive in the order they were logged.
    for t in 0..THREADS {
        let prefix = format!("producer {t} entry ");
        let order: Vec<usize> = lines
            .iter()
            .filter_map(|l| l.split_once(&prefix).map(|(_, n)| n.parse().unwrap()))
            .collect();
        assert_eq!(order, (0..PER_THREAD).collect::<Vec<_>>());
    }

    // Sink order matches history order.
    let history: Vec<String> = logger
        .history()
        .entries()
        .iter()
        .map(|e| e.render())
        .collect();
    assert_eq!(history, lines);
}

#[test]
fn sequence_follows_real_time_order() {
    let (logger, _) = buffered_logger("linearizable");
    let a = logger.info("first");
    let b = thread::scope(|s| s.spawn(|| logger.info("second")).join().unwrap());
    assert!(a < b);
}

#[test]
fn shutdown_flushes_everything_accepted() {
    let (logger, buf) = buffered_logger("shutdown");
    let producers: Vec<_> = (0..4)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    logger.log(Level::Warning, format!("{t}/{i}"));
                }
            })
        })
        .collect();
    for p in producers {
        p.join().unwrap();
    }

    logger.shutdown();
    assert_eq!(buf.lines().len(), 200);
}

#[test]
fn slow_sink_does_not_block_producers() {
    struct Slow(Arc<AtomicBool>);

    impl LogSink for Slow {
        fn write_entry(&mut self, _: &LogEntry) -> io::Result<()> {
            while !self.0.load(Ordering::Acquire) {
                thread::yield_now();
            }
            Ok(())
        }
    }

    let gate = Arc::new(AtomicBool::new(false));
    let logger = Logger::with_sink(LoggerConfig::named("slow"), Slow(Arc::clone(&gate))).unwrap();

    // The sink is stuck on the first entry; producers still get through.
    for i in 0..100 {
        logger.info(format!("{i}"));
    }
    assert_eq!(logger.history().size(), 100);

    gate.store(true, Ordering::Release);
    logger.flush();
}

#[test]
fn readers_never_see_a_torn_key_update() {
    // Even codes are always pressed and odd codes always released, so a
    // consistent snapshot must agree with the parity of its current key.
    let kb = Arc::new(Keyboard::new(64));
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let kb = Arc::clone(&kb);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Acquire) {
                    let snap = kb.snapshot();
                    let Some(current) = snap.current() else { continue };
                    let expected = if current % 2 == 0 {
                        KeyAction::Pressed
                    } else {
                        KeyAction::Released
                    };
                    assert_eq!(snap.state(current).unwrap(), Some(expected));
                    assert!(!(snap.is_down(current).unwrap() && snap.is_up(current).unwrap()));

                    if let Some(previous) = snap.previous() {
                        // The writer only ever steps to the neighbouring code.
                        assert_eq!((previous + 1) % 64, current);
                    }
                }
            })
        })
        .collect();

    for i in 0..20_000u32 {
        let code = i % 64;
        let action = if code % 2 == 0 {
            KeyAction::Pressed
        } else {
            KeyAction::Released
        };
        kb.apply(KeyEvent::new(code, action)).unwrap();
    }
    done.store(true, Ordering::Release);

    for r in readers {
        r.join().unwrap();
    }
}

#[test]
fn keyboard_reports_to_logger() {
    let (logger, buf) = buffered_logger("keyboard");
    let kb = Keyboard::glfw().with_logger(logger.clone());
    kb.apply(KeyEvent::new(65, KeyAction::Pressed)).unwrap();
    kb.apply(KeyEvent::new(65, KeyAction::Released)).unwrap();
    assert!(kb.was_typed(65).unwrap());

    logger.flush();
    let lines = buf.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[INFO] key PRESSED: A (65)"));
    assert!(lines[1].ends_with("[INFO] key RELEASED: A (65) (previous A (65))"));
}
