use std::io::{self, Write};

use super::entry::LogEntry;

/// Ordered output destination for rendered log lines.
///
/// Only the dispatcher's consumer thread calls into a sink.
pub trait LogSink: Send {
    fn write_entry(&mut self, entry: &LogEntry) -> io::Result<()>;

    /// Called once after each drained batch.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one rendered line per entry to an `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_entry(&mut self, entry: &LogEntry) -> io::Result<()> {
        // A single write per line keeps lines whole on shared streams.
        let mut line = entry.render();
        line.push('\n');
        self.writer.write_all(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl LogSink for Box<dyn LogSink> {
    fn write_entry(&mut self, entry: &LogEntry) -> io::Result<()> {
        (**self).write_entry(entry)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Level;

    #[test]
    fn writes_one_line_per_entry() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_entry(&LogEntry::new(Level::Info, "first")).unwrap();
        sink.write_entry(&LogEntry::new(Level::Error, "second ")).unwrap();
        sink.flush().unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] first"));
        assert!(lines[1].ends_with("[ERROR] second"));
    }
}
