//! Output sinks
//!
//! A sink accepts report text and never fails. Write errors on the
//! underlying stream are dropped.

use std::io::Write;

/// Destination for formatted report text
pub trait OutputSink {
    /// Write a chunk of text
    fn write(&mut self, text: &str);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }
}

/// Writes to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            tracing::trace!(error = %err, "dropped report output");
        }
    }
}

/// Writes to any [`std::io::Write`]
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write(&mut self, text: &str) {
        if let Err(err) = self.writer.write_all(text.as_bytes()) {
            tracing::trace!(error = %err, "dropped report output");
        }
    }
}

/// Collects everything written into a `String`
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buffer: String,
}

impl BufferSink {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written so far
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Take the collected text
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn write(&mut self, _text: &str) {}
}
