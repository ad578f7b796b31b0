//! Line sinks: where a provider's emitted lines end up.
//!
//! Providers never touch `stdout` directly. They hand each finished line to a
//! [`LineSink`], which lets the CLI pick a stream and lets tests capture
//! output without redirecting file descriptors.

use std::io::Write;
use std::sync::Mutex;

use serde::Deserialize;

/// Errors raised while emitting a line.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Writing to the underlying stream failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A recorder's lock was poisoned by a panicking writer.
    #[error("sink lock poisoned")]
    Poisoned,
}

/// Destination for single lines of text.
pub trait LineSink: Send + Sync {
    /// Emit one line. The sink appends the line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the line could not be delivered.
    fn emit(&self, line: &str) -> Result<(), SinkError>;
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        (**self).emit(line)
    }
}

/// Writes lines to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

/// Writes lines to the process's standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LineSink for StderrSink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "{line}")?;
        err.flush()?;
        Ok(())
    }
}

/// Records emitted lines in memory, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line emitted so far.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Poisoned`] if a writer panicked while holding the lock.
    pub fn lines(&self) -> Result<Vec<String>, SinkError> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .map_err(|_| SinkError::Poisoned)
    }
}

impl LineSink for MemorySink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        let mut lines = self.lines.lock().map_err(|_| SinkError::Poisoned)?;
        lines.push(line.to_owned());
        Ok(())
    }
}

/// Standard stream selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Process standard output.
    #[default]
    Stdout,
    /// Process standard error.
    Stderr,
}

impl OutputTarget {
    /// Parse a target name as used in env overrides (`stdout` / `stderr`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdout" => Some(Self::Stdout),
            "stderr" => Some(Self::Stderr),
            _ => None,
        }
    }

    /// Build the sink for this target.
    pub fn sink(self) -> Box<dyn LineSink> {
        match self {
            Self::Stdout => Box::new(StdoutSink),
            Self::Stderr => Box::new(StderrSink),
        }
    }
}
