//! Legacy phone provider: every operation prints one line.
//!
//! Plays the adaptee role. It does no validation and keeps no state between
//! calls, so the same input always produces the same line.

use tracing::{debug, warn};

use crate::output::{LineSink, StdoutSink};
use crate::phone::Phone;

const MAIL_PREFIX: &str = "send mail to ";
const CALL_PREFIX: &str = "call phone to ";

/// Line emitted by [`Phone::send_mail`].
pub fn mail_line(content: &str) -> String {
    format!("{MAIL_PREFIX}{content}")
}

/// Line emitted by [`Phone::call_phone`].
pub fn call_line(phone_number: &str) -> String {
    format!("{CALL_PREFIX}{phone_number}")
}

/// Stateless provider writing to a [`LineSink`] (standard output by default).
#[derive(Debug, Default)]
pub struct OldPhone<S = StdoutSink> {
    sink: S,
}

impl OldPhone {
    /// Provider that writes to standard output.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: LineSink> OldPhone<S> {
    /// Provider that writes to the given sink.
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// The sink this provider writes to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    // Sink failures are logged, never surfaced: the contract has no error path.
    fn emit(&self, operation: &'static str, line: &str) {
        debug!(operation, line, "emitting phone line");
        if let Err(e) = self.sink.emit(line) {
            warn!(operation, error = %e, "failed to emit phone line");
        }
    }
}

impl<S: LineSink> Phone for OldPhone<S> {
    fn send_mail(&self, content: &str) {
        self.emit("send_mail", &mail_line(content));
    }

    fn call_phone(&self, phone_number: &str) {
        self.emit("call_phone", &call_line(phone_number));
    }
}
