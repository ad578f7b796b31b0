//! Tests for `src/old_phone.rs`.

use oldphone::old_phone::{call_line, mail_line, OldPhone};
use oldphone::output::{LineSink, MemorySink, SinkError};
use oldphone::phone::Phone;

fn recorded(phone: &OldPhone<MemorySink>) -> Vec<String> {
    match phone.sink().lines() {
        Ok(lines) => lines,
        Err(err) => panic!("recorder should not be poisoned: {err}"),
    }
}

/// Sink that rejects every line.
struct BrokenPipe;

impl LineSink for BrokenPipe {
    fn emit(&self, _line: &str) -> Result<(), SinkError> {
        Err(SinkError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "reader went away",
        )))
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn send_mail_to_address() {
    let phone = OldPhone::with_sink(MemorySink::new());
    phone.send_mail("foo@example.com");
    assert_eq!(recorded(&phone), vec!["send mail to foo@example.com"]);
}

#[test]
fn call_phone_number() {
    let phone = OldPhone::with_sink(MemorySink::new());
    phone.call_phone("12345");
    assert_eq!(recorded(&phone), vec!["call phone to 12345"]);
}

#[test]
fn empty_content_keeps_trailing_space() {
    let phone = OldPhone::with_sink(MemorySink::new());
    phone.send_mail("");
    phone.call_phone("");
    assert_eq!(recorded(&phone), vec!["send mail to ", "call phone to "]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn output_is_literal_concatenation() {
    let inputs = [
        "plain",
        "  padded  ",
        "+1 (555) 010-0000",
        "line\nbreak",
        "ünïcødé ✉",
        "send mail to ",
        "%s {} \\n",
    ];
    let phone = OldPhone::with_sink(MemorySink::new());

    for input in inputs {
        phone.send_mail(input);
        phone.call_phone(input);
    }

    let expected: Vec<String> = inputs
        .iter()
        .flat_map(|s| [format!("send mail to {s}"), format!("call phone to {s}")])
        .collect();
    assert_eq!(recorded(&phone), expected);
}

#[test]
fn line_builders_match_emitted_lines() {
    let phone = OldPhone::with_sink(MemorySink::new());
    phone.send_mail("a");
    phone.call_phone("b");
    assert_eq!(recorded(&phone), vec![mail_line("a"), call_line("b")]);
}

#[test]
fn repeated_calls_are_identical() {
    let phone = OldPhone::with_sink(MemorySink::new());
    for _ in 0..5 {
        phone.send_mail("same");
    }
    let lines = recorded(&phone);
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l == "send mail to same"));
}

#[test]
fn sink_failure_does_not_panic() {
    let phone = OldPhone::with_sink(BrokenPipe);
    phone.send_mail("lost");
    phone.call_phone("lost");
}
