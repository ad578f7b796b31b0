//! The phone capability.
//!
//! Callers program against [`Phone`] and never name the concrete provider.
//! Smart pointers and references forward calls unchanged, so a `&dyn Phone`,
//! a `Box<dyn Phone>` and an `Arc<OldPhone>` are all interchangeable.

use std::sync::Arc;

/// Two-operation phone contract.
///
/// Implementations accept any input, including empty strings, and report
/// nothing back to the caller.
pub trait Phone {
    /// Send a text message with the given content.
    fn send_mail(&self, content: &str);

    /// Place a call to the given number.
    fn call_phone(&self, phone_number: &str);
}

impl<P: Phone + ?Sized> Phone for &P {
    fn send_mail(&self, content: &str) {
        (**self).send_mail(content);
    }

    fn call_phone(&self, phone_number: &str) {
        (**self).call_phone(phone_number);
    }
}

impl<P: Phone + ?Sized> Phone for Box<P> {
    fn send_mail(&self, content: &str) {
        (**self).send_mail(content);
    }

    fn call_phone(&self, phone_number: &str) {
        (**self).call_phone(phone_number);
    }
}

impl<P: Phone + ?Sized> Phone for Arc<P> {
    fn send_mail(&self, content: &str) {
        (**self).send_mail(content);
    }

    fn call_phone(&self, phone_number: &str) {
        (**self).call_phone(phone_number);
    }
}
