//! oldphone: a phone capability and the legacy provider behind it.
//!
//! [`phone::Phone`] is the contract callers hold. [`old_phone::OldPhone`] is
//! the one implementation: it turns each call into a single printed line.
//!
//! ```
//! use oldphone::old_phone::OldPhone;
//! use oldphone::output::MemorySink;
//! use oldphone::phone::Phone;
//!
//! let phone = OldPhone::with_sink(MemorySink::new());
//! let handset: &dyn Phone = &phone;
//! handset.call_phone("12345");
//! assert_eq!(phone.sink().lines().expect("recorded lines"), vec!["call phone to 12345"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod old_phone;
pub mod output;
pub mod phone;
