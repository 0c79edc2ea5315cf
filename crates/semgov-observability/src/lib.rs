//! # semgov-observability
//!
//! Structured tracing setup and named log events for the governance
//! pipeline. Raw text never reaches a log line: texts are identified by a
//! [`fingerprint`] and a character count.

pub mod fingerprint;
pub mod tracing_setup;

pub use fingerprint::{fingerprint, TextFingerprint};
pub use tracing_setup::{events, filter_directive, init_from_config, init_tracing_with_filter};
