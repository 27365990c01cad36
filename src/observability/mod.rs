//! Observability for bookshop-core
//!
//! Structured logging only. Stores emit one event per mutation and one
//! WARN event per skipped malformed record; nothing in this module buffers
//! or drops log lines.

mod logger;

pub use logger::{Logger, Severity};
