//! bookshop-core - inventory and access-control core for a small bookshop
//!
//! Stores book records and user accounts in line-oriented text files,
//! authenticates users against stored credentials, and maps the two roles
//! (Cashier, Manager) to capability sets that gate the mutating operations.
//! Presentation, transport, and session handling live outside this crate.

pub mod access;
pub mod account;
pub mod codec;
pub mod inventory;
pub mod observability;
pub mod seed;
