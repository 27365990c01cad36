//! # Account Store
//!
//! Owns the persisted set of user accounts (username, secret, role).
//!
//! Usernames are unique and compared case-sensitively, unlike book ids;
//! the asymmetry is deliberate. Authentication returns one
//! uniform failure for unknown user and wrong secret so callers cannot
//! enumerate usernames. Secrets are stored in clear text, a known weakness
//! of the contractual on-disk format.

mod errors;
mod store;

pub use errors::{AccountError, AccountResult};
pub use store::AccountStore;
