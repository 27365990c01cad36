//! # Inventory Store
//!
//! Owns the persisted set of book records.
//!
//! Every read re-scans the backing file, so reads are never stale across
//! calls. Mutations are a check-then-append (`add_book`) or a full-file
//! rewrite (`update_stock`); a per-store mutex makes the two atomic with
//! respect to each other within a process. Cross-process writers remain
//! last-writer-wins at the granularity of a full-file rewrite.

mod book;
mod errors;
mod store;

pub use book::Book;
pub use errors::{InventoryError, InventoryResult};
pub use store::InventoryStore;
