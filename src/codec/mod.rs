//! # Record Codec
//!
//! Line format for the two persisted record sets. One record per line,
//! fields comma-separated:
//!
//! - Book:    `bookId,name,category,price,quantity`
//! - Account: `username,secret,role`
//!
//! Plain delimited text keeps the backing files human-inspectable. The codec
//! is the single point that rejects corrupt lines; scan sites skip rejected
//! lines rather than propagating garbage records into the stores.

mod account;
mod book;
mod errors;

pub use account::{decode_account, encode_account, AccountRecord};
pub use book::{decode_book, encode_book};
pub use errors::{CodecError, CodecResult};

/// Field separator for both record kinds.
pub const FIELD_SEPARATOR: char = ',';
