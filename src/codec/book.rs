//! Book record codec.
//!
//! Schema: `bookId,name,category,price,quantity`. Price is rendered with
//! Rust's shortest round-trip `f64` formatting, so `decode_book` recovers
//! the exact stored value. Quantity is a decimal integer.

use super::errors::{CodecError, CodecResult};
use super::FIELD_SEPARATOR;
use crate::inventory::Book;

/// Encodes a book as a single record line (no trailing newline).
pub fn encode_book(book: &Book) -> String {
    format!(
        "{id}{sep}{name}{sep}{category}{sep}{price}{sep}{quantity}",
        id = book.id,
        name = book.name,
        category = book.category,
        price = book.price,
        quantity = book.quantity,
        sep = FIELD_SEPARATOR,
    )
}

/// Decodes a book record line.
///
/// Fails if the line does not split into exactly 5 fields, if `price` is not
/// a finite non-negative number, or if `quantity` is not a non-negative
/// integer. Blank lines are the caller's job to skip.
pub fn decode_book(line: &str) -> CodecResult<Book> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != 5 {
        return Err(CodecError::malformed(
            line,
            format!("expected 5 fields, got {}", fields.len()),
        ));
    }

    let price: f64 = fields[3]
        .parse()
        .map_err(|_| CodecError::malformed(line, format!("invalid price: {:?}", fields[3])))?;
    if !price.is_finite() || price < 0.0 {
        return Err(CodecError::malformed(
            line,
            format!("price must be finite and non-negative: {:?}", fields[3]),
        ));
    }

    let quantity: u32 = fields[4]
        .parse()
        .map_err(|_| CodecError::malformed(line, format!("invalid quantity: {:?}", fields[4])))?;

    Ok(Book {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        category: fields[2].to_string(),
        price,
        quantity,
    })
}
