//! Book model.

use serde::{Deserialize, Serialize};

/// One book record.
///
/// `id` is unique within a store and compared case-insensitively on lookup;
/// uniqueness is enforced by [`InventoryStore::add_book`], not by the codec.
/// Quantity is structurally non-negative; price is validated non-negative at
/// decode time.
///
/// [`InventoryStore::add_book`]: super::InventoryStore::add_book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl Book {
    /// Create a book record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    /// Case-insensitive id comparison used by every lookup.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }
}
