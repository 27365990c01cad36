//! First-run seeding.
//!
//! The embedding process calls these at startup so a fresh installation has
//! something to log in with and something on the shelves. Both helpers are
//! idempotent: they only write what is missing.

use crate::account::{AccountResult, AccountStore};
use crate::inventory::{Book, InventoryResult, InventoryStore};
use crate::observability::Logger;

/// Default accounts created on first run.
const DEFAULT_ACCOUNTS: &[(&str, &str, &str)] = &[
    ("admin", "admin123", "Manager"),
    ("cashier", "cash123", "Cashier"),
];

/// Sample inventory written when the book file is empty.
const SAMPLE_BOOKS: &[(&str, &str, &str, f64, u32)] = &[
    ("B001", "Java Programming", "Programming", 2500.00, 15),
    ("B002", "Python Basics", "Programming", 2000.00, 20),
    ("B003", "Data Structures", "Computer Science", 3000.00, 10),
    ("B004", "Web Development", "Programming", 2800.00, 12),
    ("B005", "Database Systems", "Computer Science", 3200.00, 8),
    ("B006", "The Great Gatsby", "Fiction", 1500.00, 25),
    ("B007", "To Kill a Mockingbird", "Fiction", 1800.00, 18),
    ("B008", "Business Management", "Business", 2200.00, 14),
];

/// Creates the default Manager and Cashier accounts if their usernames are
/// absent. Existing accounts are never touched.
pub fn ensure_default_accounts(accounts: &AccountStore) -> AccountResult<()> {
    for &(username, secret, role) in DEFAULT_ACCOUNTS {
        if !accounts.username_exists(username)? {
            accounts.create_account(username, secret, role)?;
            Logger::info("DEFAULT_ACCOUNT_SEEDED", &[("username", username)]);
        }
    }
    Ok(())
}

/// Adds the sample books if and only if the inventory is empty.
pub fn ensure_sample_books(inventory: &InventoryStore) -> InventoryResult<()> {
    if !inventory.list_all()?.is_empty() {
        return Ok(());
    }
    for &(id, name, category, price, quantity) in SAMPLE_BOOKS {
        inventory.add_book(Book::new(id, name, category, price, quantity))?;
    }
    Logger::info(
        "SAMPLE_BOOKS_SEEDED",
        &[("count", &SAMPLE_BOOKS.len().to_string())],
    );
    Ok(())
}
