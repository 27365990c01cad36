//! Inventory Store Invariant Tests
//!
//! - Book id uniqueness is enforced at creation time, case-insensitively
//! - Searches are pure filters over the full scan, order preserved
//! - Price bounds are inclusive
//! - A failed mutation leaves the backing file byte-identical
//! - One corrupt line never makes the whole inventory unreadable

use std::fs;

use bookshop_core::codec::{decode_book, encode_book};
use bookshop_core::inventory::{Book, InventoryError, InventoryStore};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn temp_store() -> (TempDir, InventoryStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = InventoryStore::new(temp_dir.path().join("books.txt"));
    (temp_dir, store)
}

fn seed_catalog(store: &InventoryStore) {
    let books = [
        Book::new("B001", "Java Programming", "Programming", 2500.00, 15),
        Book::new("B002", "Python Basics", "Programming", 2000.00, 20),
        Book::new("B006", "The Great Gatsby", "Fiction", 1500.00, 25),
        Book::new("B007", "To Kill a Mockingbird", "Fiction", 1800.00, 18),
    ];
    for book in books {
        store.add_book(book).unwrap();
    }
}

// =============================================================================
// Codec round-trip
// =============================================================================

/// decode(encode(b)) reproduces every field.
#[test]
fn test_codec_round_trip_field_for_field() {
    let book = Book::new("B017", "Systems Thinking", "Business", 2149.50, 7);
    let decoded = decode_book(&encode_book(&book)).unwrap();
    assert_eq!(decoded.id, "B017");
    assert_eq!(decoded.name, "Systems Thinking");
    assert_eq!(decoded.category, "Business");
    assert_eq!(decoded.price, 2149.50);
    assert_eq!(decoded.quantity, 7);
}

// =============================================================================
// Uniqueness at creation time
// =============================================================================

/// A second add with the same id (any case, any other fields) is rejected
/// and the store is unchanged.
#[test]
fn test_duplicate_add_rejected_and_store_unchanged() {
    let (_dir, store) = temp_store();
    store
        .add_book(Book::new("B001", "Java Programming", "Programming", 2500.00, 15))
        .unwrap();

    let before = fs::read(store.path()).unwrap();
    let result = store.add_book(Book::new("b001", "Impostor", "Fiction", 1.0, 99));

    assert!(matches!(result, Err(InventoryError::AlreadyExists { .. })));
    assert_eq!(
        fs::read(store.path()).unwrap(),
        before,
        "rejected add must leave the backing file byte-identical"
    );
    assert_eq!(store.list_all().unwrap().len(), 1);
}

// =============================================================================
// Search correctness
// =============================================================================

/// Category search returns exactly the subset of list_all whose category
/// matches case-insensitively, order preserved.
#[test]
fn test_category_search_equals_filtered_list_all() {
    let (_dir, store) = temp_store();
    seed_catalog(&store);

    let all = store.list_all().unwrap();
    let expected: Vec<&Book> = all
        .iter()
        .filter(|b| b.category.eq_ignore_ascii_case("Fiction"))
        .collect();
    let hits = store.search_by_category("Fiction").unwrap();

    assert_eq!(hits.len(), expected.len());
    for (hit, want) in hits.iter().zip(expected) {
        assert_eq!(hit, want);
    }
    assert_eq!(hits[0].id, "B006");
    assert_eq!(hits[1].id, "B007");
}

/// Price range bounds are inclusive on both ends.
#[test]
fn test_price_range_inclusive() {
    let (_dir, store) = temp_store();
    store
        .add_book(Book::new("P1", "At Lower Bound", "Fiction", 1500.00, 1))
        .unwrap();
    store
        .add_book(Book::new("P2", "Inside", "Fiction", 1800.00, 1))
        .unwrap();
    store
        .add_book(Book::new("P3", "Above", "Fiction", 2500.00, 1))
        .unwrap();

    let hits = store.search_by_price_range(1500.0, 2000.0).unwrap();
    let ids: Vec<&str> = hits.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["P1", "P2"]);
}

// =============================================================================
// Full-rewrite mutation
// =============================================================================

/// update_stock on a missing id fails and the file is byte-identical.
#[test]
fn test_update_stock_miss_is_idempotent() {
    let (_dir, store) = temp_store();
    seed_catalog(&store);

    let before = fs::read(store.path()).unwrap();
    let result = store.update_stock("NOPE", 5);

    assert!(matches!(
        result,
        Err(InventoryError::NotFound { ref id }) if id == "NOPE"
    ));
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

/// End-to-end: seed B001, update via a different-cased id, and observe the
/// new quantity with every other field intact.
#[test]
fn test_end_to_end_case_insensitive_stock_update() {
    let (_dir, store) = temp_store();
    store
        .add_book(Book::new("B001", "Java Programming", "Programming", 2500.00, 15))
        .unwrap();

    store.update_stock("b001", 20).unwrap();

    let book = store.get_by_id("B001").unwrap().unwrap();
    assert_eq!(book.quantity, 20);
    assert_eq!(book.id, "B001");
    assert_eq!(book.name, "Java Programming");
    assert_eq!(book.category, "Programming");
    assert_eq!(book.price, 2500.00);
}

// =============================================================================
// Corrupt-line recovery
// =============================================================================

/// A corrupt line is skipped on read and every valid record stays visible.
#[test]
fn test_corrupt_line_does_not_poison_scan() {
    let (_dir, store) = temp_store();
    seed_catalog(&store);

    // Splice garbage between valid records
    let contents = fs::read_to_string(store.path()).unwrap();
    let mut lines: Vec<&str> = contents.lines().collect();
    lines.insert(2, "B0xx,half a record");
    fs::write(store.path(), lines.join("\n") + "\n").unwrap();

    let books = store.list_all().unwrap();
    assert_eq!(books.len(), 4, "all valid records survive a corrupt line");
    assert!(store.get_by_id("B007").unwrap().is_some());
}
