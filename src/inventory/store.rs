//! Inventory store over a line-oriented backing file.
//!
//! Reads re-scan the file on every call. A missing file reads as empty.
//! Malformed lines are skipped with a WARN log and never abort a scan;
//! I/O failures always propagate.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::book::Book;
use super::errors::{InventoryError, InventoryResult};
use crate::codec::{decode_book, encode_book};
use crate::observability::Logger;

/// Explicit handle over one inventory file.
///
/// Constructed with a storage location rather than a fixed process-wide
/// path, so each test run can own a distinct store.
pub struct InventoryStore {
    /// Path to the backing file
    path: PathBuf,
    /// Serializes the read-modify-write mutation paths. Readers do not
    /// take it; last-writer-wins across processes is unchanged.
    write_lock: Mutex<()>,
}

impl InventoryStore {
    /// Creates a store handle over the given backing file.
    ///
    /// The file is not created until the first successful mutation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every valid decoded record, in file order.
    pub fn list_all(&self) -> InventoryResult<Vec<Book>> {
        self.read_records()
    }

    /// Returns the first record whose id matches case-insensitively.
    ///
    /// Absence is an explicit `Ok(None)`, not an error.
    pub fn get_by_id(&self, id: &str) -> InventoryResult<Option<Book>> {
        Ok(self
            .read_records()?
            .into_iter()
            .find(|book| book.matches_id(id)))
    }

    /// Case-insensitive substring match against the book name.
    pub fn search_by_name(&self, needle: &str) -> InventoryResult<Vec<Book>> {
        let needle = needle.to_lowercase();
        Ok(self
            .read_records()?
            .into_iter()
            .filter(|book| book.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Case-insensitive exact match against the category.
    pub fn search_by_category(&self, category: &str) -> InventoryResult<Vec<Book>> {
        Ok(self
            .read_records()?
            .into_iter()
            .filter(|book| book.category.eq_ignore_ascii_case(category))
            .collect())
    }

    /// Inclusive price bounds.
    ///
    /// An inverted range (`min > max`) fails with `InvalidRange` rather
    /// than silently returning an empty set.
    pub fn search_by_price_range(&self, min: f64, max: f64) -> InventoryResult<Vec<Book>> {
        if min > max {
            return Err(InventoryError::InvalidRange { min, max });
        }
        Ok(self
            .read_records()?
            .into_iter()
            .filter(|book| book.price >= min && book.price <= max)
            .collect())
    }

    /// Appends a new book record.
    ///
    /// Fails with `AlreadyExists` if the id already resolves
    /// (case-insensitively); the backing file is left untouched in that case.
    pub fn add_book(&self, book: Book) -> InventoryResult<()> {
        let _guard = lock(&self.write_lock);

        if self.get_by_id(&book.id)?.is_some() {
            return Err(InventoryError::AlreadyExists {
                id: book.id.clone(),
            });
        }

        self.append_line(&encode_book(&book))?;
        Logger::info("BOOK_ADDED", &[("book_id", &book.id)]);
        Ok(())
    }

    /// Replaces the quantity of the matching record and rewrites the whole
    /// backing file (full-rewrite mutation).
    ///
    /// Fails with `NotFound`, leaving the file byte-identical, if no record
    /// matches the id case-insensitively.
    pub fn update_stock(&self, id: &str, new_quantity: u32) -> InventoryResult<()> {
        let _guard = lock(&self.write_lock);

        let mut books = self.read_records()?;
        let Some(book) = books.iter_mut().find(|book| book.matches_id(id)) else {
            return Err(InventoryError::NotFound { id: id.to_string() });
        };
        book.quantity = new_quantity;
        let book_id = book.id.clone();

        self.rewrite_all(&books)?;
        Logger::info(
            "STOCK_UPDATED",
            &[
                ("book_id", book_id.as_str()),
                ("quantity", &new_quantity.to_string()),
            ],
        );
        Ok(())
    }

    /// Scans the backing file, skipping blank and malformed lines.
    fn read_records(&self) -> InventoryResult<Vec<Book>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            // Missing file reads as empty, identical to an empty file
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(InventoryError::storage(
                    format!("failed to read inventory file: {}", self.path.display()),
                    e,
                ))
            }
        };

        let mut books = Vec::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_book(line) {
                Ok(book) => books.push(book),
                Err(e) => Logger::warn(
                    "INVENTORY_RECORD_SKIPPED",
                    &[
                        ("path", &self.path.display().to_string()),
                        ("reason", &e.to_string()),
                    ],
                ),
            }
        }
        Ok(books)
    }

    fn append_line(&self, line: &str) -> InventoryResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                InventoryError::storage(
                    format!("failed to open inventory file: {}", self.path.display()),
                    e,
                )
            })?;

        file.write_all(line.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .map_err(|e| {
                InventoryError::storage(
                    format!("failed to append to inventory file: {}", self.path.display()),
                    e,
                )
            })?;

        file.sync_all().map_err(|e| {
            InventoryError::storage(
                format!("fsync failed on inventory file: {}", self.path.display()),
                e,
            )
        })
    }

    fn rewrite_all(&self, books: &[Book]) -> InventoryResult<()> {
        let mut contents = String::new();
        for book in books {
            contents.push_str(&encode_book(book));
            contents.push('\n');
        }

        let mut file = File::create(&self.path).map_err(|e| {
            InventoryError::storage(
                format!("failed to rewrite inventory file: {}", self.path.display()),
                e,
            )
        })?;

        file.write_all(contents.as_bytes()).map_err(|e| {
            InventoryError::storage(
                format!("failed to rewrite inventory file: {}", self.path.display()),
                e,
            )
        })?;

        file.sync_all().map_err(|e| {
            InventoryError::storage(
                format!("fsync failed on inventory file: {}", self.path.display()),
                e,
            )
        })
    }
}

/// Takes the write guard. The guard protects no data of its own, so a
/// poisoned lock carries no inconsistent state and is safe to re-enter.
fn lock(mutex: &Mutex<()>) -> std::sync::MutexGuard<'_, ()> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
