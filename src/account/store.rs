//! Account store over a line-oriented backing file.
//!
//! Same storage rules as the inventory store: reads re-scan the file,
//! a missing file reads as empty, malformed lines are skipped with a WARN
//! log, and I/O failures always propagate.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::errors::{AccountError, AccountResult};
use crate::access::{Identity, Role};
use crate::codec::{decode_account, encode_account, AccountRecord};
use crate::observability::Logger;

/// Explicit handle over one account file.
pub struct AccountStore {
    /// Path to the backing file
    path: PathBuf,
    /// Serializes the check-then-append path of `create_account`.
    write_lock: Mutex<()>,
}

impl AccountStore {
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

    /// Exact-match (case-sensitive) username scan.
    pub fn username_exists(&self, username: &str) -> AccountResult<bool> {
        Ok(self
            .read_records()?
            .iter()
            .any(|record| record.username == username))
    }

    /// Authenticates against stored credentials.
    ///
    /// Succeeds only on exact match of both username and secret, returning
    /// the first matching record's identity. Unknown user and wrong secret
    /// both return `AuthFailed`; the two are indistinguishable by design.
    pub fn authenticate(&self, username: &str, secret: &str) -> AccountResult<Identity> {
        self.read_records()?
            .into_iter()
            .find(|record| record.username == username && record.secret == secret)
            .map(|record| Identity {
                username: record.username,
                role: record.role,
            })
            .ok_or(AccountError::AuthFailed)
    }

    /// Appends a new account record.
    ///
    /// Fails with `AlreadyExists` on a username collision and with
    /// `InvalidRole` if `role` names neither recognized role
    /// (case-insensitive). The backing file is untouched on failure.
    pub fn create_account(&self, username: &str, secret: &str, role: &str) -> AccountResult<()> {
        let _guard = lock(&self.write_lock);

        if self.username_exists(username)? {
            return Err(AccountError::AlreadyExists {
                username: username.to_string(),
            });
        }

        let role = Role::parse(role).ok_or_else(|| AccountError::InvalidRole {
            role: role.to_string(),
        })?;

        self.append_line(&encode_account(username, secret, role))?;
        Logger::info(
            "ACCOUNT_CREATED",
            &[("role", role.as_str()), ("username", username)],
        );
        Ok(())
    }

    /// Scans the backing file, skipping blank and malformed lines.
    fn read_records(&self) -> AccountResult<Vec<AccountRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            // Missing file reads as empty, identical to an empty file
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AccountError::storage(
                    format!("failed to read account file: {}", self.path.display()),
                    e,
                ))
            }
        };

        let mut records = Vec::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_account(line) {
                Ok(record) => records.push(record),
                // The offending line holds a secret; log only the reason
                Err(e) => Logger::warn(
                    "ACCOUNT_RECORD_SKIPPED",
                    &[
                        ("path", &self.path.display().to_string()),
                        ("reason", &e.to_string()),
                    ],
                ),
            }
        }
        Ok(records)
    }

    fn append_line(&self, line: &str) -> AccountResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                AccountError::storage(
                    format!("failed to open account file: {}", self.path.display()),
                    e,
                )
            })?;

        file.write_all(line.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .map_err(|e| {
                AccountError::storage(
                    format!("failed to append to account file: {}", self.path.display()),
                    e,
                )
            })?;

        file.sync_all().map_err(|e| {
            AccountError::storage(
                format!("fsync failed on account file: {}", self.path.display()),
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
