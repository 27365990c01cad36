use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission level attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Read-only access to the inventory
    Cashier,
    /// Read-write access plus account administration
    Manager,
}

impl Role {
    /// Parses a role name, case-insensitively.
    ///
    /// Returns `None` for anything other than `Manager` or `Cashier`.
    pub fn parse(s: &str) -> Option<Role> {
        if s.eq_ignore_ascii_case("manager") {
            Some(Role::Manager)
        } else if s.eq_ignore_ascii_case("cashier") {
            Some(Role::Cashier)
        } else {
            None
        }
    }

    /// Returns the canonical on-disk spelling of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cashier => "Cashier",
            Role::Manager => "Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated (username, role) pair returned by the account store.
///
/// An `Identity` is a value snapshot; it holds no reference into store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub role: Role,
}

impl Identity {
    /// Returns whether this identity's role includes the capability.
    pub fn can(&self, capability: Capability) -> bool {
        capabilities_for(self.role).contains(&capability)
    }
}

/// A named permission to invoke one query or mutation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    ListAll,
    GetById,
    SearchByName,
    SearchByCategory,
    SearchByPriceRange,
    AddBook,
    UpdateStock,
    CreateAccount,
}

impl Capability {
    /// Returns the capability name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ListAll => "list-all",
            Capability::GetById => "get-by-id",
            Capability::SearchByName => "search-by-name",
            Capability::SearchByCategory => "search-by-category",
            Capability::SearchByPriceRange => "search-by-price-range",
            Capability::AddBook => "add-book",
            Capability::UpdateStock => "update-stock",
            Capability::CreateAccount => "create-account",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capabilities held by a Cashier: the five read operations.
pub const CASHIER_CAPABILITIES: &[Capability] = &[
    Capability::ListAll,
    Capability::GetById,
    Capability::SearchByName,
    Capability::SearchByCategory,
    Capability::SearchByPriceRange,
];

/// Capabilities held by a Manager: everything a Cashier has plus mutations.
pub const MANAGER_CAPABILITIES: &[Capability] = &[
    Capability::ListAll,
    Capability::GetById,
    Capability::SearchByName,
    Capability::SearchByCategory,
    Capability::SearchByPriceRange,
    Capability::AddBook,
    Capability::UpdateStock,
    Capability::CreateAccount,
];

/// Returns the static capability set for a role.
pub fn capabilities_for(role: Role) -> &'static [Capability] {
    match role {
        Role::Cashier => CASHIER_CAPABILITIES,
        Role::Manager => MANAGER_CAPABILITIES,
    }
}

/// Returned when an identity attempts an operation its role does not grant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("role {role} may not invoke {capability}")]
pub struct AccessDenied {
    pub role: Role,
    pub capability: Capability,
}

/// Checks that the identity's role grants the capability.
///
/// Callers layer this in front of the role-gated store mutations.
pub fn ensure_capability(identity: &Identity, capability: Capability) -> Result<(), AccessDenied> {
    if identity.can(capability) {
        Ok(())
    } else {
        Err(AccessDenied {
            role: identity.role,
            capability,
        })
    }
}
