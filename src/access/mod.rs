//! # Access Policy
//!
//! Static role-to-capability mapping for the two permission levels.
//!
//! Cashier holds the five read capabilities; Manager holds those plus the
//! three mutations (add-book, update-stock, create-account). The stores are
//! mechanism, not policy: callers check capabilities here before invoking a
//! gated store operation.

mod policy;

pub use policy::{
    capabilities_for, ensure_capability, AccessDenied, Capability, Identity, Role,
    CASHIER_CAPABILITIES, MANAGER_CAPABILITIES,
};
