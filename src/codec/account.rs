//! Account record codec.
//!
//! Schema: `username,secret,role`. The role field is written in canonical
//! form (`Manager` / `Cashier`) and read case-insensitively. Secrets are
//! stored in clear text; this is the contractual on-disk format, documented
//! as a known weakness rather than silently changed.

use super::errors::{CodecError, CodecResult};
use super::FIELD_SEPARATOR;
use crate::access::Role;

/// One decoded line from the account file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub username: String,
    pub secret: String,
    pub role: Role,
}

/// Encodes an account as a single record line (no trailing newline).
pub fn encode_account(username: &str, secret: &str, role: Role) -> String {
    format!(
        "{username}{sep}{secret}{sep}{role}",
        username = username,
        secret = secret,
        role = role.as_str(),
        sep = FIELD_SEPARATOR,
    )
}

/// Decodes an account record line.
///
/// Fails if the line does not split into exactly 3 fields or if the role
/// field names neither recognized role.
pub fn decode_account(line: &str) -> CodecResult<AccountRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(CodecError::malformed(
            line,
            format!("expected 3 fields, got {}", fields.len()),
        ));
    }

    let role = Role::parse(fields[2])
        .ok_or_else(|| CodecError::malformed(line, format!("unknown role: {:?}", fields[2])))?;

    Ok(AccountRecord {
        username: fields[0].to_string(),
        secret: fields[1].to_string(),
        role,
    })
}
