//! Display redaction for email addresses.

use board_model::{ModelError, split_email};
use tracing::warn;

/// Marker inserted where characters were removed.
pub const MASK: &str = "***";

/// Mask an address for display: `john.doe@example.com` becomes
/// `joh***@e***.com`.
///
/// Keeps up to three characters of the local part and one of the domain
/// name. The extension after the first domain dot is kept as is. Parts
/// shorter than the kept prefix are shown whole, never padded.
///
/// # Errors
///
/// Returns [`ModelError::InvalidEmailFormat`] when the address has no `@`,
/// more than one `@`, or no `.` in its domain.
pub fn mask_email(email: &str) -> Result<String, ModelError> {
    let parts = split_email(email)?;
    Ok(format!(
        "{}{MASK}@{}{MASK}.{}",
        char_prefix(parts.local, 3),
        char_prefix(parts.domain_name, 1),
        parts.extension
    ))
}

/// The address as it should be rendered.
///
/// Falls back to the raw address when it cannot be masked.
pub fn display_email(email: &str, redact: bool) -> String {
    if !redact {
        return email.to_string();
    }
    match mask_email(email) {
        Ok(masked) => masked,
        Err(_) => {
            // The address itself stays out of the log.
            warn!(len = email.len(), "email could not be masked, showing it unmasked");
            email.to_string()
        }
    }
}

fn char_prefix(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
