//! Email address splitting shared by masking and registration checks.

use crate::ModelError;

/// The three pieces of an address that the display mask needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailParts<'a> {
    pub local: &'a str,
    pub domain_name: &'a str,
    /// Everything after the first `.` of the domain, kept verbatim.
    pub extension: &'a str,
}

/// Split an address into local part, domain name and extension.
///
/// Requires exactly one `@` and at least one `.` after it. The domain is
/// split on its first dot, so `a@mail.co.uk` yields `mail` and `co.uk`.
pub fn split_email(email: &str) -> Result<EmailParts<'_>, ModelError> {
    let invalid = || ModelError::InvalidEmailFormat {
        email: email.to_string(),
    };
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if domain.contains('@') {
        return Err(invalid());
    }
    let (domain_name, extension) = domain.split_once('.').ok_or_else(invalid)?;
    Ok(EmailParts {
        local,
        domain_name,
        extension,
    })
}
