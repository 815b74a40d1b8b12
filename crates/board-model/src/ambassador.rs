use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A program participant as served by the ambassador collection endpoint.
///
/// The email is the only identity the snapshot carries, so rank lookups
/// and deduplication key on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ambassador {
    pub name: String,
    pub email: String,
    pub score: u64,
}

impl Ambassador {
    /// Build a record, trimming the name and rejecting a blank one.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        score: u64,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_string(),
            email: email.into().trim().to_string(),
            score,
        })
    }

    /// True when `email` is the same key as this record's email.
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}
