//! Case-insensitive substring search over names and emails.

use board_model::Ambassador;
use tracing::debug;

/// Trim and lowercase a query. Blank queries mean search is inactive.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// True when the name or email contains an already normalized query.
pub fn matches_query(ambassador: &Ambassador, normalized: &str) -> bool {
    ambassador.name.to_lowercase().contains(normalized)
        || ambassador.email.to_lowercase().contains(normalized)
}

/// Every ambassador matching `query`, in input order.
///
/// A blank query returns nothing rather than everything.
pub fn search(ambassadors: &[Ambassador], query: &str) -> Vec<Ambassador> {
    let Some(normalized) = normalize_query(query) else {
        return Vec::new();
    };
    let found: Vec<Ambassador> = ambassadors
        .iter()
        .filter(|ambassador| matches_query(ambassador, &normalized))
        .cloned()
        .collect();
    debug!(
        query_len = normalized.len(),
        matches = found.len(),
        "search complete"
    );
    found
}

/// First ambassador matching `query`, in input order.
pub fn search_first<'a>(ambassadors: &'a [Ambassador], query: &str) -> Option<&'a Ambassador> {
    let normalized = normalize_query(query)?;
    ambassadors
        .iter()
        .find(|ambassador| matches_query(ambassador, &normalized))
}
