//! Display options for the leaderboard view.

use serde::{Deserialize, Serialize};

/// Number of rows the leaderboard table shows.
pub const DEFAULT_TOP_N: usize = 10;

/// Options controlling how the leaderboard is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Rows shown in the leaderboard table.
    pub top_n: usize,
    /// Mask email addresses in rendered rows.
    ///
    /// Matching and rank lookup always use the raw address.
    pub redact_emails: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            redact_emails: true,
        }
    }
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_redact_emails(mut self, enable: bool) -> Self {
        self.redact_emails = enable;
        self
    }
}
