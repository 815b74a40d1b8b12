use std::fmt;

use serde::{Deserialize, Serialize};

/// A 1-based leaderboard position. Zero means the ambassador is unranked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rank(usize);

impl Rank {
    pub const UNRANKED: Rank = Rank(0);

    /// Rank for a zero-based index into the ordered list.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_ranked(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ranked() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("Not Ranked Yet")
        }
    }
}
