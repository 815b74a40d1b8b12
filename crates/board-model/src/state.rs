use serde::{Deserialize, Serialize};

use crate::Ambassador;

/// Where the leaderboard snapshot is in its fetch lifecycle.
///
/// `Loaded` with an empty list is a real answer ("nobody has registered"),
/// which is different from `NotLoaded`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded(Vec<Ambassador>),
    Failed(String),
}

impl LoadState {
    /// The snapshot, if one has been loaded.
    pub fn ambassadors(&self) -> Option<&[Ambassador]> {
        match self {
            Self::Loaded(list) => Some(list),
            Self::NotLoaded | Self::Failed(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl From<Vec<Ambassador>> for LoadState {
    fn from(list: Vec<Ambassador>) -> Self {
        Self::Loaded(list)
    }
}
