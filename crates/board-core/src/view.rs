//! View model handed to the rendering layer.
//!
//! Keeps the four "nothing to show" situations apart: still loading, load
//! failed, loaded with zero ambassadors, and a search that found nobody.

use board_model::{Ambassador, LoadState, Rank, ViewOptions};
use serde::Serialize;
use tracing::debug;

use crate::mask::display_email;
use crate::ranking::Leaderboard;
use crate::search::{matches_query, normalize_query};

pub const LOADING_MESSAGE: &str = "Loading leaderboard...";
pub const EMPTY_MESSAGE: &str = "No ambassadors registered yet. Be the first to join!";
pub const NO_MATCHES_MESSAGE: &str = "No ambassador found with that name.";

/// One rendered leaderboard or search row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRow {
    pub rank: Rank,
    pub name: String,
    /// Masked email unless redaction is turned off.
    pub contact: String,
    pub score: u64,
}

impl RankedRow {
    fn new(ambassador: &Ambassador, rank: Rank, options: &ViewOptions) -> Self {
        Self {
            rank,
            name: ambassador.name.clone(),
            contact: display_email(&ambassador.email, options.redact_emails),
            score: ambassador.score,
        }
    }
}

/// What the leaderboard table should show for a given load state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LeaderboardView {
    Loading,
    Failed { reason: String },
    Empty,
    Ready { rows: Vec<RankedRow>, total: usize },
}

impl LeaderboardView {
    pub fn build(state: &LoadState, options: &ViewOptions) -> Self {
        let ambassadors = match state {
            LoadState::NotLoaded => return Self::Loading,
            LoadState::Failed(reason) => {
                return Self::Failed {
                    reason: reason.clone(),
                };
            }
            LoadState::Loaded(list) if list.is_empty() => return Self::Empty,
            LoadState::Loaded(list) => list,
        };
        let board = Leaderboard::new(ambassadors);
        let rows: Vec<RankedRow> = board
            .top(options.top_n)
            .iter()
            .enumerate()
            .map(|(index, ambassador)| RankedRow::new(ambassador, Rank::from_index(index), options))
            .collect();
        debug!(total = board.len(), shown = rows.len(), "built leaderboard view");
        Self::Ready {
            rows,
            total: board.len(),
        }
    }

    /// Status line for the non-table states.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE.to_string()),
            Self::Failed { reason } => Some(failed_message(reason)),
            Self::Empty => Some(EMPTY_MESSAGE.to_string()),
            Self::Ready { .. } => None,
        }
    }
}

/// Result of running the search box against a load state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The snapshot is not available; carries the status line to show.
    Unavailable(String),
    /// The query was blank.
    Inactive,
    NoMatches,
    Matches(Vec<RankedRow>),
}

impl SearchOutcome {
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Unavailable(message) => Some(message.clone()),
            Self::NoMatches => Some(NO_MATCHES_MESSAGE.to_string()),
            Self::Inactive | Self::Matches(_) => None,
        }
    }
}

/// Search a load state and annotate each match with its overall rank.
///
/// Matches keep snapshot order. A match with a zero score is reported as
/// unranked even though it has a position in the ordering.
pub fn search_view(state: &LoadState, query: &str, options: &ViewOptions) -> SearchOutcome {
    let ambassadors = match state {
        LoadState::Loaded(list) => list,
        LoadState::NotLoaded => return SearchOutcome::Unavailable(LOADING_MESSAGE.to_string()),
        LoadState::Failed(reason) => return SearchOutcome::Unavailable(failed_message(reason)),
    };
    let Some(normalized) = normalize_query(query) else {
        return SearchOutcome::Inactive;
    };
    let board = Leaderboard::new(ambassadors);
    let rows: Vec<RankedRow> = ambassadors
        .iter()
        .filter(|ambassador| matches_query(ambassador, &normalized))
        .map(|ambassador| RankedRow::new(ambassador, displayed_rank(&board, ambassador), options))
        .collect();
    debug!(matches = rows.len(), "search view built");
    if rows.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(rows)
    }
}

/// Row for the ambassador registered under `email`, if any.
pub fn lookup_row(
    ambassadors: &[Ambassador],
    email: &str,
    options: &ViewOptions,
) -> Option<RankedRow> {
    let board = Leaderboard::new(ambassadors);
    let ambassador = board
        .entries()
        .iter()
        .find(|ambassador| ambassador.has_email(email))?;
    Some(RankedRow::new(
        ambassador,
        displayed_rank(&board, ambassador),
        options,
    ))
}

/// Rank shown next to a single ambassador. Nobody ranks on zero points.
fn displayed_rank(board: &Leaderboard, ambassador: &Ambassador) -> Rank {
    if ambassador.score > 0 {
        board.rank_of(ambassador)
    } else {
        Rank::UNRANKED
    }
}

fn failed_message(reason: &str) -> String {
    format!("Could not load the leaderboard: {reason}")
}
