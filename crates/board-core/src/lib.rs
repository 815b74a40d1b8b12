//! Leaderboard engine for the ambassador program.
//!
//! Every operation here is a pure function over one snapshot: nothing is
//! cached and the input list is never mutated, so callers can re-run them on
//! each render or keystroke.

#![deny(unsafe_code)]

pub mod mask;
pub mod ranking;
pub mod registration;
pub mod search;
pub mod view;

pub use mask::{MASK, display_email, mask_email};
pub use ranking::{Leaderboard, rank, rank_of, rank_of_email, top_n};
pub use registration::{
    RegistrationError, RegistrationForm, RegistrationOutcome, RegistrationRequest,
    classify_response,
};
pub use search::{matches_query, normalize_query, search, search_first};
pub use view::{LeaderboardView, RankedRow, SearchOutcome, lookup_row, search_view};
