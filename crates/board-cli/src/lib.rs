//! CLI library components for the ambassador leaderboard.

pub mod logging;
pub mod render;
