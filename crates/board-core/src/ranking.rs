//! Score ordering and rank lookup.

use board_model::{Ambassador, Rank};
use tracing::debug;

/// Order a snapshot by score, highest first.
///
/// The sort is stable and compares score only, so ambassadors with equal
/// scores keep the order they had in the input.
pub fn rank(ambassadors: &[Ambassador]) -> Vec<Ambassador> {
    let mut ordered = ambassadors.to_vec();
    ordered.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(count = ordered.len(), "ranked snapshot");
    ordered
}

/// Position of `target` in an already ranked list, keyed by email.
///
/// Returns [`Rank::UNRANKED`] when no entry carries the target's email.
pub fn rank_of(ordered: &[Ambassador], target: &Ambassador) -> Rank {
    rank_of_email(ordered, &target.email)
}

pub fn rank_of_email(ordered: &[Ambassador], email: &str) -> Rank {
    ordered
        .iter()
        .position(|ambassador| ambassador.has_email(email))
        .map_or(Rank::UNRANKED, Rank::from_index)
}

/// The first `n` entries of a ranked list, or all of them if there are fewer.
pub fn top_n(ordered: &[Ambassador], n: usize) -> &[Ambassador] {
    &ordered[..n.min(ordered.len())]
}

/// One ranked snapshot with lookups over the full ordering.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<Ambassador>,
}

impl Leaderboard {
    pub fn new(ambassadors: &[Ambassador]) -> Self {
        Self {
            entries: rank(ambassadors),
        }
    }

    /// Every ambassador, highest score first.
    pub fn entries(&self) -> &[Ambassador] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[Ambassador] {
        top_n(&self.entries, n)
    }

    pub fn rank_of(&self, target: &Ambassador) -> Rank {
        rank_of(&self.entries, target)
    }

    pub fn rank_of_email(&self, email: &str) -> Rank {
        rank_of_email(&self.entries, email)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amb(name: &str, score: u64) -> Ambassador {
        Ambassador {
            name: name.to_string(),
            email: format!("{}@uni.edu", name.to_lowercase()),
            score,
        }
    }

    #[test]
    fn empty_snapshot_ranks_to_empty() {
        assert!(rank(&[]).is_empty());
        assert!(Leaderboard::new(&[]).is_empty());
        assert!(top_n(&[], 10).is_empty());
    }

    #[test]
    fn rank_does_not_touch_input() {
        let input = vec![amb("A", 1), amb("B", 2)];
        let before = input.clone();
        let _ = rank(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn leaderboard_lookup_by_email() {
        let board = Leaderboard::new(&[amb("A", 1), amb("B", 9)]);
        assert_eq!(board.len(), 2);
        assert_eq!(board.rank_of_email("b@uni.edu").get(), 1);
        assert_eq!(board.rank_of_email("a@uni.edu").get(), 2);
        assert_eq!(board.rank_of_email("nobody@uni.edu"), Rank::UNRANKED);
    }
}
