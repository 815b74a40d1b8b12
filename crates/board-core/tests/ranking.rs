//! Ordering and rank lookup behaviour.

use std::collections::BTreeMap;

use board_core::{Leaderboard, rank, rank_of, top_n};
use board_model::{Ambassador, Rank};
use proptest::prelude::*;

fn amb(name: &str, score: u64) -> Ambassador {
    Ambassador {
        name: name.to_string(),
        email: format!("{}@uni.edu", name.to_lowercase()),
        score,
    }
}

fn names(list: &[Ambassador]) -> Vec<&str> {
    list.iter().map(|a| a.name.as_str()).collect()
}

#[test]
fn ties_keep_input_order() {
    let input = vec![amb("A", 10), amb("B", 30), amb("C", 30), amb("D", 5)];
    let ordered = rank(&input);
    assert_eq!(names(&ordered), vec!["B", "C", "A", "D"]);
    assert_eq!(rank_of(&ordered, &input[3]).get(), 4);
    assert_eq!(rank_of(&ordered, &input[1]).get(), 1);
    assert_eq!(rank_of(&ordered, &input[2]).get(), 2);
}

#[test]
fn tie_order_follows_input_not_name() {
    let input = vec![amb("Zed", 7), amb("Amy", 7)];
    assert_eq!(names(&rank(&input)), vec!["Zed", "Amy"]);
}

#[test]
fn absent_ambassador_is_unranked() {
    let ordered = rank(&[amb("A", 3), amb("B", 1)]);
    let stranger = amb("Stranger", 99);
    assert_eq!(rank_of(&ordered, &stranger), Rank::UNRANKED);
    assert_eq!(rank_of(&ordered, &stranger).get(), 0);
}

#[test]
fn rank_lookup_uses_email_only() {
    let ordered = rank(&[amb("A", 3), amb("B", 1)]);
    let renamed = Ambassador {
        name: "Someone Else".to_string(),
        email: "b@uni.edu".to_string(),
        score: 0,
    };
    assert_eq!(rank_of(&ordered, &renamed).get(), 2);
}

#[test]
fn rank_reaches_beyond_top_ten() {
    let input: Vec<Ambassador> = (0..25).map(|i| amb(&format!("P{i}"), i)).collect();
    let board = Leaderboard::new(&input);
    // Lowest score sits at the bottom of the full ordering.
    assert_eq!(board.rank_of(&input[0]).get(), 25);
    assert_eq!(board.rank_of(&input[24]).get(), 1);
}

#[test]
fn top_ten_of_twenty_five() {
    let input: Vec<Ambassador> = (0..25).map(|i| amb(&format!("P{i}"), (i * 7) % 11)).collect();
    let ordered = rank(&input);
    let top = top_n(&ordered, 10);
    assert_eq!(top.len(), 10);
    assert_eq!(top, &ordered[..10]);
}

#[test]
fn top_ten_of_short_list_is_everything() {
    let ordered = rank(&[amb("A", 1), amb("B", 2), amb("C", 3)]);
    assert_eq!(top_n(&ordered, 10).len(), 3);
    assert_eq!(Leaderboard::new(&ordered).top(10), &ordered[..]);
}

fn snapshot(scores: &[u64]) -> Vec<Ambassador> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| Ambassador {
            name: format!("Member {i}"),
            email: format!("member{i}@uni.edu"),
            score,
        })
        .collect()
}

/// One group per distinct score; members of a group share that score.
fn tied_groups(sizes: &BTreeMap<u64, usize>) -> Vec<Vec<Ambassador>> {
    sizes
        .iter()
        .map(|(&score, &size)| {
            (0..size)
                .map(|member| Ambassador {
                    name: format!("S{score} M{member}"),
                    email: format!("s{score}m{member}@uni.edu"),
                    score,
                })
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn ranking_is_idempotent(scores in prop::collection::vec(0u64..50, 0..40)) {
        let once = rank(&snapshot(&scores));
        prop_assert_eq!(rank(&once), once);
    }

    #[test]
    fn ranking_is_sorted_and_stable(scores in prop::collection::vec(0u64..20, 0..40)) {
        let input = snapshot(&scores);
        let ordered = rank(&input);
        prop_assert_eq!(ordered.len(), input.len());
        for pair in ordered.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let left = input.iter().position(|a| a.email == pair[0].email);
                let right = input.iter().position(|a| a.email == pair[1].email);
                prop_assert!(left < right);
            }
        }
    }

    #[test]
    fn distinct_scores_ignore_input_order(
        (input, shuffled) in prop::collection::btree_set(0u64..1_000, 0..30)
            .prop_map(|set| snapshot(&set.into_iter().collect::<Vec<_>>()))
            .prop_flat_map(|input| (Just(input.clone()), Just(input).prop_shuffle()))
    ) {
        prop_assert_eq!(rank(&shuffled), rank(&input));
    }

    #[test]
    fn every_member_has_its_position(scores in prop::collection::vec(0u64..50, 1..40)) {
        let input = snapshot(&scores);
        let ordered = rank(&input);
        for (index, ambassador) in ordered.iter().enumerate() {
            prop_assert_eq!(rank_of(&ordered, ambassador).get(), index + 1);
        }
    }

    #[test]
    fn top_n_is_a_prefix(scores in prop::collection::vec(0u64..50, 0..40), n in 0usize..15) {
        let ordered = rank(&snapshot(&scores));
        let top = top_n(&ordered, n);
        prop_assert_eq!(top.len(), n.min(ordered.len()));
        prop_assert_eq!(top, &ordered[..top.len()]);
    }

    #[test]
    fn tied_groups_ignore_group_order(
        (groups, shuffled) in prop::collection::btree_map(0u64..1_000, 1usize..4, 0..10)
            .prop_map(|sizes| tied_groups(&sizes))
            .prop_flat_map(|groups| (Just(groups.clone()), Just(groups).prop_shuffle()))
    ) {
        let input: Vec<Ambassador> = groups.concat();
        let reordered: Vec<Ambassador> = shuffled.concat();
        prop_assert_eq!(rank(&reordered), rank(&input));
    }
}
