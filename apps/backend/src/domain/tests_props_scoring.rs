//! Property tests for score advancement (pure domain, no DB).
//!
//! Properties tested:
//! - Scores never decrease and grow only by allowed increments
//! - A finished outcome always has a strict winner at or above the threshold
//! - Live outcomes never have a strict leader at or above the threshold
//! - Without ties, a game finishes within the bounded number of ticks

use proptest::prelude::*;

use crate::domain::rules::{is_valid_increment, MAX_TICKS_TO_THRESHOLD};
use crate::domain::scoring::{advance, Advance, Score};
use crate::domain::test_gens;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: each side grows by exactly one allowed increment per tick
    #[test]
    fn prop_scores_grow_by_allowed_increments(
        start in test_gens::live_score(),
        delta in test_gens::delta(),
    ) {
        let next = advance(start, delta).score();
        let grew_1 = next.team_1 - start.team_1;
        let grew_2 = next.team_2 - start.team_2;
        prop_assert!(is_valid_increment(grew_1));
        prop_assert!(is_valid_increment(grew_2));
    }

    /// Property: a finished outcome is decided by the strict leader
    #[test]
    fn prop_finished_has_strict_winner(
        start in test_gens::live_score(),
        delta in test_gens::delta(),
    ) {
        match advance(start, delta) {
            Advance::Finished { score, winner } => {
                prop_assert!(score.reached_threshold());
                prop_assert_eq!(score.leader(), Some(winner));
            }
            Advance::InProgress(score) => {
                prop_assert!(!score.reached_threshold() || score.leader().is_none());
            }
        }
    }

    /// Property: any tick sequence is monotonic and stops at the first finish
    #[test]
    fn prop_sequence_is_monotonic(deltas in test_gens::deltas(12)) {
        let mut score = Score::default();
        let mut finished = false;
        for delta in deltas {
            prop_assert!(!finished);
            let out = advance(score, delta);
            let next = out.score();
            prop_assert!(next.team_1 >= score.team_1);
            prop_assert!(next.team_2 >= score.team_2);
            score = next;
            finished = matches!(out, Advance::Finished { .. });
            if finished {
                break;
            }
        }
    }

    /// Property: when no tick ends in a tie, the game finishes within the bound
    #[test]
    fn prop_finishes_within_bound_without_ties(
        deltas in prop::collection::vec(test_gens::delta(), MAX_TICKS_TO_THRESHOLD as usize),
    ) {
        let mut score = Score::default();
        let mut finished = false;
        for delta in deltas {
            match advance(score, delta) {
                Advance::Finished { .. } => {
                    finished = true;
                    break;
                }
                Advance::InProgress(next) => {
                    // Live at or above the threshold means a tie; out of scope here
                    prop_assume!(!next.reached_threshold());
                    score = next;
                }
            }
        }
        prop_assert!(finished);
    }
}
