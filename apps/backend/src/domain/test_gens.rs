//! Proptest generators for scoring types.

use proptest::prelude::*;

use crate::domain::rules::SCORE_INCREMENTS;
use crate::domain::scoring::{Score, ScoreDelta};

pub fn increment() -> impl Strategy<Value = i32> {
    prop::sample::select(SCORE_INCREMENTS.to_vec())
}

pub fn delta() -> impl Strategy<Value = ScoreDelta> {
    (increment(), increment()).prop_map(|(a, b)| ScoreDelta::new(a, b))
}

/// Any live (pre-threshold) score
pub fn live_score() -> impl Strategy<Value = Score> {
    (0..20i32, 0..20i32).prop_map(|(a, b)| Score::new(a, b))
}

pub fn deltas(max: usize) -> impl Strategy<Value = Vec<ScoreDelta>> {
    prop::collection::vec(delta(), 1..=max)
}
