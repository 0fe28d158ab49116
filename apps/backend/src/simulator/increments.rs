//! Sources of per-tick score increments.

use rand::prelude::*;

use crate::domain::rules::SCORE_INCREMENTS;
use crate::domain::scoring::ScoreDelta;

/// Supplies score increments to the simulator, one per side per tick.
pub trait IncrementSource: Send {
    fn next_increment(&mut self) -> i32;

    fn next_delta(&mut self) -> ScoreDelta {
        let team_1 = self.next_increment();
        let team_2 = self.next_increment();
        ScoreDelta::new(team_1, team_2)
    }
}

/// Uniform draw over `SCORE_INCREMENTS`.
pub struct RandomIncrements {
    rng: StdRng,
}

impl RandomIncrements {
    /// `Some(seed)` gives a reproducible sequence; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl IncrementSource for RandomIncrements {
    fn next_increment(&mut self) -> i32 {
        SCORE_INCREMENTS[self.rng.random_range(0..SCORE_INCREMENTS.len())]
    }
}

/// Replays a fixed list of deltas, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedIncrements {
    values: Vec<i32>,
    pos: usize,
}

impl ScriptedIncrements {
    pub fn from_deltas(deltas: &[(i32, i32)]) -> Self {
        let values = deltas.iter().flat_map(|&(a, b)| [a, b]).collect();
        Self { values, pos: 0 }
    }
}

impl IncrementSource for ScriptedIncrements {
    fn next_increment(&mut self) -> i32 {
        if self.values.is_empty() {
            return SCORE_INCREMENTS[0];
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}
