//! Scoring rules for simulated games. No I/O; the simulator feeds rows
//! through [`advance`] and persists whatever it returns.

pub mod rules;
pub mod scoring;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_scoring;

pub use rules::{END_THRESHOLD, SCORE_INCREMENTS};
pub use scoring::{advance, Advance, Score, ScoreDelta};
