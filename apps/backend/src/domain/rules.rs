/// Values a single side's score may grow by in one tick.
pub const SCORE_INCREMENTS: [i32; 2] = [3, 7];

/// A game ends once either side reaches this score with a strict leader.
pub const END_THRESHOLD: i32 = 20;

/// Upper bound on ticks before a live game finishes, assuming no endless ties.
/// ceil(END_THRESHOLD / min increment).
pub const MAX_TICKS_TO_THRESHOLD: u32 =
    ((END_THRESHOLD + SCORE_INCREMENTS[0] - 1) / SCORE_INCREMENTS[0]) as u32;

pub fn is_valid_increment(value: i32) -> bool {
    SCORE_INCREMENTS.contains(&value)
}
