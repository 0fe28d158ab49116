use crate::domain::rules::END_THRESHOLD;
use crate::entities::games::Team;

/// Running score of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub team_1: i32,
    pub team_2: i32,
}

impl Score {
    pub fn new(team_1: i32, team_2: i32) -> Self {
        Self { team_1, team_2 }
    }

    /// Strict leader, if any
    pub fn leader(&self) -> Option<Team> {
        match self.team_1.cmp(&self.team_2) {
            std::cmp::Ordering::Greater => Some(Team::Team1),
            std::cmp::Ordering::Less => Some(Team::Team2),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn reached_threshold(&self) -> bool {
        self.team_1 >= END_THRESHOLD || self.team_2 >= END_THRESHOLD
    }
}

/// Points added to each side in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    pub team_1: i32,
    pub team_2: i32,
}

impl ScoreDelta {
    pub fn new(team_1: i32, team_2: i32) -> Self {
        Self { team_1, team_2 }
    }
}

/// Outcome of applying one tick to a live game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    InProgress(Score),
    Finished { score: Score, winner: Team },
}

impl Advance {
    pub fn score(&self) -> Score {
        match self {
            Advance::InProgress(score) => *score,
            Advance::Finished { score, .. } => *score,
        }
    }

    pub fn winner(&self) -> Option<Team> {
        match self {
            Advance::InProgress(_) => None,
            Advance::Finished { winner, .. } => Some(*winner),
        }
    }
}

/// Apply one tick of score deltas.
///
/// The game finishes when either side is at or above the threshold and one
/// side is strictly ahead. A tie at or above the threshold stays live.
pub fn advance(score: Score, delta: ScoreDelta) -> Advance {
    let next = Score::new(score.team_1 + delta.team_1, score.team_2 + delta.team_2);
    match (next.reached_threshold(), next.leader()) {
        (true, Some(winner)) => Advance::Finished {
            score: next,
            winner,
        },
        _ => Advance::InProgress(next),
    }
}
