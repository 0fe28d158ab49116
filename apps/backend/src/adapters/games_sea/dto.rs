//! DTOs for games_sea adapter.

use time::OffsetDateTime;

use crate::entities::games::{GameStatus, Team};

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub team_1: String,
    pub team_2: String,
    pub status: GameStatus,
    pub start_time: OffsetDateTime,
}

impl GameCreate {
    /// A game that is live immediately
    pub fn new(team_1: impl Into<String>, team_2: impl Into<String>) -> Self {
        Self {
            team_1: team_1.into(),
            team_2: team_2.into(),
            status: GameStatus::InProgress,
            start_time: OffsetDateTime::now_utc(),
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }

    pub fn starting_at(mut self, start_time: OffsetDateTime) -> Self {
        self.start_time = start_time;
        self
    }
}

/// Scores and outcome written by one simulator step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameScoreUpdate {
    pub id: i64,
    pub score_team_1: i32,
    pub score_team_2: i32,
    pub status: GameStatus,
    pub result: Option<Team>,
}
