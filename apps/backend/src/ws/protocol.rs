use serde::{Deserialize, Serialize};

use crate::entities::games::{GameStatus, Team};
use crate::errors::ErrorCode;
use crate::repos::games::Game;

/// Messages pushed to live update subscribers
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    Snapshot(GameSnapshot),
    Error { code: ErrorCode, message: String },
}

/// Point-in-time view of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: i64,
    pub team_1: String,
    pub team_2: String,
    pub score_team_1: i32,
    pub score_team_2: i32,
    pub status: GameStatus,
    pub result: Option<Team>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id,
            team_1: game.team_1.clone(),
            team_2: game.team_2.clone(),
            score_team_1: game.score_team_1,
            score_team_2: game.score_team_2,
            status: game.status,
            result: game.result,
        }
    }
}
