//! Game repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
pub use crate::adapters::games_sea::{GameCreate, GameScoreUpdate};
use crate::domain::scoring::Score;
pub use crate::entities::games::{GameStatus, Team};
use crate::errors::domain::DomainError;

/// Game domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub team_1: String,
    pub team_2: String,
    pub score_team_1: i32,
    pub score_team_2: i32,
    pub status: GameStatus,
    pub result: Option<Team>,
    pub start_time: OffsetDateTime,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Game {
    pub fn score(&self) -> Score {
        Score::new(self.score_team_1, self.score_team_2)
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    status: Option<GameStatus>,
) -> Result<Vec<Game>, DomainError> {
    let games = games_adapter::list(conn, status).await?;
    Ok(games.into_iter().map(Game::from).collect())
}

pub async fn find_by_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    status: GameStatus,
) -> Result<Vec<Game>, DomainError> {
    let games = games_adapter::find_by_status(conn, status).await?;
    Ok(games.into_iter().map(Game::from).collect())
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<Game, DomainError> {
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

pub async fn promote_due<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    now: OffsetDateTime,
) -> Result<u64, DomainError> {
    Ok(games_adapter::promote_due(conn, now).await?)
}

pub async fn update_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameScoreUpdate,
) -> Result<bool, DomainError> {
    Ok(games_adapter::update_scores(conn, dto).await?)
}

impl From<crate::entities::games::Model> for Game {
    fn from(model: crate::entities::games::Model) -> Self {
        Self {
            id: model.id,
            team_1: model.team_1,
            team_2: model.team_2,
            score_team_1: model.score_team_1,
            score_team_2: model.score_team_2,
            status: model.status,
            result: model.result,
            start_time: model.start_time,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
