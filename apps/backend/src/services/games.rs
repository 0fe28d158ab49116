//! Game services. Status and scores are only written by the simulator after creation.

use sea_orm::ConnectionTrait;
use time::{OffsetDateTime, UtcOffset};
use tracing::info;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::{self, Game, GameCreate, GameStatus};

/// Input for game creation
#[derive(Debug, Clone, Default)]
pub struct NewGame {
    pub team_1: String,
    pub team_2: String,
    pub start_time: Option<OffsetDateTime>,
    pub status: Option<GameStatus>,
}

impl NewGame {
    pub fn new(team_1: impl Into<String>, team_2: impl Into<String>) -> Self {
        Self {
            team_1: team_1.into(),
            team_2: team_2.into(),
            ..Self::default()
        }
    }
}

/// Resolve the initial status and start time of a new game.
///
/// An explicit status wins (terminal status is rejected). Otherwise a start
/// time in the future makes the game scheduled and anything else starts it
/// immediately.
pub fn initial_status(
    start_time: Option<OffsetDateTime>,
    status: Option<GameStatus>,
    now: OffsetDateTime,
) -> Result<(GameStatus, OffsetDateTime), DomainError> {
    let start = start_time.unwrap_or(now).to_offset(UtcOffset::UTC);
    match status {
        Some(GameStatus::Finished) => Err(DomainError::validation(
            "games cannot be created as finished",
        )),
        Some(explicit) => Ok((explicit, start)),
        None if start > now => Ok((GameStatus::Scheduled, start)),
        None => Ok((GameStatus::InProgress, start)),
    }
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: NewGame,
) -> Result<Game, DomainError> {
    let team_1 = input.team_1.trim();
    let team_2 = input.team_2.trim();
    if team_1.is_empty() || team_2.is_empty() {
        return Err(DomainError::validation("team names must not be empty"));
    }

    let (status, start_time) =
        initial_status(input.start_time, input.status, OffsetDateTime::now_utc())?;

    let game = games::create_game(
        conn,
        GameCreate::new(team_1, team_2)
            .with_status(status)
            .starting_at(start_time),
    )
    .await?;

    info!(game_id = game.id, status = status.as_str(), "game created");
    Ok(game)
}

pub async fn get_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    games::find_by_id(conn, game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}

pub async fn list_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    status: Option<GameStatus>,
) -> Result<Vec<Game>, DomainError> {
    games::list(conn, status).await
}
