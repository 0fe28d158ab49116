//! Game HTTP routes (`/games`).

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::parse_field;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::entities::games::{GameStatus, Team};
use crate::error::AppError;
use crate::extractors::{GameId, ValidatedJson};
use crate::repos::games::Game;
use crate::services::games::{self as games_service, NewGame};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub team_1: String,
    pub team_2: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListGamesQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: i64,
    pub team_1: String,
    pub team_2: String,
    pub score_team_1: i32,
    pub score_team_2: i32,
    pub status: GameStatus,
    pub result: Option<Team>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            team_1: game.team_1,
            team_2: game.team_2,
            score_team_1: game.score_team_1,
            score_team_2: game.score_team_2,
            status: game.status,
            result: game.result,
            start_time: game.start_time,
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}

/// POST /games
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = body.into_inner();

    let status = req
        .status
        .as_deref()
        .map(|raw| parse_field::<GameStatus>("status", raw))
        .transpose()?;

    let input = NewGame {
        team_1: req.team_1,
        team_2: req.team_2,
        start_time: req.start_time,
        status,
    };

    let game = with_txn(db, move |txn| {
        Box::pin(async move { Ok(games_service::create_game(txn, input).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(GameResponse::from(game)))
}

/// GET /games?status=
async fn list_games(
    query: web::Query<ListGamesQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let status = query
        .status
        .as_deref()
        .map(|raw| parse_field::<GameStatus>("status", raw))
        .transpose()?;

    let games = games_service::list_games(db, status).await?;
    let body: Vec<GameResponse> = games.into_iter().map(GameResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let game = games_service::get_game(db, game_id.0).await?;
    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/games", "/games/"])
            .route(web::post().to(create_game))
            .route(web::get().to(list_games)),
    )
    .service(
        web::resource(["/games/{game_id}", "/games/{game_id}/"]).route(web::get().to(get_game)),
    );
}
