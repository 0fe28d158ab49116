//! Bet HTTP routes (`/bets`).

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::parse_field;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::entities::games::Team;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::bets::Bet;
use crate::services::bets::{self as bets_service, PlaceBet};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlaceBetRequest {
    #[serde(alias = "account_id")]
    pub user_id: i64,
    pub game_id: i64,
    pub team: String,
    pub points: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BetResponse {
    pub id: i64,
    pub user_id: i64,
    pub game_id: i64,
    pub team: Team,
    pub points: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub placed_at: OffsetDateTime,
}

impl From<Bet> for BetResponse {
    fn from(bet: Bet) -> Self {
        Self {
            id: bet.id,
            user_id: bet.account_id,
            game_id: bet.game_id,
            team: bet.team,
            points: bet.points,
            placed_at: bet.placed_at,
        }
    }
}

/// POST /bets
async fn place_bet(
    body: ValidatedJson<PlaceBetRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = body.into_inner();

    let input = PlaceBet {
        account_id: req.user_id,
        game_id: req.game_id,
        team: parse_field::<Team>("team", &req.team)?,
        points: req.points,
    };

    let bet = with_txn(db, move |txn| {
        Box::pin(async move { Ok(bets_service::place_bet(txn, input).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(BetResponse::from(bet)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(["/bets", "/bets/"]).route(web::post().to(place_bet)));
}
