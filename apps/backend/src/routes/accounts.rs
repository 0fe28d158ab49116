//! Account HTTP routes (`/users`).

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::bets::BetResponse;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{AccountId, ValidatedJson};
use crate::repos::accounts::Account;
use crate::services::accounts as accounts_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub points: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            points: account.points,
            created_at: account.created_at,
        }
    }
}

/// POST /users
async fn create_account(
    body: ValidatedJson<CreateAccountRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let CreateAccountRequest { username, password } = body.into_inner();

    let account = with_txn(db, move |txn| {
        Box::pin(async move {
            Ok(accounts_service::create_account(txn, &username, &password).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}

/// GET /users/{account_id}
async fn get_account(
    account_id: AccountId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let account = accounts_service::get_account(db, account_id.0).await?;
    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

/// GET /users/{account_id}/bets
async fn list_account_bets(
    account_id: AccountId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let bets = accounts_service::list_bets(db, account_id.0).await?;
    let body: Vec<BetResponse> = bets.into_iter().map(BetResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(["/users", "/users/"]).route(web::post().to(create_account)))
        .service(
            web::resource(["/users/{account_id}", "/users/{account_id}/"])
                .route(web::get().to(get_account)),
        )
        .service(
            web::resource(["/users/{account_id}/bets", "/users/{account_id}/bets/"])
                .route(web::get().to(list_account_bets)),
        );
}
