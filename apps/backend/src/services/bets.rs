//! Bet placement.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::entities::games::Team;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::bets::{self, Bet, BetCreate};
use crate::repos::{accounts, games};

/// Input for bet placement
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceBet {
    pub account_id: i64,
    pub game_id: i64,
    pub team: Team,
    pub points: f64,
}

/// Debit the wager and record the bet.
///
/// Run inside a transaction: the debit and the insert form one unit of work.
/// The debit is conditional on the balance, so concurrent bets can never
/// overdraw an account.
pub async fn place_bet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: PlaceBet,
) -> Result<Bet, DomainError> {
    if !input.points.is_finite() || input.points <= 0.0 {
        return Err(DomainError::validation("points must be a positive number"));
    }

    let account = accounts::find_by_id(conn, input.account_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Account,
                format!("Account {} not found", input.account_id),
            )
        })?;

    if games::find_by_id(conn, input.game_id).await?.is_none() {
        return Err(DomainError::not_found(
            NotFoundKind::Game,
            format!("Game {} not found", input.game_id),
        ));
    }

    if !accounts::debit_points(conn, account.id, input.points).await? {
        return Err(DomainError::insufficient_balance(
            account.points,
            input.points,
        ));
    }

    let bet = bets::create_bet(
        conn,
        BetCreate {
            account_id: account.id,
            game_id: input.game_id,
            team: input.team,
            points: input.points,
        },
    )
    .await?;

    info!(
        bet_id = bet.id,
        account_id = bet.account_id,
        game_id = bet.game_id,
        team = bet.team.as_str(),
        points = bet.points,
        "bet placed"
    );
    Ok(bet)
}
