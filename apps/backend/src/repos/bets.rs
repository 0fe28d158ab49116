//! Bet repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::bets_sea as bets_adapter;
pub use crate::adapters::bets_sea::BetCreate;
use crate::entities::games::Team;
use crate::errors::domain::DomainError;

/// Bet domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Bet {
    pub id: i64,
    pub account_id: i64,
    pub game_id: i64,
    pub team: Team,
    pub points: f64,
    pub placed_at: time::OffsetDateTime,
}

pub async fn create_bet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BetCreate,
) -> Result<Bet, DomainError> {
    let bet = bets_adapter::create_bet(conn, dto).await?;
    Ok(Bet::from(bet))
}

pub async fn list_by_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    account_id: i64,
) -> Result<Vec<Bet>, DomainError> {
    let bets = bets_adapter::list_by_account(conn, account_id).await?;
    Ok(bets.into_iter().map(Bet::from).collect())
}

impl From<crate::entities::bets::Model> for Bet {
    fn from(model: crate::entities::bets::Model) -> Self {
        Self {
            id: model.id,
            account_id: model.account_id,
            game_id: model.game_id,
            team: model.team,
            points: model.points,
            placed_at: model.placed_at,
        }
    }
}
