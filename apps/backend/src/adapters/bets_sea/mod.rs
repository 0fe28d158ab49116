//! SeaORM adapter for bets - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::bets;

pub mod dto;

pub use dto::BetCreate;

pub async fn create_bet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BetCreate,
) -> Result<bets::Model, sea_orm::DbErr> {
    let bet_active = bets::ActiveModel {
        id: NotSet,
        account_id: Set(dto.account_id),
        game_id: Set(dto.game_id),
        team: Set(dto.team),
        points: Set(dto.points),
        placed_at: Set(time::OffsetDateTime::now_utc()),
    };

    bet_active.insert(conn).await
}

/// Bets of one account, newest first.
pub async fn list_by_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    account_id: i64,
) -> Result<Vec<bets::Model>, sea_orm::DbErr> {
    bets::Entity::find()
        .filter(bets::Column::AccountId.eq(account_id))
        .order_by_desc(bets::Column::PlacedAt)
        .order_by_desc(bets::Column::Id)
        .all(conn)
        .await
}
