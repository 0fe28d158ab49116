//! SeaORM adapter for accounts - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::accounts;

pub mod dto;

pub use dto::AccountCreate;

/// Starting balance for new accounts
pub const DEFAULT_POINTS: f64 = 100.0;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    account_id: i64,
) -> Result<Option<accounts::Model>, sea_orm::DbErr> {
    accounts::Entity::find_by_id(account_id).one(conn).await
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<accounts::Model>, sea_orm::DbErr> {
    accounts::Entity::find()
        .filter(accounts::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn create_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AccountCreate,
) -> Result<accounts::Model, sea_orm::DbErr> {
    let account_active = accounts::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
        password: Set(dto.password),
        points: Set(dto.points),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    account_active.insert(conn).await
}

/// Atomically subtract `points` from the balance if it covers the amount.
///
/// Returns `false` when the account is missing or the balance is short; the
/// row is left untouched in that case.
pub async fn debit_points<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    account_id: i64,
    points: f64,
) -> Result<bool, sea_orm::DbErr> {
    let result = accounts::Entity::update_many()
        .col_expr(
            accounts::Column::Points,
            Expr::col(accounts::Column::Points).sub(points),
        )
        .filter(accounts::Column::Id.eq(account_id))
        .filter(accounts::Column::Points.gte(points))
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}
