//! SeaORM adapter for games - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::games::{self, GameStatus};

pub mod dto;

pub use dto::{GameCreate, GameScoreUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// List games ordered by id, optionally restricted to one status.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    status: Option<GameStatus>,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    let mut query = games::Entity::find().order_by_asc(games::Column::Id);
    if let Some(status) = status {
        query = query.filter(games::Column::Status.eq(status));
    }
    query.all(conn).await
}

pub async fn find_by_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    status: GameStatus,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    list(conn, Some(status)).await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        team_1: Set(dto.team_1),
        team_2: Set(dto.team_2),
        score_team_1: Set(0),
        score_team_2: Set(0),
        status: Set(dto.status),
        result: Set(None),
        start_time: Set(dto.start_time),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

/// Move every scheduled game whose start time has passed to in_progress.
///
/// Returns the number of promoted games.
pub async fn promote_due<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    now: OffsetDateTime,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::update_many()
        .col_expr(games::Column::Status, Expr::val(GameStatus::InProgress).into())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .filter(games::Column::Status.eq(GameStatus::Scheduled))
        .filter(games::Column::StartTime.lte(now))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Write new scores (and possibly the terminal outcome) for a live game.
///
/// Guarded on `status = in_progress`: a finished row is never rewritten.
/// Returns `false` when no row matched.
pub async fn update_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameScoreUpdate,
) -> Result<bool, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = games::Entity::update_many()
        .col_expr(games::Column::ScoreTeam1, Expr::val(dto.score_team_1).into())
        .col_expr(games::Column::ScoreTeam2, Expr::val(dto.score_team_2).into())
        .col_expr(games::Column::Status, Expr::val(dto.status).into())
        .col_expr(games::Column::Result, Expr::val(dto.result).into())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .filter(games::Column::Id.eq(dto.id))
        .filter(games::Column::Status.eq(GameStatus::InProgress))
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}
