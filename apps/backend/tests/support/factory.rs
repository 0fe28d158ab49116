use backend::repos::accounts::{self, Account, AccountCreate};
use backend::repos::games::{self, Game, GameCreate, GameStatus};
use backend::AppError;
use backend_test_support::unique_helpers::unique_username;
use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

/// Insert an account with a unique username and the given balance.
pub async fn create_test_account(
    conn: &(impl ConnectionTrait + Send + Sync),
    prefix: &str,
    points: f64,
) -> Result<Account, AppError> {
    let dto = AccountCreate::new(unique_username(prefix), "secret").with_points(points);
    Ok(accounts::create_account(conn, dto).await?)
}

/// Insert a game directly, bypassing creation rules.
pub async fn create_test_game(
    conn: &(impl ConnectionTrait + Send + Sync),
    status: GameStatus,
) -> Result<Game, AppError> {
    let dto = GameCreate::new("Lions", "Tigers")
        .with_status(status)
        .starting_at(OffsetDateTime::now_utc());
    Ok(games::create_game(conn, dto).await?)
}

/// Insert a scheduled game starting at `start_time`.
pub async fn create_scheduled_game(
    conn: &(impl ConnectionTrait + Send + Sync),
    start_time: OffsetDateTime,
) -> Result<Game, AppError> {
    let dto = GameCreate::new("Hawks", "Eagles")
        .with_status(GameStatus::Scheduled)
        .starting_at(start_time);
    Ok(games::create_game(conn, dto).await?)
}
