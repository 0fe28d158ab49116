//! Account repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::accounts_sea as accounts_adapter;
use crate::errors::domain::DomainError;

pub use accounts_adapter::AccountCreate;

/// Account domain model; the password never leaves the adapter layer
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub points: f64,
    pub created_at: time::OffsetDateTime,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    account_id: i64,
) -> Result<Option<Account>, DomainError> {
    let account = accounts_adapter::find_by_id(conn, account_id).await?;
    Ok(account.map(Account::from))
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<Account>, DomainError> {
    let account = accounts_adapter::find_by_username(conn, username).await?;
    Ok(account.map(Account::from))
}

pub async fn create_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AccountCreate,
) -> Result<Account, DomainError> {
    let account = accounts_adapter::create_account(conn, dto).await?;
    Ok(Account::from(account))
}

/// Conditional debit; `false` means the balance did not cover `points`.
pub async fn debit_points<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    account_id: i64,
    points: f64,
) -> Result<bool, DomainError> {
    Ok(accounts_adapter::debit_points(conn, account_id, points).await?)
}

impl From<crate::entities::accounts::Model> for Account {
    fn from(model: crate::entities::accounts::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            points: model.points,
            created_at: model.created_at,
        }
    }
}
