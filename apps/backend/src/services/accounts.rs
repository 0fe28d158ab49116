//! Account services.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::accounts::{self, Account, AccountCreate};
use crate::repos::bets::{self, Bet};

pub const MAX_USERNAME_LEN: usize = 64;

/// Register a new account with the default balance.
pub async fn create_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password: &str,
) -> Result<Account, DomainError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(DomainError::validation("username must not be empty"));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(DomainError::validation(format!(
            "username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }
    if password.is_empty() {
        return Err(DomainError::validation("password must not be empty"));
    }

    // Early check gives a clean error; the unique index still guards races.
    if accounts::find_by_username(conn, username).await?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateUsername,
            "Username already registered",
        ));
    }

    let account = accounts::create_account(conn, AccountCreate::new(username, password)).await?;
    info!(account_id = account.id, "account created");
    Ok(account)
}

pub async fn get_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    account_id: i64,
) -> Result<Account, DomainError> {
    accounts::find_by_id(conn, account_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Account,
            format!("Account {account_id} not found"),
        )
    })
}

/// Bets placed by an account, newest first.
pub async fn list_bets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    account_id: i64,
) -> Result<Vec<Bet>, DomainError> {
    get_account(conn, account_id).await?;
    bets::list_by_account(conn, account_id).await
}
