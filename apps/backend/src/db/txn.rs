use futures_util::future::BoxFuture;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::error::AppError;

/// Run `body` inside one transaction: commit on `Ok`, roll back on `Err`.
///
/// A failed rollback is logged; the caller still sees the body's error.
pub async fn with_txn<R, F>(db: &DatabaseConnection, body: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<R, AppError>>,
{
    let txn = db.begin().await?;

    let err = match body(&txn).await {
        Ok(value) => return txn.commit().await.map(|()| value).map_err(AppError::from),
        Err(err) => err,
    };

    if let Err(rollback_err) = txn.rollback().await {
        warn!(error = %rollback_err, "rollback failed");
    }
    Err(err)
}
