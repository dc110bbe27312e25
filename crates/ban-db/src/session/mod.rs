//! Scoped transactional sessions
//!
//! A session is one pooled connection with an open transaction. The unit of
//! work runs inside it; success commits, any error rolls back and is returned
//! as-is. The connection goes back to the pool on every exit path, since the
//! transaction guard is consumed by commit/rollback or dropped on early return.

use futures::future::BoxFuture;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, warn};

/// Run `work` inside a transaction
///
/// ```rust,ignore
/// let id = session_scope(&pool, move |conn| {
///     Box::pin(async move { SqliteBanRepository::insert(conn, &ban).await.map_err(StoreError::from) })
/// })
/// .await?;
/// ```
pub async fn session_scope<T, E, F>(pool: &SqlitePool, work: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, E>>,
    E: From<sqlx::Error>,
{
    let mut tx = pool.begin().await?;

    match work(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            debug!("Session committed");
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, "Session rollback failed");
            }
            debug!("Session rolled back");
            Err(err)
        }
    }
}
