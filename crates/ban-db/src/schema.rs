//! `bans` table schema

use sqlx::SqlitePool;
use tracing::instrument;

/// DDL for the `bans` table
///
/// `AUTOINCREMENT` keeps ids strictly increasing even if rows are removed
/// by something outside this crate.
pub const CREATE_BANS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS bans (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    target_id   BIGINT NOT NULL,
    admin_id    BIGINT,
    name        VARCHAR(128),
    start_date  DATETIME DEFAULT CURRENT_TIMESTAMP,
    stop_date   DATETIME,
    duration    INTEGER DEFAULT 0,
    reason      VARCHAR(256),
    ip_address  VARCHAR(32),
    server_id   INTEGER DEFAULT -1
)
";

/// Create the `bans` table if it is missing
///
/// An existing table is left untouched.
#[instrument(skip_all)]
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_BANS_TABLE).execute(pool).await?;
    Ok(())
}
