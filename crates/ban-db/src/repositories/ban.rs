//! SQLite queries for the bans table

use sqlx::{SqliteConnection, SqlitePool};
use tracing::instrument;

use ban_core::{BanId, BanRecord, NewBan, SteamId};

use crate::models::BanModel;

impl TryFrom<BanModel> for BanRecord {
    type Error = sqlx::Error;

    /// Rows written by other tools may hold values outside the entity's ranges
    fn try_from(model: BanModel) -> Result<Self, Self::Error> {
        let duration =
            u32::try_from(model.duration).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let server_id =
            i32::try_from(model.server_id).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(BanRecord {
            id: BanId::new(model.id),
            target_id: SteamId::from_db(model.target_id),
            admin_id: model.admin_id.map(SteamId::from_db),
            name: model.name,
            start_date: model.start_date,
            stop_date: model.stop_date,
            duration,
            reason: model.reason,
            ip_address: model.ip_address,
            server_id,
        })
    }
}

/// SQLite access to the bans table
#[derive(Clone)]
pub struct SqliteBanRepository {
    pool: SqlitePool,
}

impl SqliteBanRepository {
    /// Create a new SqliteBanRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new ban on an open connection and return its id
    ///
    /// Only the columns a `NewBan` carries are written; the rest take their
    /// column defaults.
    #[instrument(skip(conn, ban), fields(target_id = %ban.target_id))]
    pub async fn insert(conn: &mut SqliteConnection, ban: &NewBan) -> Result<BanId, sqlx::Error> {
        let result = sqlx::query(
            r"
            INSERT INTO bans (target_id, admin_id, duration, reason)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(ban.target_id.to_db())
        .bind(ban.admin_id.map(SteamId::to_db))
        .bind(i64::from(ban.duration))
        .bind(ban.reason.as_deref())
        .execute(&mut *conn)
        .await?;

        Ok(BanId::new(result.last_insert_rowid()))
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: BanId) -> Result<Option<BanRecord>, sqlx::Error> {
        let result = sqlx::query_as::<_, BanModel>(
            r"
            SELECT id, target_id, admin_id, name, start_date, stop_date,
                   duration, reason, ip_address, server_id
            FROM bans
            WHERE id = ?1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await?;

        result.map(BanRecord::try_from).transpose()
    }

    /// All bans recorded against a player, newest first
    #[instrument(skip(self))]
    pub async fn find_by_target(&self, target_id: SteamId) -> Result<Vec<BanRecord>, sqlx::Error> {
        let results = sqlx::query_as::<_, BanModel>(
            r"
            SELECT id, target_id, admin_id, name, start_date, stop_date,
                   duration, reason, ip_address, server_id
            FROM bans
            WHERE target_id = ?1
            ORDER BY id DESC
            ",
        )
        .bind(target_id.to_db())
        .fetch_all(&self.pool)
        .await?;

        results.into_iter().map(BanRecord::try_from).collect()
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bans")
            .fetch_one(&self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ensure_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    fn steam(account: &str) -> SteamId {
        SteamId::parse(account).unwrap()
    }

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteBanRepository>();
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let pool = memory_pool().await;
        let repo = SqliteBanRepository::new(pool.clone());

        let ban = NewBan {
            target_id: steam("STEAM_0:1:500"),
            admin_id: Some(steam("STEAM_0:0:7")),
            duration: 600,
            reason: Some("teamkilling".to_string()),
        };

        let mut conn = pool.acquire().await.unwrap();
        let id = SqliteBanRepository::insert(&mut conn, &ban).await.unwrap();
        drop(conn);

        let record = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.target_id, ban.target_id);
        assert_eq!(record.admin_id, ban.admin_id);
        assert_eq!(record.duration, 600);
        assert_eq!(record.reason.as_deref(), Some("teamkilling"));
        assert_eq!(record.server_id, BanRecord::UNKNOWN_SERVER_ID);
        assert!(record.name.is_none());
        assert!(record.ip_address.is_none());
        assert!(record.stop_date.is_none());

        assert!(repo.find_by_id(BanId::new(9999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_target_newest_first() {
        let pool = memory_pool().await;
        let repo = SqliteBanRepository::new(pool.clone());
        let target = steam("STEAM_0:0:900");
        let other = steam("STEAM_0:0:901");

        let mut conn = pool.acquire().await.unwrap();
        let first = SqliteBanRepository::insert(&mut conn, &NewBan::new(target))
            .await
            .unwrap();
        SqliteBanRepository::insert(&mut conn, &NewBan::new(other))
            .await
            .unwrap();
        let second = SqliteBanRepository::insert(&mut conn, &NewBan::new(target))
            .await
            .unwrap();
        drop(conn);

        let ids: Vec<BanId> = repo
            .find_by_target(target)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![second, first]);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_out_of_range_row_is_a_decode_error() {
        let pool = memory_pool().await;
        let repo = SqliteBanRepository::new(pool.clone());
        let target = steam("STEAM_0:1:77");

        let negative = sqlx::query("INSERT INTO bans (target_id, duration) VALUES (?1, -5)")
            .bind(target.to_db())
            .execute(&pool)
            .await
            .unwrap()
            .last_insert_rowid();
        let oversized = sqlx::query("INSERT INTO bans (target_id, server_id) VALUES (?1, ?2)")
            .bind(target.to_db())
            .bind(i64::from(i32::MAX) + 1)
            .execute(&pool)
            .await
            .unwrap()
            .last_insert_rowid();

        for id in [negative, oversized] {
            let result = repo.find_by_id(BanId::new(id)).await;
            assert!(matches!(result, Err(sqlx::Error::Decode(_))), "{result:?}");
        }
        assert!(matches!(
            repo.find_by_target(target).await,
            Err(sqlx::Error::Decode(_))
        ));
    }
}
