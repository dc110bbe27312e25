//! Ban store - owns the pool and schema, exposes the single write path

use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use ban_common::StoreConfig;
use ban_core::{BanId, BanRecord, IdentityResolver, NewBan, PlayerDirectory, SteamId};

use crate::error::{StoreError, StoreResult};
use crate::pool::create_pool;
use crate::repositories::SqliteBanRepository;
use crate::schema::ensure_schema;
use crate::session::session_scope;
use crate::store::BanRequest;

/// Persistent store of player bans
///
/// Ready as soon as construction returns: the pool is open and the `bans`
/// table exists. Cloning shares the pool. There is no explicit close; the
/// pool shuts down when the last clone is dropped.
#[derive(Clone)]
pub struct BanStore<D> {
    repo: SqliteBanRepository,
    pool: SqlitePool,
    resolver: IdentityResolver<D>,
}

impl<D: PlayerDirectory> BanStore<D> {
    /// Connect with default pool settings
    pub async fn connect(database_uri: &str, directory: D) -> StoreResult<Self> {
        Self::connect_with_config(&StoreConfig::new(database_uri), directory).await
    }

    #[instrument(skip_all)]
    pub async fn connect_with_config(config: &StoreConfig, directory: D) -> StoreResult<Self> {
        let pool = create_pool(config).await?;
        Self::from_pool(pool, directory).await
    }

    /// Wrap an existing pool, creating the `bans` table if needed
    pub async fn from_pool(pool: SqlitePool, directory: D) -> StoreResult<Self> {
        ensure_schema(&pool).await?;
        info!("Ban store ready");

        Ok(Self {
            repo: SqliteBanRepository::new(pool.clone()),
            pool,
            resolver: IdentityResolver::new(directory),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Record a ban
    ///
    /// Both identities are resolved before anything touches the database, so
    /// a resolution failure never opens a session. The insert runs in its own
    /// transaction: either one row is committed or none is.
    #[instrument(
        skip(self, request),
        fields(target = %request.target, admin = ?request.admin, duration = request.duration)
    )]
    pub async fn add_ban(&self, request: BanRequest) -> StoreResult<BanId> {
        let target_id = self.resolver.resolve(request.target)?;
        let admin_id = self.resolver.resolve_admin(request.admin)?;

        let ban = NewBan {
            target_id,
            admin_id,
            duration: request.duration,
            reason: request.reason,
        };

        let id = session_scope(&self.pool, move |conn| {
            Box::pin(async move {
                SqliteBanRepository::insert(conn, &ban)
                    .await
                    .map_err(StoreError::from)
            })
        })
        .await?;

        debug!(ban_id = %id, %target_id, "Ban recorded");
        Ok(id)
    }

    pub async fn find_ban(&self, id: BanId) -> StoreResult<Option<BanRecord>> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Every ban recorded against `target_id`, newest first
    pub async fn bans_for_target(&self, target_id: SteamId) -> StoreResult<Vec<BanRecord>> {
        Ok(self.repo.find_by_target(target_id).await?)
    }

    pub async fn count_bans(&self) -> StoreResult<i64> {
        Ok(self.repo.count().await?)
    }
}
