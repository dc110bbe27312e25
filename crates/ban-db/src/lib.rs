//! # ban-db
//!
//! Persistence layer for player ban records, backed by SQLite via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - The `bans` table schema (created on first use, never migrated)
//! - Scoped transactional sessions (commit on success, rollback on error)
//! - [`BanStore`], whose only write path is [`BanStore::add_ban`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ban_core::PlayerIndex;
//! use ban_db::{BanRequest, BanStore};
//!
//! async fn example(directory: impl ban_core::PlayerDirectory) -> Result<(), ban_db::StoreError> {
//!     let store = BanStore::connect("sqlite://bans.db", directory).await?;
//!
//!     let request = BanRequest::new(PlayerIndex::new(3))
//!         .duration(3600)
//!         .admin(PlayerIndex::new(1))
//!         .reason("aimbot");
//!     store.add_ban(request).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use error::{StoreError, StoreResult};
pub use pool::{create_pool, SqlitePool};
pub use repositories::SqliteBanRepository;
pub use schema::ensure_schema;
pub use session::session_scope;
pub use store::{BanRequest, BanStore};
