//! Store error types

use ban_core::IdentityResolutionError;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the ban store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Target or admin could not be resolved; nothing was written
    #[error("Identity resolution failed: {0}")]
    Identity(#[from] IdentityResolutionError),

    /// The database operation failed; any open transaction was rolled back
    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl StoreError {
    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Identity(e) => e.code(),
            Self::Persistence(_) => "DATABASE_ERROR",
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}
