//! Identity resolution errors

use thiserror::Error;

use crate::value_objects::{PlayerIndex, SteamIdParseError};

/// A player reference could not be turned into a durable identity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityResolutionError {
    #[error("No connected player at index {0}")]
    PlayerNotFound(PlayerIndex),

    #[error("Malformed identity {unique_id:?} for player {index}: {source}")]
    MalformedIdentity {
        index: PlayerIndex,
        unique_id: String,
        #[source]
        source: SteamIdParseError,
    },
}

impl IdentityResolutionError {
    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::PlayerNotFound(_) => "UNKNOWN_PLAYER",
            Self::MalformedIdentity { .. } => "MALFORMED_IDENTITY",
        }
    }
}
