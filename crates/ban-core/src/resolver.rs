//! Identity resolution - transient player index to durable SteamID

use crate::error::IdentityResolutionError;
use crate::traits::PlayerDirectory;
use crate::value_objects::{PlayerIndex, SteamId};

/// Resolves engine player indices to durable SteamIDs
///
/// Stateless apart from the directory it wraps.
#[derive(Clone)]
pub struct IdentityResolver<D> {
    directory: D,
}

impl<D: PlayerDirectory> IdentityResolver<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Resolve a connected player's SteamID
    ///
    /// The world slot is never a connected player and fails without a lookup.
    pub fn resolve(&self, index: PlayerIndex) -> Result<SteamId, IdentityResolutionError> {
        if index.is_world() {
            return Err(IdentityResolutionError::PlayerNotFound(index));
        }

        let unique_id = self
            .directory
            .index_to_unique_id(index)
            .ok_or(IdentityResolutionError::PlayerNotFound(index))?;

        SteamId::parse(&unique_id).map_err(|source| IdentityResolutionError::MalformedIdentity {
            index,
            unique_id,
            source,
        })
    }

    /// Resolve an optional issuing admin
    ///
    /// `None` and the world slot both mean "no admin" and skip the directory.
    pub fn resolve_admin(
        &self,
        admin: Option<PlayerIndex>,
    ) -> Result<Option<SteamId>, IdentityResolutionError> {
        match admin {
            Some(index) if !index.is_world() => self.resolve(index).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::value_objects::SteamIdParseError;

    /// Directory that counts lookups
    struct CountingDirectory {
        players: HashMap<PlayerIndex, String>,
        lookups: AtomicUsize,
    }

    impl CountingDirectory {
        fn new(players: &[(u32, &str)]) -> Self {
            Self {
                players: players
                    .iter()
                    .map(|(i, id)| (PlayerIndex::new(*i), (*id).to_string()))
                    .collect(),
                lookups: AtomicUsize::new(0),
            }
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl PlayerDirectory for CountingDirectory {
        fn index_to_unique_id(&self, index: PlayerIndex) -> Option<String> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.players.get(&index).cloned()
        }
    }

    #[test]
    fn test_resolve_connected_player() {
        let resolver = IdentityResolver::new(CountingDirectory::new(&[(3, "STEAM_0:0:11101")]));
        let id = resolver.resolve(PlayerIndex::new(3)).unwrap();
        assert_eq!(id.to_u64(), 76_561_197_960_287_930);
    }

    #[test]
    fn test_resolve_empty_slot() {
        let resolver = IdentityResolver::new(CountingDirectory::new(&[]));
        let err = resolver.resolve(PlayerIndex::new(5)).unwrap_err();
        assert_eq!(err, IdentityResolutionError::PlayerNotFound(PlayerIndex::new(5)));
    }

    #[test]
    fn test_resolve_bot_is_malformed() {
        let resolver = IdentityResolver::new(CountingDirectory::new(&[(2, "BOT")]));
        let err = resolver.resolve(PlayerIndex::new(2)).unwrap_err();
        assert_eq!(
            err,
            IdentityResolutionError::MalformedIdentity {
                index: PlayerIndex::new(2),
                unique_id: "BOT".to_string(),
                source: SteamIdParseError::InvalidFormat,
            }
        );
    }

    #[test]
    fn test_world_is_not_a_target() {
        let resolver = IdentityResolver::new(CountingDirectory::new(&[(0, "STEAM_0:0:1")]));
        assert!(resolver.resolve(PlayerIndex::WORLD).is_err());
        assert_eq!(resolver.directory().lookups(), 0);
    }

    #[test]
    fn test_admin_sentinel_skips_lookup() {
        let resolver = IdentityResolver::new(CountingDirectory::new(&[]));

        assert_eq!(resolver.resolve_admin(None).unwrap(), None);
        assert_eq!(resolver.resolve_admin(Some(PlayerIndex::WORLD)).unwrap(), None);
        assert_eq!(resolver.directory().lookups(), 0);
    }

    #[test]
    fn test_admin_resolves_like_target() {
        let resolver = IdentityResolver::new(CountingDirectory::new(&[(1, "[U:1:22202]")]));
        let admin = resolver.resolve_admin(Some(PlayerIndex::new(1))).unwrap();
        assert_eq!(admin.map(SteamId::account_id), Some(22202));

        assert!(resolver.resolve_admin(Some(PlayerIndex::new(9))).is_err());
    }
}
