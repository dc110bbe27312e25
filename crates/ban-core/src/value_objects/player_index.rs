//! Player index - the engine's transient, session-scoped player slot

use std::fmt;

/// Engine-assigned player slot
///
/// Only valid while the player stays connected; the same person gets a
/// different index after reconnecting. Slot 0 is the world entity (server
/// console) and never belongs to a connected player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PlayerIndex(u32);

impl PlayerIndex {
    /// The world / server console slot
    pub const WORLD: Self = Self(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Check if this is the world slot
    #[inline]
    pub const fn is_world(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}
