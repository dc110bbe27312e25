//! Player directory - the engine's player-indexing subsystem

use std::collections::HashMap;
use std::sync::Arc;

use crate::value_objects::PlayerIndex;

/// Looks up the unique ID string of a connected player
pub trait PlayerDirectory: Send + Sync {
    /// Unique ID string for the player in `index`, or `None` if the slot is empty
    fn index_to_unique_id(&self, index: PlayerIndex) -> Option<String>;
}

impl<T: PlayerDirectory + ?Sized> PlayerDirectory for Arc<T> {
    fn index_to_unique_id(&self, index: PlayerIndex) -> Option<String> {
        (**self).index_to_unique_id(index)
    }
}

impl<T: PlayerDirectory + ?Sized> PlayerDirectory for &T {
    fn index_to_unique_id(&self, index: PlayerIndex) -> Option<String> {
        (**self).index_to_unique_id(index)
    }
}

// Fixed snapshot of the player slots
impl PlayerDirectory for HashMap<PlayerIndex, String> {
    fn index_to_unique_id(&self, index: PlayerIndex) -> Option<String> {
        self.get(&index).cloned()
    }
}
