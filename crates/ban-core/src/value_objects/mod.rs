//! Value objects - immutable types that represent domain concepts

mod player_index;
mod steam_id;

pub use player_index::PlayerIndex;
pub use steam_id::{SteamId, SteamIdParseError};
