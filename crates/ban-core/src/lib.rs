//! # ban-core
//!
//! Domain layer containing player identity value objects, ban entities, the
//! player directory port, and identity resolution.
//! This crate has zero dependencies on infrastructure (database, runtime, etc.).

pub mod entities;
pub mod error;
pub mod resolver;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{BanId, BanRecord, NewBan};
pub use error::IdentityResolutionError;
pub use resolver::IdentityResolver;
pub use traits::PlayerDirectory;
pub use value_objects::{PlayerIndex, SteamId, SteamIdParseError};
