//! Ports to the game engine
//!
//! The domain layer defines what it needs from the engine, and the plugin
//! host provides the implementation.

mod directory;

pub use directory::PlayerDirectory;
