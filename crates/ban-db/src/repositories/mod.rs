//! Repository implementations
//!
//! SQL for the `bans` table. Reads go straight to the pool; the insert runs
//! on a connection borrowed from an open session.

mod ban;

pub use ban::SqliteBanRepository;
