//! Domain entities - core business objects

mod ban;

pub use ban::{BanId, BanRecord, NewBan};
