//! Database models - SQLx-compatible structs for SQLite tables

mod ban;

pub use ban::BanModel;
