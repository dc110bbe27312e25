//! The ban store and its request type

mod ban_store;
mod request;

pub use ban_store::BanStore;
pub use request::BanRequest;
