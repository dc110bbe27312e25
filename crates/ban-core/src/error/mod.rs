//! Domain error types

mod identity_error;

pub use identity_error::IdentityResolutionError;
