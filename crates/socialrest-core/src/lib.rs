//! socialrest core: transport-agnostic request model, response classification, and errors.
//!
//! This crate defines the data model shared by the client runtime and any
//! alternative front-end: request descriptors, the session token, the response
//! outcome, the API path catalog, and the error surface. It carries no HTTP or
//! runtime dependencies so the classification rules can be exercised without a
//! network.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `SocialRestError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, SocialRestError};
