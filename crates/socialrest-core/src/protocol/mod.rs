//! Protocol modules (request model + response classification).
//!
//! - `request`: immutable descriptors for one HTTP call.
//! - `paths`: the REST surface of the social-network API.
//! - `token`: the opaque bearer credential.
//! - `outcome`: status/body classification into a displayable outcome.
//!
//! Classification is a pure function over status and body bytes, so every
//! rule (status failure, empty-body sentinel, login/logout special cases) is
//! testable without a transport.

pub mod outcome;
pub mod paths;
pub mod request;
pub mod token;

pub use outcome::{classify, Classified, ResponseOutcome};
pub use request::{Method, RequestDescriptor};
pub use token::SessionToken;
