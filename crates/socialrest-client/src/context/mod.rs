//! Session context shared by the dispatcher and its callers.
//!
//! The token lives in an explicit context object injected at construction,
//! so callers (CLI, tests) can observe login state without reaching into the
//! dispatcher.

pub mod session;

pub use session::SessionContext;
