//! Dispatcher module exports.
//!
//! Re-exports the request dispatcher and its state so downstream consumers can
//! depend on this module directly.

pub mod dispatcher;

pub use dispatcher::{build_request, DispatchState, RequestDispatcher};
