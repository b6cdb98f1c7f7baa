//! socialrest client library entry.
//!
//! This crate wires the config loader, the session context, the HTTP transport,
//! the request dispatcher, and the action catalog into one client stack. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod actions;
pub mod app_state;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod transport;
pub mod view;
