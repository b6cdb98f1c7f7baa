//! Top-level facade crate for socialrest.
//!
//! Re-exports the core data model and the client runtime so users can depend on a single crate.

pub mod core {
    pub use socialrest_core::*;
}

pub mod client {
    pub use socialrest_client::*;
}
