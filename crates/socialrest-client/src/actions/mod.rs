//! Catalogued call sites.
//!
//! Each `Action` names one button of the demo surface and knows how to build its
//! request descriptor from config fixtures.

pub mod catalog;

pub use catalog::{demo_tour, Access, Action, ActionContext};
