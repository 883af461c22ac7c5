//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod tracker;

pub use tracker::{parse_document, HttpTrackerClient};
