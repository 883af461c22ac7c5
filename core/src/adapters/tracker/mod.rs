//! Tracker adapter
//!
//! HTTP transport and XML parsing for the tracker API.

pub mod client;
pub mod xml;

pub use client::HttpTrackerClient;
pub use xml::parse_document;
