//! Tracker portfolio reporting
//!
//! Loads projects, iterations and stories from a tracker's XML API and rolls
//! them up into work-in-progress and velocity reports across projects.
//! Uses a ports and adapters layout:
//! - `domain`: entities, field coercion and the client port
//! - `adapters`: HTTP transport and XML parsing
//! - `app`: loading and cross-project reporting services
//! - `report`: plain-text rendering for the command line

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod report;

#[cfg(test)]
mod test_utils;

pub use adapters::HttpTrackerClient;
pub use app::{IterationSummary, PortfolioLoader, ReportService};
pub use config::Config;
pub use error::{ConfigError, TrackerError};
