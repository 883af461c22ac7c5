//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod portfolio_loader;
pub mod report_service;

pub use portfolio_loader::PortfolioLoader;
pub use report_service::{IterationSummary, ReportService};
