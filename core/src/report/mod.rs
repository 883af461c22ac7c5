//! Report module
//!
//! Plain-text rendering of aggregated results.

pub mod renderer;

pub use renderer::{
    render_current_iterations, render_iteration_data, render_owners, render_work_info,
};
