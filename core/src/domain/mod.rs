//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `document`: the parsed response tree entities are built from
//! - `coercion`: typed field accessors with defaults
//! - `entities`: Story, Iteration, Project, Portfolio and their aggregates
//! - `ports`: Trait definitions for external dependencies

pub mod coercion;
pub mod document;
pub mod entities;
pub mod ports;
