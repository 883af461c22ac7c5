//! Project domain entity
//!
//! A tracker project: scheduling metadata, its iterations, and every story it
//! has ever held (used for date-range queries that ignore iteration bounds).

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::iteration::Iteration;
use super::story::Story;
use super::tally::WorkProfile;
use crate::domain::coercion;
use crate::domain::document::Node;

/// Tracker-assigned project identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectId(pub i64);

impl From<i64> for ProjectId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: Option<String>,
    pub iteration_length: Option<String>,
    pub week_start_day: Option<String>,
    pub point_scale: Option<String>,
    pub current_velocity: i64,
    pub public: bool,
    pub last_activity_at: Option<DateTime<Utc>>,
    pub first_iteration_start_time: Option<DateTime<Utc>>,
    /// Chronological, as returned by the API
    pub iterations: Vec<Iteration>,
    pub stories: Vec<Story>,
}

impl Project {
    /// Build a project's metadata from a `project` element; lists start empty
    pub fn from_node(node: &Node) -> Self {
        Self {
            id: ProjectId(coercion::integer(node, "id", 0)),
            name: coercion::text(node, "name", None),
            iteration_length: coercion::text(node, "iteration_length", None),
            week_start_day: coercion::text(node, "week_start_day", None),
            point_scale: coercion::text(node, "point_scale", None),
            current_velocity: coercion::integer(node, "current_velocity", 0),
            public: coercion::boolean(node, "public", false),
            last_activity_at: coercion::timestamp(node, "last_activity_at", None),
            first_iteration_start_time: coercion::timestamp(
                node,
                "first_iteration_start_time",
                None,
            ),
            iterations: Vec::new(),
            stories: Vec::new(),
        }
    }

    pub fn with_iterations(mut self, iterations: Vec<Iteration>) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_stories(mut self, stories: Vec<Story>) -> Self {
        self.stories = stories;
        self
    }

    /// Name for reports; falls back to the id when the project is unnamed
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("project {}", self.id),
        }
    }

    /// Points per state for estimated stories updated within `[start, end]`.
    ///
    /// Works over the project's full story list, independent of iterations.
    /// Stories without an estimate or an `updated_at` are left out.
    pub fn points_updated_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> WorkProfile {
        self.stories
            .iter()
            .filter(|s| s.estimate > 0 && s.updated_within(start, end))
            .map(|s| (s.current_state.clone(), s.estimate))
            .collect()
    }

    /// Iterations with `start < t < finish`
    pub fn iterations_containing(&self, t: DateTime<Utc>) -> impl Iterator<Item = &Iteration> {
        self.iterations.iter().filter(move |i| i.strictly_contains(t))
    }

    /// Iterations with `start <= t <= finish`
    pub fn iterations_covering(&self, t: DateTime<Utc>) -> impl Iterator<Item = &Iteration> {
        self.iterations.iter().filter(move |i| i.covers(t))
    }
}
