//! Story domain entity
//!
//! A single unit of tracked work: a feature, bug, chore or release marker.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::domain::coercion;
use crate::domain::document::Node;

/// Tracker-assigned story identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StoryId(pub i64);

impl From<i64> for StoryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of work a story represents
///
/// Matching is case-sensitive; anything unrecognised is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoryType {
    Feature,
    Bug,
    Chore,
    Release,
    Other(String),
}

impl StoryType {
    pub fn as_str(&self) -> &str {
        match self {
            StoryType::Feature => "feature",
            StoryType::Bug => "bug",
            StoryType::Chore => "chore",
            StoryType::Release => "release",
            StoryType::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for StoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StoryType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "feature" => StoryType::Feature,
            "bug" => StoryType::Bug,
            "chore" => StoryType::Chore,
            "release" => StoryType::Release,
            other => StoryType::Other(other.to_string()),
        })
    }
}

impl Serialize for StoryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Workflow state of a story
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoryState {
    Unscheduled,
    Started,
    Finished,
    Rejected,
    Delivered,
    Accepted,
    /// A state outside the known set, passed through as reported
    Other(String),
}

impl StoryState {
    /// The known states, in workflow order
    pub const OPTIONS: [StoryState; 6] = [
        StoryState::Unscheduled,
        StoryState::Started,
        StoryState::Finished,
        StoryState::Rejected,
        StoryState::Delivered,
        StoryState::Accepted,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            StoryState::Unscheduled => "unscheduled",
            StoryState::Started => "started",
            StoryState::Finished => "finished",
            StoryState::Rejected => "rejected",
            StoryState::Delivered => "delivered",
            StoryState::Accepted => "accepted",
            StoryState::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for StoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StoryState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "unscheduled" => StoryState::Unscheduled,
            "started" => StoryState::Started,
            "finished" => StoryState::Finished,
            "rejected" => StoryState::Rejected,
            "delivered" => StoryState::Delivered,
            "accepted" => StoryState::Accepted,
            other => StoryState::Other(other.to_string()),
        })
    }
}

impl Serialize for StoryState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A story as returned by the tracker
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Story {
    pub id: StoryId,
    /// `None` when the response carried no type; such a story matches no type filter
    pub story_type: Option<StoryType>,
    pub current_state: Option<StoryState>,
    pub owned_by: Option<String>,
    /// Point value; never negative, 0 when missing or unestimated
    pub estimate: u32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub requested_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Story {
    /// Build a story from a `story` element. Never fails; bad fields take defaults.
    pub fn from_node(node: &Node) -> Self {
        let estimate = coercion::integer(node, "estimate", 0);

        Self {
            id: StoryId(coercion::integer(node, "id", 0)),
            story_type: coercion::text(node, "story_type", None).map(|t| parse_infallible(&t)),
            current_state: coercion::text(node, "current_state", None)
                .map(|s| parse_infallible(&s)),
            owned_by: coercion::text(node, "owned_by", None),
            estimate: u32::try_from(estimate.max(0)).unwrap_or(u32::MAX),
            name: coercion::text(node, "name", None),
            description: coercion::text(node, "description", None),
            url: coercion::text(node, "url", None),
            requested_by: coercion::text(node, "requested_by", None),
            created_at: coercion::timestamp(node, "created_at", None),
            updated_at: coercion::timestamp(node, "updated_at", None),
        }
    }

    /// Exact type match; an untyped story matches nothing
    pub fn is_type(&self, story_type: &StoryType) -> bool {
        self.story_type.as_ref() == Some(story_type)
    }

    pub fn is_feature(&self) -> bool {
        self.is_type(&StoryType::Feature)
    }

    /// Whether `updated_at` falls within `[start, end]`
    pub fn updated_within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.updated_at
            .is_some_and(|updated| updated >= start && updated <= end)
    }
}

fn parse_infallible<T>(raw: &str) -> T
where
    T: std::str::FromStr<Err = std::convert::Infallible>,
{
    match raw.parse() {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
