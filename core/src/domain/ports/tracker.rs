//! Tracker client port trait
//!
//! Defines the fetch capability the domain needs from the tracker API.

use async_trait::async_trait;

use crate::domain::document::Node;
use crate::error::TrackerError;

/// Fixed result count requested with every filtered query
pub const RESULT_LIMIT: u32 = 100;

/// Story search filter, serialized as space-separated `key:value` terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFilter {
    terms: Vec<(String, String)>,
}

impl StoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter that also returns accepted ("done") stories
    pub fn include_done() -> Self {
        Self::new().with("includedone", "true")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.terms.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in insertion order, e.g. `includedone:true label:api`
    pub fn to_filter_string(&self) -> String {
        self.terms
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Port trait for tracker API reads
#[async_trait]
pub trait TrackerClient: Send + Sync {
    /// Fetch and parse the document at `resource`.
    ///
    /// `resource` is relative to the projects endpoint: `""` is the project
    /// list, `"/42/iterations"` a project's iterations. Transport and parse
    /// failures are returned as-is; nothing is retried.
    async fn fetch(
        &self,
        resource: &str,
        filter: Option<&StoryFilter>,
    ) -> Result<Node, TrackerError>;
}
