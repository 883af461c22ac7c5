//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They serve canned responses and record what they were asked for.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::adapters::parse_document;
use crate::domain::document::Node;
use crate::domain::ports::{StoryFilter, TrackerClient};
use crate::error::TrackerError;

// ============================================================================
// Mock Tracker Client
// ============================================================================

/// Serves XML bodies by resource path; unknown resources answer 404
#[derive(Default)]
pub struct MockTrackerClient {
    responses: HashMap<String, String>,
    requests: RwLock<Vec<(String, Option<String>)>>,
}

impl MockTrackerClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the body returned for `resource`
    pub fn with_response(mut self, resource: &str, body: &str) -> Self {
        self.responses.insert(resource.to_string(), body.to_string());
        self
    }

    /// Requests served so far as `(resource, filter string)`, in order
    pub fn requests(&self) -> Vec<(String, Option<String>)> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl TrackerClient for MockTrackerClient {
    async fn fetch(
        &self,
        resource: &str,
        filter: Option<&StoryFilter>,
    ) -> Result<Node, TrackerError> {
        self.requests.write().unwrap().push((
            resource.to_string(),
            filter.map(StoryFilter::to_filter_string),
        ));

        match self.responses.get(resource) {
            Some(body) => parse_document(body),
            None => Err(TrackerError::Api {
                status: 404,
                message: format!("no mock response for {:?}", resource),
            }),
        }
    }
}
