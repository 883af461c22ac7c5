//! Portfolio loader
//!
//! Builds the entity graph from the tracker API. The client is injected and
//! every request is made one at a time, project after project; the first
//! transport or parse failure aborts the load.

use std::sync::Arc;

use crate::domain::document::Node;
use crate::domain::entities::{Iteration, Portfolio, Project, ProjectId, Story};
use crate::domain::ports::{StoryFilter, TrackerClient};
use crate::error::TrackerError;

/// Service for loading a portfolio snapshot
pub struct PortfolioLoader<C>
where
    C: TrackerClient + ?Sized,
{
    client: Arc<C>,
}

impl<C> PortfolioLoader<C>
where
    C: TrackerClient + ?Sized,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetch every project for the credential, each with its iterations and stories
    pub async fn load_portfolio(&self) -> Result<Portfolio, TrackerError> {
        let doc = self.client.fetch("", None).await?;

        let mut projects = Vec::new();
        for node in doc.find_all("project") {
            projects.push(self.load_project(node).await?);
        }

        tracing::info!(projects = projects.len(), "Loaded portfolio");
        Ok(Portfolio::new(projects))
    }

    /// Build a project from its list entry, then fetch its iterations and stories
    pub async fn load_project(&self, node: &Node) -> Result<Project, TrackerError> {
        let project = Project::from_node(node);
        let iterations = self.fetch_iterations(project.id).await?;
        let stories = self.fetch_stories(project.id).await?;

        tracing::debug!(
            project = %project.display_name(),
            iterations = iterations.len(),
            stories = stories.len(),
            "Loaded project"
        );
        Ok(project.with_iterations(iterations).with_stories(stories))
    }

    /// A project's iterations with their nested stories
    pub async fn fetch_iterations(&self, id: ProjectId) -> Result<Vec<Iteration>, TrackerError> {
        let doc = self
            .client
            .fetch(&format!("/{}/iterations", id), None)
            .await?;
        Ok(doc.find_all("iteration").map(Iteration::from_node).collect())
    }

    /// Every story the project holds, done ones included
    pub async fn fetch_stories(&self, id: ProjectId) -> Result<Vec<Story>, TrackerError> {
        let doc = self
            .client
            .fetch(&format!("/{}/stories", id), Some(&StoryFilter::include_done()))
            .await?;
        Ok(doc.find_all("story").map(Story::from_node).collect())
    }
}
