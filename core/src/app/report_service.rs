//! Report service
//!
//! Cross-project queries over a loaded portfolio for arbitrary date windows.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{
    OwnerIndex, OwnerProfile, Portfolio, Project, StoryType, WorkInfo, WorkProfile,
};

/// One project's iteration, summarised for reporting
#[derive(Debug, Clone, Serialize)]
pub struct IterationSummary {
    pub project: String,
    pub number: i64,
    pub start: Option<DateTime<Utc>>,
    pub finish: Option<DateTime<Utc>>,
    /// Feature points per state
    pub work: WorkProfile,
    /// Feature points per owner
    pub owners: OwnerProfile,
    #[serde(skip)]
    pub owner_index: OwnerIndex,
    pub chores: usize,
    pub bugs: usize,
}

/// Service for reporting across a portfolio's projects
pub struct ReportService {
    portfolio: Portfolio,
}

impl ReportService {
    pub fn new(portfolio: Portfolio) -> Self {
        Self { portfolio }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn get_projects(&self) -> &[Project] {
        &self.portfolio.projects
    }

    /// Per-project points for stories updated within `[start, end]`, keyed by project name.
    ///
    /// When two projects share a name the later one replaces the earlier.
    pub fn get_iteration_data(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BTreeMap<String, WorkProfile> {
        let mut data = BTreeMap::new();
        for project in self.get_projects() {
            let name = project.display_name();
            let profile = project.points_updated_between(start, end);
            if data.insert(name.clone(), profile).is_some() {
                tracing::warn!(project = %name, "Duplicate project name, keeping the later one");
            }
        }
        data
    }

    /// Summaries of every iteration covering `reference`, edges included
    pub fn current_iterations(&self, reference: DateTime<Utc>) -> Vec<IterationSummary> {
        self.portfolio
            .iterations_covering(reference)
            .into_iter()
            .map(|(project, itr)| IterationSummary {
                project: project.display_name(),
                number: itr.number,
                start: itr.start,
                finish: itr.finish,
                work: itr.work_profile(),
                owners: itr.owner_profile(),
                owner_index: itr.owner_index().clone(),
                chores: itr.count_story(&StoryType::Chore),
                bugs: itr.count_story(&StoryType::Bug),
            })
            .collect()
    }

    /// Cross-project totals for iterations strictly containing `reference`
    pub fn get_work_info(&self, reference: DateTime<Utc>) -> WorkInfo {
        self.portfolio.get_work_info(reference)
    }
}
