//! Portfolio domain entity
//!
//! Every project visible to one credential, with the cross-project
//! work-in-progress rollup.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::iteration::Iteration;
use super::project::Project;
use super::story::StoryType;
use super::tally::WorkProfile;

/// Key under which chore counts are reported
pub const CHORES_KEY: &str = "chores";
/// Key under which bug counts are reported
pub const BUGS_KEY: &str = "bugs";

/// Cross-project totals for the iterations in progress at a reference time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkInfo {
    /// Feature points per state
    pub points: WorkProfile,
    pub chores: usize,
    pub bugs: usize,
    /// Number of iterations that contributed
    pub iterations: usize,
}

impl WorkInfo {
    /// Flat category → total mapping.
    ///
    /// `chores` and `bugs` are present whenever at least one iteration
    /// contributed, even at zero; with no iterations the mapping is empty.
    pub fn to_map(&self) -> BTreeMap<String, u32> {
        let mut map = self.points.labelled();
        if self.iterations > 0 {
            for (key, count) in [(CHORES_KEY, self.chores), (BUGS_KEY, self.bugs)] {
                let total = map.entry(key.to_string()).or_insert(0);
                *total = total.saturating_add(u32::try_from(count).unwrap_or(u32::MAX));
            }
        }
        map
    }
}

impl Serialize for WorkInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Portfolio {
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Roll up every iteration strictly containing `reference`.
    ///
    /// Iterations starting or finishing exactly at `reference` are skipped.
    pub fn get_work_info(&self, reference: DateTime<Utc>) -> WorkInfo {
        let mut info = WorkInfo::default();
        for project in &self.projects {
            for itr in project.iterations_containing(reference) {
                info.points.merge(&itr.work_profile());
                info.chores += itr.count_story(&StoryType::Chore);
                info.bugs += itr.count_story(&StoryType::Bug);
                info.iterations += 1;
            }
        }
        info
    }

    /// [`Portfolio::get_work_info`] at the current time
    pub fn get_work_info_now(&self) -> WorkInfo {
        self.get_work_info(Utc::now())
    }

    /// Each project's iterations covering `reference` (edges included)
    pub fn iterations_covering(&self, reference: DateTime<Utc>) -> Vec<(&Project, &Iteration)> {
        self.projects
            .iter()
            .flat_map(|p| p.iterations_covering(reference).map(move |i| (p, i)))
            .collect()
    }
}
