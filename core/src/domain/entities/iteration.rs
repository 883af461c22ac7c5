//! Iteration domain entity
//!
//! A time-boxed window of stories, with the point breakdowns reported per
//! iteration. Only feature stories carry points into the profiles; bugs and
//! chores are reported as counts.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::story::{Story, StoryState, StoryType};
use super::tally::{OwnerProfile, WorkProfile};
use crate::domain::coercion;
use crate::domain::document::Node;

/// Tracker-assigned iteration identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct IterationId(pub i64);

impl std::fmt::Display for IterationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owner → (state → points) over every story, regardless of type
pub type OwnerIndex = BTreeMap<Option<String>, WorkProfile>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Iteration {
    pub id: IterationId,
    pub number: i64,
    pub start: Option<DateTime<Utc>>,
    pub finish: Option<DateTime<Utc>>,
    pub team_strength: i64,
    pub stories: Vec<Story>,
    #[serde(skip)]
    owners: OwnerIndex,
}

impl Iteration {
    pub fn new(
        id: IterationId,
        number: i64,
        start: Option<DateTime<Utc>>,
        finish: Option<DateTime<Utc>>,
        team_strength: i64,
        stories: Vec<Story>,
    ) -> Self {
        let owners = index_owners(&stories);
        Self {
            id,
            number,
            start,
            finish,
            team_strength,
            stories,
            owners,
        }
    }

    /// Build an iteration and its stories from an `iteration` element
    pub fn from_node(node: &Node) -> Self {
        let stories = node.find_all("story").map(Story::from_node).collect();

        Self::new(
            IterationId(coercion::integer(node, "id", 0)),
            coercion::integer(node, "number", 0),
            coercion::timestamp(node, "start", None),
            coercion::timestamp(node, "finish", None),
            coercion::integer(node, "team_strength", 0),
            stories,
        )
    }

    /// Feature points grouped by current state
    pub fn work_profile(&self) -> WorkProfile {
        self.features()
            .map(|s| (s.current_state.clone(), s.estimate))
            .collect()
    }

    /// Feature points grouped by owner
    pub fn owner_profile(&self) -> OwnerProfile {
        self.features()
            .map(|s| (s.owned_by.clone(), s.estimate))
            .collect()
    }

    /// Number of stories of exactly this type
    pub fn count_story(&self, story_type: &StoryType) -> usize {
        self.stories.iter().filter(|s| s.is_type(story_type)).count()
    }

    /// Per-owner state breakdown over all stories, computed at construction
    pub fn owner_index(&self) -> &OwnerIndex {
        &self.owners
    }

    /// `start < t < finish`; the window edges do not count
    pub fn strictly_contains(&self, t: DateTime<Utc>) -> bool {
        match (self.start, self.finish) {
            (Some(start), Some(finish)) => start < t && t < finish,
            _ => false,
        }
    }

    /// `start <= t <= finish`
    pub fn covers(&self, t: DateTime<Utc>) -> bool {
        match (self.start, self.finish) {
            (Some(start), Some(finish)) => start <= t && t <= finish,
            _ => false,
        }
    }

    fn features(&self) -> impl Iterator<Item = &Story> {
        self.stories.iter().filter(|s| s.is_feature())
    }
}

fn index_owners(stories: &[Story]) -> OwnerIndex {
    let mut owners = OwnerIndex::new();
    for story in stories {
        owners
            .entry(story.owned_by.clone())
            .or_default()
            .add(story.current_state.clone(), story.estimate);
    }
    owners
}

/// State names that appear in any owner's breakdown, known states first
pub fn states_in(index: &OwnerIndex) -> Vec<Option<StoryState>> {
    let mut states: Vec<_> = index
        .values()
        .flat_map(|profile| profile.iter().map(|(state, _)| state.clone()))
        .collect();
    states.sort();
    states.dedup();
    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        at, iteration_xml, parse_fixture, story_xml, test_iteration, test_story,
    };

    fn mixed_iteration() -> Iteration {
        test_iteration(
            at(-10),
            at(-3),
            vec![
                test_story("feature", "started", 3, Some("Sam")),
                test_story("chore", "accepted", 2, Some("Sam")),
                test_story("bug", "started", 5, Some("Kim")),
                test_story("feature", "accepted", 1, Some("Kim")),
            ],
        )
    }

    #[test]
    fn work_profile_counts_features_only() {
        let itr = mixed_iteration();
        let profile = itr.work_profile();

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get(&Some(StoryState::Started)), 3);
        assert_eq!(profile.get(&Some(StoryState::Accepted)), 1);
        assert_eq!(itr.count_story(&StoryType::Chore), 1);
        assert_eq!(itr.count_story(&StoryType::Bug), 1);
        assert_eq!(itr.count_story(&StoryType::Feature), 2);
        assert_eq!(itr.count_story(&StoryType::Release), 0);
    }

    #[test]
    fn owner_profile_counts_features_only() {
        let profile = mixed_iteration().owner_profile();
        assert_eq!(profile.get(&Some("Sam".to_string())), 3);
        assert_eq!(profile.get(&Some("Kim".to_string())), 1);
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn owner_index_covers_every_story_type() {
        let itr = test_iteration(
            at(-10),
            at(-3),
            vec![
                test_story("feature", "started", 3, Some("Sam")),
                test_story("chore", "started", 2, Some("Sam")),
                test_story("bug", "finished", 5, None),
            ],
        );
        let index = itr.owner_index();

        assert_eq!(index.len(), 2);
        assert_eq!(
            index[&Some("Sam".to_string())].get(&Some(StoryState::Started)),
            5
        );
        assert_eq!(index[&None].get(&Some(StoryState::Finished)), 5);
        assert_eq!(
            states_in(index),
            vec![Some(StoryState::Started), Some(StoryState::Finished)]
        );
    }

    #[test]
    fn untyped_and_miscased_stories_match_no_filter() {
        let mut untyped = test_story("feature", "started", 8, None);
        untyped.story_type = None;
        let itr = test_iteration(
            at(-10),
            at(-3),
            vec![untyped, test_story("Feature", "started", 2, None)],
        );

        assert!(itr.work_profile().is_empty());
        assert_eq!(itr.count_story(&StoryType::Feature), 0);
    }

    #[test]
    fn unknown_states_pass_through() {
        let itr = test_iteration(
            at(-10),
            at(-3),
            vec![test_story("feature", "unstarted", 2, None)],
        );
        assert_eq!(
            itr.work_profile().get(&Some(StoryState::Other("unstarted".to_string()))),
            2
        );
    }

    #[test]
    fn strict_containment_excludes_edges() {
        let itr = test_iteration(at(-10), at(-3), vec![]);

        assert!(itr.strictly_contains(at(-5)));
        assert!(!itr.strictly_contains(at(-10)));
        assert!(!itr.strictly_contains(at(-3)));
        assert!(!itr.strictly_contains(at(-11)));
        assert!(!itr.strictly_contains(at(0)));
    }

    #[test]
    fn covers_includes_edges() {
        let itr = test_iteration(at(-10), at(-3), vec![]);

        assert!(itr.covers(at(-10)));
        assert!(itr.covers(at(-3)));
        assert!(itr.covers(at(-5)));
        assert!(!itr.covers(at(-2)));
    }

    #[test]
    fn missing_window_never_matches() {
        let mut itr = test_iteration(at(-10), at(-3), vec![]);
        itr.finish = None;
        assert!(!itr.strictly_contains(at(-5)));
        assert!(!itr.covers(at(-5)));
    }

    #[test]
    fn from_node_builds_stories_in_document_order() {
        let xml = iteration_xml(
            12,
            4,
            at(-14),
            at(-7),
            &[
                story_xml(1, "feature", "accepted", 2, Some("Sam")),
                story_xml(2, "chore", "accepted", 0, None),
                story_xml(3, "feature", "started", 3, Some("Kim")),
            ],
        );
        let doc = parse_fixture(&xml);
        let itr = Iteration::from_node(doc.find_all("iteration").next().unwrap());

        assert_eq!(itr.id, IterationId(12));
        assert_eq!(itr.number, 4);
        assert_eq!(itr.start, Some(at(-14)));
        assert_eq!(itr.finish, Some(at(-7)));
        assert_eq!(itr.team_strength, 1);
        let ids: Vec<i64> = itr.stories.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn from_node_is_idempotent() {
        let xml = iteration_xml(
            1,
            1,
            at(-14),
            at(-7),
            &[story_xml(1, "feature", "accepted", 2, Some("Sam"))],
        );
        let doc = parse_fixture(&xml);
        let node = doc.find_all("iteration").next().unwrap();
        assert_eq!(Iteration::from_node(node), Iteration::from_node(node));
    }
}
