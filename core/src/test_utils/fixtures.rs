//! Test fixtures
//!
//! Factory functions for test entities and the XML snippets the tracker API
//! would return for them. Times are offsets in days from a fixed anchor so
//! repeated calls compare equal.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::adapters::parse_document;
use crate::domain::coercion::format_timestamp;
use crate::domain::document::Node;
use crate::domain::entities::{Iteration, IterationId, Story, StoryId};

/// Fixed point in time all fixtures are relative to
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// `days` days after the anchor (negative for before)
pub fn at(days: i64) -> DateTime<Utc> {
    anchor() + Duration::days(days)
}

/// Parse an XML fixture, panicking on malformed input
pub fn parse_fixture(xml: &str) -> Node {
    parse_document(xml).expect("fixture XML should parse")
}

/// Create a test story with the given type, state and estimate
pub fn test_story(story_type: &str, state: &str, estimate: u32, owner: Option<&str>) -> Story {
    Story {
        id: StoryId(1),
        story_type: Some(story_type.parse().unwrap()),
        current_state: Some(state.parse().unwrap()),
        owned_by: owner.map(str::to_string),
        estimate,
        name: Some(format!("{} story", story_type)),
        ..Story::default()
    }
}

/// Create a test iteration spanning `[start, finish]`
pub fn test_iteration(
    start: DateTime<Utc>,
    finish: DateTime<Utc>,
    stories: Vec<Story>,
) -> Iteration {
    Iteration::new(IterationId(1), 1, Some(start), Some(finish), 1, stories)
}

pub fn story_xml(
    id: i64,
    story_type: &str,
    state: &str,
    estimate: u32,
    owner: Option<&str>,
) -> String {
    let owner = owner
        .map(|o| format!("<owned_by>{}</owned_by>", o))
        .unwrap_or_default();
    format!(
        r#"<story>
  <id type="integer">{id}</id>
  <project_id type="integer">1</project_id>
  <story_type>{story_type}</story_type>
  <url>http://tracker.test/story/show/{id}</url>
  <estimate type="integer">{estimate}</estimate>
  <current_state>{state}</current_state>
  <name>Story {id}</name>
  <requested_by>Dana</requested_by>
  {owner}
  <created_at type="datetime">{created}</created_at>
  <updated_at type="datetime">{updated}</updated_at>
</story>"#,
        created = format_timestamp(&at(-30)),
        updated = format_timestamp(&at(-1)),
    )
}

pub fn stories_xml(stories: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<stories type="array" count="{}" total="{}">
{}
</stories>"#,
        stories.len(),
        stories.len(),
        stories.join("\n")
    )
}

pub fn iteration_xml(
    id: i64,
    number: i64,
    start: DateTime<Utc>,
    finish: DateTime<Utc>,
    stories: &[String],
) -> String {
    format!(
        r#"<iteration>
  <id type="integer">{id}</id>
  <number type="integer">{number}</number>
  <start type="datetime">{start}</start>
  <finish type="datetime">{finish}</finish>
  <team_strength type="float">1</team_strength>
  <stories type="array">
{stories}
  </stories>
</iteration>"#,
        start = format_timestamp(&start),
        finish = format_timestamp(&finish),
        stories = stories.join("\n"),
    )
}

pub fn iterations_xml(iterations: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<iterations type="array">
{}
</iterations>"#,
        iterations.join("\n")
    )
}

pub fn project_xml(id: i64, name: &str) -> String {
    format!(
        r#"<project>
  <id>{id}</id>
  <name>{name}</name>
  <iteration_length type="integer">1</iteration_length>
  <week_start_day>Monday</week_start_day>
  <point_scale>0,1,2,3</point_scale>
  <current_velocity>10</current_velocity>
  <memberships type="array">
    <membership>
      <id>{id}00</id>
      <project><id>{id}</id><name>{name}</name></project>
    </membership>
  </memberships>
</project>"#
    )
}

pub fn projects_xml(projects: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<projects type="array">
{}
</projects>"#,
        projects.join("\n")
    )
}
