//! Report renderer
//!
//! Renders aggregated results to plain text for the terminal.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::app::IterationSummary;
use crate::domain::entities::{states_in, CategoryLabel, WorkInfo, WorkProfile, NONE_LABEL};

/// Heading printed above the cross-project totals
pub const ALL_PROJECTS_HEADING: &str = "####### ALL PROJECTS ##############";

/// Render the iterations in progress, one block per project iteration
pub fn render_current_iterations(summaries: &[IterationSummary]) -> String {
    if summaries.is_empty() {
        return "No iterations in progress.\n".to_string();
    }

    let mut buf = String::new();
    for summary in summaries {
        buf.push_str(&format!(
            "{}: {} - {}\n",
            summary.project,
            summary.number,
            format_date(summary.start)
        ));
        for (state, points) in summary.work.labelled() {
            buf.push_str(&format!("   {}: {}\n", state, points));
        }
        buf.push_str(&format!("   chores: {}\n", summary.chores));
        buf.push_str(&format!("   bugs: {}\n", summary.bugs));
    }
    buf
}

/// Render the cross-project totals
pub fn render_work_info(info: &WorkInfo) -> String {
    let mut buf = String::new();
    buf.push_str(ALL_PROJECTS_HEADING);
    buf.push('\n');

    let totals = info.to_map();
    if totals.is_empty() {
        buf.push_str("No iterations in progress.\n");
    }
    for (category, total) in totals {
        buf.push_str(&format!("{}: {}\n", category, total));
    }
    buf
}

/// Render per-project points for stories updated within a window
pub fn render_iteration_data(
    data: &BTreeMap<String, WorkProfile>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> String {
    let mut buf = format!(
        "Points updated {} to {}\n",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    );

    for (project, profile) in data {
        buf.push_str(project);
        buf.push('\n');
        if profile.is_empty() {
            buf.push_str("    (nothing)\n");
        }
        for (state, points) in profile.labelled() {
            buf.push_str(&format!("    {} {}\n", state, points));
        }
    }
    buf
}

/// Render each iteration's feature points per owner and the all-story owner breakdown
pub fn render_owners(summaries: &[IterationSummary]) -> String {
    if summaries.is_empty() {
        return "No iterations in progress.\n".to_string();
    }

    let mut buf = String::new();
    for summary in summaries {
        buf.push_str(&format!("{}: {}\n", summary.project, summary.number));
        for (owner, points) in summary.owners.labelled() {
            buf.push_str(&format!("   {}: {}\n", owner, points));
        }

        let states = states_in(&summary.owner_index);
        if states.is_empty() {
            continue;
        }
        buf.push_str("   all stories by state:\n");
        for (owner, profile) in &summary.owner_index {
            let cells: Vec<String> = states
                .iter()
                .filter(|s| profile.contains_key(s))
                .map(|s| format!("{} {}", s.label(), profile.get(s)))
                .collect();
            buf.push_str(&format!(
                "      {}: {}\n",
                owner.as_deref().unwrap_or(NONE_LABEL),
                cells.join(", ")
            ));
        }
    }
    buf
}

fn format_date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ReportService;
    use crate::domain::document::Node;
    use crate::domain::entities::{Portfolio, Project, StoryState};
    use crate::test_utils::{at, test_iteration, test_story};

    fn service() -> ReportService {
        let project = Project::from_node(
            &Node::element("project").with_child(Node::element("name").with_text("Web")),
        )
        .with_iterations(vec![test_iteration(
            at(-10),
            at(-3),
            vec![
                test_story("feature", "accepted", 2, Some("Sam")),
                test_story("feature", "started", 3, Some("Kim")),
                test_story("chore", "accepted", 1, None),
            ],
        )]);
        ReportService::new(Portfolio::new(vec![project]))
    }

    #[test]
    fn current_iterations_block() {
        let text = render_current_iterations(&service().current_iterations(at(-5)));
        assert_eq!(
            text,
            "Web: 1 - 2024-06-05 12:00\n   accepted: 2\n   started: 3\n   chores: 1\n   bugs: 0\n"
        );
    }

    #[test]
    fn work_info_block() {
        let text = render_work_info(&service().get_work_info(at(-5)));
        assert!(text.starts_with(ALL_PROJECTS_HEADING));
        assert!(text.contains("accepted: 2\n"));
        assert!(text.contains("chores: 1\n"));
        assert!(text.contains("bugs: 0\n"));
    }

    #[test]
    fn empty_reports_say_so() {
        assert_eq!(render_current_iterations(&[]), "No iterations in progress.\n");
        assert!(render_work_info(&WorkInfo::default()).contains("No iterations in progress."));
    }

    #[test]
    fn iteration_data_block() {
        let mut data = BTreeMap::new();
        data.insert(
            "Web".to_string(),
            [(Some(StoryState::Accepted), 5)].into_iter().collect(),
        );
        data.insert("Mobile".to_string(), WorkProfile::new());

        let text = render_iteration_data(&data, at(-16), at(-2));
        assert_eq!(
            text,
            "Points updated 2024-05-30 to 2024-06-13\nMobile\n    (nothing)\nWeb\n    accepted 5\n"
        );
    }

    #[test]
    fn owners_block() {
        let text = render_owners(&service().current_iterations(at(-5)));
        assert!(text.contains("   Kim: 3\n"));
        assert!(text.contains("   Sam: 2\n"));
        assert!(text.contains("      none: accepted 1\n"));
        assert!(text.contains("      Sam: accepted 2\n"));
    }
}
