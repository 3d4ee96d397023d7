//! Markdown display lines for the double-check report.
//!
//! The lines are meant to be joined with newlines and shown as markdown.

use crate::classify::{Borderline, Classification};
use crate::format::format_time;
use crate::request::DoubleCheckReport;

pub const TITLE: &str = "Double Check Em!";

/// The double-check criteria, as explained to organizers
pub const CRITERIA: &str = "This app shows if you have a competitor signed up for the competition that meets \
the Groupifier Criteria for a double check.\nThis is defined as:\n\
1. Single: World Ranking <= 100 and National Ranking <= 30\n\
2. Average: World Ranking <= 50 and National Ranking <= 15\n";

pub const MARKDOWN_HEADING: &str = "**Competitors that need double checks:**\n";

pub const BORDERLINE_HEADING: &str = "**Borderline (51-100 World Ranking for Average):**";

/// "- Name (WCA ID), Single: WR 42, Time: 5.12"
pub fn competitor_line(c: &Classification) -> String {
    format!(
        "- {} ({}), {}: {} {}, Time: {}",
        c.name,
        c.wca_id,
        c.kind.label(),
        c.qualifier(),
        c.ranking_value,
        format_time(&c.event_id, Some(c.best))
    )
}

/// "- Name (WCA ID), Event: WR 75, Time: 6.90"
pub fn borderline_line(b: &Borderline) -> String {
    format!(
        "- {} ({}), {}: WR {}, Time: {}",
        b.name,
        b.wca_id,
        b.event_name,
        b.ranking_value,
        format_time(&b.event_id, Some(b.best))
    )
}

/// Build the display lines of a report
///
/// Events without flagged competitors are left out; the borderline section
/// only appears when it has entries.
pub fn render_markdown_lines(report: &DoubleCheckReport) -> Vec<String> {
    let classification = &report.classification;
    let mut output = vec![MARKDOWN_HEADING.to_string()];

    for event in classification.results.iter().filter(|e| !e.competitors.is_empty()) {
        output.push(format!("**{}:**", event.event_name));
        output.extend(event.competitors.iter().map(competitor_line));
        output.push(String::new());
    }

    if !classification.borderline.is_empty() {
        output.push(BORDERLINE_HEADING.to_string());
        output.extend(classification.borderline.iter().map(borderline_line));
    }

    output
}

pub fn render_markdown(report: &DoubleCheckReport) -> String {
    render_markdown_lines(report).join("\n")
}
