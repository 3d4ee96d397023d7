//! Summary statistics for a double-check report.

use crate::classify::{ClassificationReport, RankScope};
use serde::Serialize;

/// Counts shown under the console table and in the JSON export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReportSummary {
    pub flagged: usize,
    pub world: usize,
    pub national: usize,
    pub events_with_flags: usize,
    pub events_total: usize,
    pub borderline: usize,
}

/// Calculate summary statistics from a classification report.
pub fn summarize_report(report: &ClassificationReport) -> ReportSummary {
    let mut summary = ReportSummary {
        events_total: report.results.len(),
        borderline: report.borderline.len(),
        ..Default::default()
    };

    for event in &report.results {
        if !event.competitors.is_empty() {
            summary.events_with_flags += 1;
        }
        for c in &event.competitors {
            summary.flagged += 1;
            match c.scope {
                RankScope::World => summary.world += 1,
                RankScope::National => summary.national += 1,
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::wcif;

    #[test]
    fn test_summarize_sample() {
        let doc = wcif::parse_document(include_str!("../../test-data/sample-wcif.json")).unwrap();
        let summary = summarize_report(&classify(&doc));
        assert_eq!(
            summary,
            ReportSummary { flagged: 4, world: 3, national: 1, events_with_flags: 3, events_total: 4, borderline: 2 }
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize_report(&ClassificationReport::default()), ReportSummary::default());
    }
}
