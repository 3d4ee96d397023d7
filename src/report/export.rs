//! JSON export of a double-check report.

use super::stats::summarize_report;
use crate::request::DoubleCheckReport;
use std::io::Write;

/// Export a report as pretty-printed JSON.
///
/// The document carries the competition, a generation timestamp, the summary
/// counts, the per-event results (every event, in input order) and the
/// borderline list.
pub fn export_json_report<W: Write>(report: &DoubleCheckReport, writer: W) -> std::io::Result<()> {
    use serde_json::json;

    let summary = summarize_report(&report.classification);

    let document = json!({
        "competition_id": report.competition_id,
        "competition_name": report.competition_name,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "summary": summary,
        "results": report.classification.results,
        "borderline": report.classification.borderline,
    });

    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::wcif;
    use serde_json::Value;

    #[test]
    fn test_export_sample() {
        let doc = wcif::parse_document(include_str!("../../test-data/sample-wcif.json")).unwrap();
        let report = DoubleCheckReport {
            competition_id: "SampleOpen2026".to_string(),
            competition_name: doc.name.clone(),
            classification: classify(&doc),
        };

        let mut buf = Vec::new();
        export_json_report(&report, &mut buf).unwrap();
        let value: Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["competition_id"], "SampleOpen2026");
        assert_eq!(value["competition_name"], "Sample Open 2026");
        assert!(value["generated_at"].is_string());
        assert_eq!(value["summary"]["flagged"], 4);
        assert_eq!(value["results"].as_array().unwrap().len(), 4);
        assert_eq!(value["results"][0]["competitors"][0]["scope"], "World");
        assert_eq!(value["results"][0]["competitors"][0]["kind"], "single");
        assert_eq!(value["results"][3]["competitors"].as_array().unwrap().len(), 0);
        assert_eq!(value["borderline"][1]["ranking_value"], 99);
    }
}
