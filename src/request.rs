/// Request handling: competition id in, report out
///
/// One call fetches the document, classifies it and returns everything the
/// renderers need. Nothing is kept between calls.
use crate::api::WcifSource;
use crate::classify::{self, ClassificationReport};
use crate::error::ReportError;
use log::info;
use serde::Serialize;

/// Everything needed to render the double-check report of one competition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoubleCheckReport {
    pub competition_id: String,
    pub competition_name: Option<String>,
    #[serde(flatten)]
    pub classification: ClassificationReport,
}

impl DoubleCheckReport {
    /// Competition name for headings, falling back to the id
    pub fn title(&self) -> &str {
        self.competition_name.as_deref().unwrap_or(&self.competition_id)
    }
}

/// Fetch, classify and package the report for a competition
///
/// A failed fetch aborts the whole request; no partial report is produced.
pub fn handle_user_request<S: WcifSource>(source: &S, competition_id: &str) -> Result<DoubleCheckReport, ReportError> {
    if competition_id.trim().is_empty() {
        return Err(ReportError::InvalidCompetitionId);
    }

    let document = source.fetch(competition_id)?;
    info!(
        "fetched WCIF for {}: {} events, {} persons",
        competition_id,
        document.events.len(),
        document.persons.len()
    );

    let classification = classify::classify(&document);

    Ok(DoubleCheckReport {
        competition_id: competition_id.to_string(),
        competition_name: document.name.clone(),
        classification,
    })
}
