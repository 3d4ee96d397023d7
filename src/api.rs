/// API module for fetching WCIF documents from the WCA website
///
/// Documents are fetched from the public WCIF endpoint. There is no retry,
/// no pagination and no authentication: one GET per request.
use crate::error::ReportError;
use crate::wcif::{self, CompetitionDocument};
use log::debug;

const USER_AGENT: &str = "wca-double-check/0.1.0";

const WCA_API_BASE: &str = "https://worldcubeassociation.org/api/v0";

/// Something that can produce the WCIF document of a competition
pub trait WcifSource {
    fn fetch(&self, competition_id: &str) -> Result<CompetitionDocument, ReportError>;
}

/// Fetches documents from the live WCA API
#[derive(Debug, Clone, Copy, Default)]
pub struct WcaApi;

impl WcifSource for WcaApi {
    fn fetch(&self, competition_id: &str) -> Result<CompetitionDocument, ReportError> {
        fetch_wcif(competition_id)
    }
}

/// Build the public WCIF URL for a competition (id used verbatim)
pub fn wcif_url(competition_id: &str) -> String {
    format!("{}/competitions/{}/wcif/public", WCA_API_BASE, competition_id)
}

/// Fetch and decode the public WCIF of a competition
pub fn fetch_wcif(competition_id: &str) -> Result<CompetitionDocument, ReportError> {
    let url = wcif_url(competition_id);
    debug!("fetching WCIF from {}", url);

    let (status, body) = http_get_text(&url).map_err(|e| ReportError::Transport {
        competition_id: competition_id.to_string(),
        message: e,
    })?;
    debug!("got HTTP {} ({} bytes) for {}", status, body.len(), competition_id);

    decode_response(competition_id, status, &body)
}

/// GET a URL and return the status and body text, including for error statuses
fn http_get_text(url: &str) -> Result<(u16, String), String> {
    let resp = match ureq::get(url).set("User-Agent", USER_AGENT).call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(_, resp)) => resp,
        Err(ureq::Error::Transport(t)) => return Err(t.to_string()),
    };
    let status = resp.status();
    let body = resp.into_string().map_err(|e| format!("Failed to read response body: {}", e))?;
    Ok((status, body))
}

/// Turn an HTTP response into a document; only a 200 counts as success
pub fn decode_response(competition_id: &str, status: u16, body: &str) -> Result<CompetitionDocument, ReportError> {
    if status != 200 {
        return Err(ReportError::FetchFailure {
            competition_id: competition_id.to_string(),
            status,
            body: body.to_string(),
        });
    }

    wcif::parse_document(body)
        .map_err(|source| ReportError::MalformedDocument { competition_id: competition_id.to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wcif_url() {
        assert_eq!(
            wcif_url("WC2025"),
            "https://worldcubeassociation.org/api/v0/competitions/WC2025/wcif/public"
        );
    }

    #[test]
    fn test_decode_non_200_is_fetch_failure() {
        for status in [201, 404, 500] {
            match decode_response("Comp2026", status, "nope") {
                Err(ReportError::FetchFailure { competition_id, status: s, body }) => {
                    assert_eq!(competition_id, "Comp2026");
                    assert_eq!(s, status);
                    assert_eq!(body, "nope");
                }
                other => panic!("expected FetchFailure, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_decode_bad_json_is_malformed() {
        let err = decode_response("Comp2026", 200, "<html></html>").unwrap_err();
        assert!(matches!(err, ReportError::MalformedDocument { .. }));
    }

    #[test]
    fn test_decode_ok() {
        let doc = decode_response("Comp2026", 200, r#"{"name": "Comp 2026", "events": [], "persons": []}"#).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Comp 2026"));
    }

    #[test]
    #[ignore] // Requires network access
    fn test_fetch_live_competition() {
        let doc = fetch_wcif("WC2023").unwrap();
        assert!(!doc.events.is_empty());
    }
}
