/// Error types for a double-check request
///
/// Classification and formatting never fail; every error here comes from
/// validating the competition id or fetching and decoding the WCIF document.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Please enter a valid competition ID.")]
    InvalidCompetitionId,

    /// Non-200 response from the WCA API
    #[error("Failed to fetch WCIF for competition ID {competition_id}: {status} {body}")]
    FetchFailure { competition_id: String, status: u16, body: String },

    /// The request never produced a response (DNS, TLS, connection reset, ...)
    #[error("Failed to fetch WCIF for competition ID {competition_id}: {message}")]
    Transport { competition_id: String, message: String },

    #[error("Malformed WCIF for competition ID {competition_id}: {source}")]
    MalformedDocument {
        competition_id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    /// Whether the error happened while talking to the WCA API or decoding its reply
    pub fn is_fetch_error(&self) -> bool {
        !matches!(self, ReportError::InvalidCompetitionId)
    }

    /// Single user-facing message shown at the boundary
    pub fn user_message(&self) -> String {
        if self.is_fetch_error() { format!("Error fetching WCIF: {}", self) } else { self.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_message_carries_status_and_body() {
        let err = ReportError::FetchFailure {
            competition_id: "NoSuchComp2026".to_string(),
            status: 404,
            body: "{\"error\":\"Competition not found\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch WCIF for competition ID NoSuchComp2026: 404 {\"error\":\"Competition not found\"}"
        );
        assert!(err.user_message().starts_with("Error fetching WCIF: Failed to fetch WCIF"));
    }

    #[test]
    fn test_invalid_id_message_is_not_prefixed() {
        let err = ReportError::InvalidCompetitionId;
        assert!(!err.is_fetch_error());
        assert_eq!(err.user_message(), "Please enter a valid competition ID.");
    }

    #[test]
    fn test_malformed_document_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ReportError::MalformedDocument { competition_id: "X".to_string(), source };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.is_fetch_error());
    }
}
