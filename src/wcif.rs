/// WCIF document model
///
/// This module defines the subset of the public WCIF (WCA Competition
/// Information Format) document that the classifier reads. Every nested
/// field is optional and falls back to a default; only the top-level
/// `events` and `persons` collections are required.
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown for a person without a name
pub const NO_NAME: &str = "[No Name]";

/// Placeholder shown for a person without a WCA ID (newcomers)
pub const NO_WCA_ID: &str = "[No WCA ID]";

/// Registration status that takes part in classification
pub const ACCEPTED_STATUS: &str = "accepted";

/// Read an explicit `null` the same way as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Root of a public WCIF document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub events: Vec<Event>,
    pub persons: Vec<Person>,
}

/// A competition event ("333", "444bf", ...)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Event {
    /// Name used for grouping and display, falling back to the event id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A registered person with their personal bests
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub wca_id: Option<String>,
    #[serde(default)]
    pub registration: Option<Registration>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal_bests: Vec<PersonalBest>,
}

impl Person {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NO_NAME)
    }

    /// WCA ID, or the placeholder when it is missing or empty
    pub fn display_wca_id(&self) -> &str {
        match self.wca_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => NO_WCA_ID,
        }
    }

    /// Only accepted registrations are checked
    pub fn is_accepted(&self) -> bool {
        self.registration
            .as_ref()
            .and_then(|r| r.status.as_deref())
            .is_some_and(|status| status == ACCEPTED_STATUS)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub status: Option<String>,
}

/// Kind of a personal best record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Single,
    Average,
    #[default]
    #[serde(other)]
    Other,
}

impl ResultKind {
    /// Capitalized label used in rendered reports
    pub fn label(&self) -> &'static str {
        match self {
            ResultKind::Single => "Single",
            // Anything that is not a single is labelled as an average
            _ => "Average",
        }
    }
}

/// A personal best record as published in the WCIF
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBest {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: ResultKind,
    /// Absent rankings never qualify
    #[serde(default)]
    pub world_ranking: Option<u64>,
    #[serde(default)]
    pub national_ranking: Option<u64>,
    /// Centiseconds for timed events, moves for 333fm, packed value for 333mbf
    #[serde(default, deserialize_with = "null_as_default")]
    pub best: i64,
}

impl PersonalBest {
    /// A zero result or zero rank marks missing data, not an elite result
    pub fn has_valid_data(&self) -> bool {
        self.best != 0 && self.world_ranking != Some(0) && self.national_ranking != Some(0)
    }
}

/// Decode a WCIF document from JSON text
pub fn parse_document(json: &str) -> Result<CompetitionDocument, serde_json::Error> {
    serde_json::from_str(json)
}
