/// Competitor classification
///
/// This module walks a WCIF document and flags accepted competitors whose
/// personal bests meet the double-check thresholds:
/// - Single: world ranking <= 100, otherwise national ranking <= 30
/// - Average: world ranking <= 50, otherwise national ranking <= 15
/// - Average with world ranking 51-100 (and no qualification) is borderline
use crate::wcif::{CompetitionDocument, Event, Person, PersonalBest, ResultKind};
use log::debug;
use serde::Serialize;

pub const SINGLE_WORLD_LIMIT: u64 = 100;
pub const SINGLE_NATIONAL_LIMIT: u64 = 30;
pub const AVERAGE_WORLD_LIMIT: u64 = 50;
pub const AVERAGE_NATIONAL_LIMIT: u64 = 15;
pub const BORDERLINE_WORLD_RANGE: std::ops::RangeInclusive<u64> = 51..=100;

/// Which ranking triggered a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RankScope {
    World,
    National,
}

impl RankScope {
    /// Qualifier label shown next to the rank ("WR" / "NR")
    pub fn qualifier(&self) -> &'static str {
        match self {
            RankScope::World => "WR",
            RankScope::National => "NR",
        }
    }
}

/// A personal best that needs a double-check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub event_id: String,
    pub event_name: String,
    pub name: String,
    pub wca_id: String,
    pub kind: ResultKind,
    pub scope: RankScope,
    pub ranking_value: u64,
    pub best: i64,
}

impl Classification {
    pub fn qualifier(&self) -> &'static str {
        self.scope.qualifier()
    }
}

/// An average ranked 51-100 in the world that did not qualify otherwise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Borderline {
    pub event_id: String,
    pub event_name: String,
    pub name: String,
    pub wca_id: String,
    pub ranking_value: u64,
    pub best: i64,
}

/// Flagged competitors of one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventResults {
    pub event_id: String,
    pub event_name: String,
    pub competitors: Vec<Classification>,
}

/// Output of [`classify`]: per-event flags in event order plus the flat borderline list
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ClassificationReport {
    pub results: Vec<EventResults>,
    pub borderline: Vec<Borderline>,
}

impl ClassificationReport {
    /// Total number of qualifying classifications across all events
    pub fn flagged_count(&self) -> usize {
        self.results.iter().map(|r| r.competitors.len()).sum()
    }

    /// Start (or restart) the result list for a display name, keeping its first position
    fn open_event(&mut self, event: &Event) -> usize {
        let event_name = event.display_name();
        let fresh = EventResults {
            event_id: event.id.clone(),
            event_name: event_name.to_string(),
            competitors: Vec::new(),
        };
        match self.results.iter().position(|r| r.event_name == event_name) {
            Some(idx) => {
                self.results[idx] = fresh;
                idx
            }
            None => {
                self.results.push(fresh);
                self.results.len() - 1
            }
        }
    }
}

/// Outcome of checking one personal best against the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Qualifies { scope: RankScope, ranking_value: u64 },
    Borderline { world_ranking: u64 },
    Clear,
}

/// Apply the threshold rules to a single personal best
///
/// The combined "world and national" rule always yields the same outcome as
/// the world-only rule, so world rank takes precedence and the national rule
/// only applies when the world rule fails.
pub fn judge(pb: &PersonalBest) -> Verdict {
    if !pb.has_valid_data() {
        return Verdict::Clear;
    }

    let (world_limit, national_limit) = match pb.kind {
        ResultKind::Single => (SINGLE_WORLD_LIMIT, SINGLE_NATIONAL_LIMIT),
        ResultKind::Average => (AVERAGE_WORLD_LIMIT, AVERAGE_NATIONAL_LIMIT),
        ResultKind::Other => return Verdict::Clear,
    };

    match (pb.world_ranking, pb.national_ranking) {
        (Some(wr), _) if wr <= world_limit => Verdict::Qualifies { scope: RankScope::World, ranking_value: wr },
        (_, Some(nr)) if nr <= national_limit => Verdict::Qualifies { scope: RankScope::National, ranking_value: nr },
        (Some(wr), _) if pb.kind == ResultKind::Average && BORDERLINE_WORLD_RANGE.contains(&wr) => {
            Verdict::Borderline { world_ranking: wr }
        }
        _ => Verdict::Clear,
    }
}

/// Classify every accepted competitor of the document
///
/// Events keep their input order and every event gets an entry, even when
/// nobody is flagged. Within an event, competitors keep person input order.
pub fn classify(document: &CompetitionDocument) -> ClassificationReport {
    let mut report = ClassificationReport::default();

    for event in &document.events {
        let slot = report.open_event(event);
        let accepted = document.persons.iter().filter(|p| p.is_accepted());

        for person in accepted {
            let matching = person.personal_bests.iter().filter(|pb| pb.event_id.as_deref() == Some(event.id.as_str()));

            for pb in matching {
                match judge(pb) {
                    Verdict::Qualifies { scope, ranking_value } => {
                        report.results[slot].competitors.push(qualifying(event, person, pb, scope, ranking_value));
                    }
                    Verdict::Borderline { world_ranking } => {
                        report.borderline.push(Borderline {
                            event_id: event.id.clone(),
                            event_name: event.display_name().to_string(),
                            name: person.display_name().to_string(),
                            wca_id: person.display_wca_id().to_string(),
                            ranking_value: world_ranking,
                            best: pb.best,
                        });
                    }
                    Verdict::Clear => {}
                }
            }
        }

        debug!("{}: {} flagged competitor(s)", event.id, report.results[slot].competitors.len());
    }

    debug!(
        "classified {} events, {} flagged, {} borderline",
        report.results.len(),
        report.flagged_count(),
        report.borderline.len()
    );

    report
}

fn qualifying(event: &Event, person: &Person, pb: &PersonalBest, scope: RankScope, ranking_value: u64) -> Classification {
    Classification {
        event_id: event.id.clone(),
        event_name: event.display_name().to_string(),
        name: person.display_name().to_string(),
        wca_id: person.display_wca_id().to_string(),
        kind: pb.kind,
        scope,
        ranking_value,
        best: pb.best,
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
