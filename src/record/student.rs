use serde::{Deserialize, Serialize};

use crate::classify::DomainLabel;
use crate::types::identifiers::StudentId;

/// Activity counters a competency score is computed from.
///
/// Counters are unsigned, so non-negativity holds by construction.
/// `coding_score` lives on a caller-defined scale and is not validated here;
/// a non-finite value degrades ranking order (see `scoring::rank`) but never
/// panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCounters {
    #[serde(default)]
    pub hackathons: u32,
    #[serde(default)]
    pub internships: u32,
    #[serde(default)]
    pub research_papers: u32,
    #[serde(default)]
    pub coding_score: f64,
}

impl Default for ActivityCounters {
    fn default() -> Self {
        ActivityCounters {
            hackathons: 0,
            internships: 0,
            research_papers: 0,
            coding_score: 0.0,
        }
    }
}

/// A student as the engine sees one.
///
/// `domain_interest` is asserted by the student and is never derived by the
/// classifier — the two label provenances must not be conflated. The score is
/// never stored on the record; it is recomputed from `counters` on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub domain_interest: DomainLabel,
    pub skills: String,
    pub bio: String,
    pub counters: ActivityCounters,
}
