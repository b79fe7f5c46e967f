use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{OpportunityId, StudentId};

/// Lifecycle state of an application. Wire form is snake_case text, matching
/// what callers persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown application status: {0}")]
pub struct ParseApplicationStatusError(pub String);

impl std::str::FromStr for ApplicationStatus {
    type Err = ParseApplicationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(ApplicationStatus::Submitted),
            "under_review" => Ok(ApplicationStatus::UnderReview),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(ParseApplicationStatusError(other.to_string())),
        }
    }
}

/// One student's application to one opportunity.
///
/// At most one record exists per (student, opportunity) pair; enforcing that
/// under concurrent submission belongs to the persistence layer. The engine
/// treats any existing pair as "already seen" regardless of status — a
/// rejected application still suppresses re-recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub student_id: StudentId,
    pub opportunity_id: OpportunityId,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

impl ApplicationRecord {
    /// A fresh application, stamped now.
    pub fn submitted(student_id: StudentId, opportunity_id: OpportunityId) -> Self {
        ApplicationRecord {
            student_id,
            opportunity_id,
            status: ApplicationStatus::Submitted,
            applied_at: Utc::now(),
        }
    }
}

/// Collect the opportunity ids a student has applied to, across all statuses.
/// This is the exclusion set the recommender consumes.
pub fn applied_ids(applications: &[ApplicationRecord], student_id: StudentId) -> BTreeSet<OpportunityId> {
    applications
        .iter()
        .filter(|app| app.student_id == student_id)
        .map(|app| app.opportunity_id)
        .collect()
}

/// Duplicate-application guard: true if the pair already exists.
pub fn has_applied(
    applications: &[ApplicationRecord],
    student_id: StudentId,
    opportunity_id: OpportunityId,
) -> bool {
    applications
        .iter()
        .any(|app| app.student_id == student_id && app.opportunity_id == opportunity_id)
}
