use serde::{Deserialize, Serialize};

use crate::classify::DomainLabel;
use crate::record::{OpportunityRecord, StudentRecord};

/// Per-counter point contributions behind a competency score.
///
/// Kept in the output so callers can explain a score without re-deriving the
/// weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub hackathon_points: f64,
    pub internship_points: f64,
    pub research_points: f64,
    pub coding_points: f64,
}

impl ScoreBreakdown {
    /// Unrounded sum of the parts.
    pub fn total(&self) -> f64 {
        self.hackathon_points + self.internship_points + self.research_points + self.coding_points
    }
}

/// A student together with their computed score and 1-based leaderboard rank.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedStudent {
    pub rank: usize,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// We own the record here because it's part of the final output payload
    pub student: StudentRecord,
}

/// Metadata describing the outcome of a recommendation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    pub domain: DomainLabel,
    pub limit: usize,

    pub catalog_size: usize,
    pub domain_matches: usize,
    pub excluded_applied: usize,
    pub excluded_by_limit: usize,
    pub recommended: usize,
}

/// The final result of a recommendation pass: selected opportunities in
/// catalog order, plus the counters explaining what was filtered out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub opportunities: Vec<OpportunityRecord>,
    pub recommendation: RecommendationMetadata,
}
