pub mod ranking;

pub use ranking::{rank, top_students};

use crate::record::ActivityCounters;
use crate::types::outcome::ScoreBreakdown;

/// Round to 2 decimal places, half away from zero (`f64::round` semantics).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub trait CompetencyScorer {
    fn breakdown(&self, counters: &ActivityCounters) -> ScoreBreakdown;

    fn score_value(&self, breakdown: &ScoreBreakdown) -> f64 {
        round2(breakdown.total())
    }

    /// Breakdown and rounding in one step.
    fn score(&self, counters: &ActivityCounters) -> f64 {
        self.score_value(&self.breakdown(counters))
    }
}

/// v0: Fixed-weight InCoScore.
/// score = hackathons*2 + internships*3 + research_papers*4 + coding_score*0.1
///
/// Weights are part of the contract, not configuration. Counters are unsigned
/// so the result is non-negative for any finite `coding_score` >= 0; a
/// pathological `coding_score` flows through unvalidated.
#[derive(Default)]
pub struct WeightedScorer;

impl CompetencyScorer for WeightedScorer {
    fn breakdown(&self, counters: &ActivityCounters) -> ScoreBreakdown {
        ScoreBreakdown {
            hackathon_points: f64::from(counters.hackathons) * 2.0,
            internship_points: f64::from(counters.internships) * 3.0,
            research_points: f64::from(counters.research_papers) * 4.0,
            coding_points: counters.coding_score * 0.1,
        }
    }
}
