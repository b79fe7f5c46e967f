pub mod identifiers;
pub mod outcome;

pub use identifiers::{OpportunityId, StudentId};
pub use outcome::{RankedStudent, RecommendationMetadata, RecommendationResult, ScoreBreakdown};
