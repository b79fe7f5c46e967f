//! Deterministic opportunity matching and student competency scoring.
//!
//! `inco-core` provides keyword domain classification, fixed-weight
//! competency scoring (InCoScore), stable leaderboard ranking, and
//! applied-set-aware opportunity recommendation. All operations are
//! deterministic — identical inputs always produce identical outputs,
//! byte-for-byte — and side-effect free: the engine owns no storage and
//! mutates none of its inputs.

pub mod catalog;
pub mod classify;
pub mod record;
pub mod recommend;
pub mod scoring;
pub mod types;

use std::collections::BTreeSet;

use crate::record::{OpportunityDraft, OpportunityRecord, StudentRecord};
use crate::types::identifiers::OpportunityId;
use crate::types::outcome::{RankedStudent, RecommendationResult};
pub use classify::{Classifier, DomainLabel, KeywordClassifier};
pub use scoring::{CompetencyScorer, WeightedScorer};

pub struct MatchEngine<C, S> {
	classifier: C,
	scorer: S,
}

impl Default for MatchEngine<KeywordClassifier, WeightedScorer> {
	fn default() -> Self {
		Self {
			classifier: KeywordClassifier,
			scorer: WeightedScorer,
		}
	}
}

impl<C, S> MatchEngine<C, S>
where
	C: Classifier,
	S: CompetencyScorer,
{
	pub fn new(classifier: C, scorer: S) -> Self {
		Self { classifier, scorer }
	}

	/// Classify a draft into a record. Called once at ingestion; the label is
	/// persisted by the caller and never recomputed afterward.
	pub fn ingest_opportunity(&self, id: OpportunityId, draft: OpportunityDraft) -> OpportunityRecord {
		OpportunityRecord::ingest(id, draft, &self.classifier)
	}

	/// Score and rank a student set, best first. Recomputed on every read;
	/// nothing is cached.
	pub fn rank(&self, students: &[StudentRecord]) -> Vec<RankedStudent> {
		scoring::rank(students, &self.scorer)
	}

	/// The top `n` of [`MatchEngine::rank`].
	pub fn top_students(&self, students: &[StudentRecord], n: usize) -> Vec<RankedStudent> {
		scoring::top_students(students, &self.scorer, n)
	}

	/// Select up to `limit` unapplied opportunities in the student's declared
	/// domain. The caller supplies the applied-id set from its application
	/// records and a catalog already in presentation order.
	pub fn recommend(
		&self,
		student: &StudentRecord,
		catalog: &[OpportunityRecord],
		applied: &BTreeSet<OpportunityId>,
		limit: usize,
	) -> RecommendationResult {
		recommend::recommend(student, catalog, applied, limit)
	}
}
