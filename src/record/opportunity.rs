use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{Classifier, DomainLabel};
use crate::types::identifiers::OpportunityId;

/// An opportunity as submitted, before its domain has been derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityDraft {
    pub title: String,
    /// May be empty; an empty description classifies as `General`.
    pub description: String,
    pub university: String,
    pub posted_date: NaiveDate,
}

/// A classified opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub id: OpportunityId,
    pub title: String,
    pub description: String,
    pub university: String,
    domain: DomainLabel,
    pub posted_date: NaiveDate,
}

impl OpportunityRecord {
    /// Classify a draft into a record.
    ///
    /// This is the ONLY way to construct a fresh record: the domain is derived
    /// from the description exactly once, here, and treated as stored data
    /// afterward. Re-classifying an existing record is deliberately not
    /// expressible — deserialization restores the label that was persisted.
    pub fn ingest(id: OpportunityId, draft: OpportunityDraft, classifier: &impl Classifier) -> Self {
        let domain = classifier.classify(&draft.description);

        OpportunityRecord {
            id,
            title: draft.title,
            description: draft.description,
            university: draft.university,
            domain,
            posted_date: draft.posted_date,
        }
    }

    /// The domain label assigned at ingestion.
    pub fn domain(&self) -> DomainLabel {
        self.domain
    }
}
