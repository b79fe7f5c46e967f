use std::collections::BTreeSet;

use crate::record::{OpportunityRecord, StudentRecord};
use crate::types::identifiers::OpportunityId;
use crate::types::outcome::{RecommendationMetadata, RecommendationResult};

/// Select up to `limit` opportunities in the student's declared domain that
/// the student has not applied to yet.
///
/// Catalog order is a caller precondition — typically newest-first — and is
/// preserved as-is; this pass only filters and truncates, it never re-sorts.
/// The applied-id set is status-agnostic: a rejected application excludes the
/// opportunity exactly like an accepted one. `limit == 0`, an empty catalog,
/// or no matches all yield an empty (never erroneous) result. No input is
/// mutated.
pub fn recommend(
    student: &StudentRecord,
    catalog: &[OpportunityRecord],
    applied: &BTreeSet<OpportunityId>,
    limit: usize,
) -> RecommendationResult {
    let mut opportunities = Vec::new();
    let mut domain_matches = 0;
    let mut excluded_applied = 0;
    let mut excluded_by_limit = 0;

    for opportunity in catalog {
        if opportunity.domain() != student.domain_interest {
            continue;
        }
        domain_matches += 1;

        if applied.contains(&opportunity.id) {
            excluded_applied += 1;
        } else if opportunities.len() < limit {
            opportunities.push(opportunity.clone());
        } else {
            excluded_by_limit += 1;
        }
    }

    let metadata = RecommendationMetadata {
        domain: student.domain_interest,
        limit,
        catalog_size: catalog.len(),
        domain_matches,
        excluded_applied,
        excluded_by_limit,
        recommended: opportunities.len(),
    };

    RecommendationResult {
        opportunities,
        recommendation: metadata,
    }
}
