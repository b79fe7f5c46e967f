//! Read-side catalog queries: filtering, search, ordering, and the domain
//! tallies behind dashboard views. Everything here borrows from the caller's
//! slice and leaves it untouched, except `sort_newest_first` which reorders
//! in place on request.

use std::collections::{BTreeMap, BTreeSet};

use crate::classify::DomainLabel;
use crate::record::OpportunityRecord;

/// Opportunities carrying the given domain label, in catalog order.
pub fn with_domain(catalog: &[OpportunityRecord], domain: DomainLabel) -> Vec<&OpportunityRecord> {
    catalog.iter().filter(|opp| opp.domain() == domain).collect()
}

/// Case-insensitive substring search over title and description.
/// An empty query matches every record.
pub fn search<'a>(catalog: &'a [OpportunityRecord], query: &str) -> Vec<&'a OpportunityRecord> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|opp| {
            opp.title.to_lowercase().contains(&needle)
                || opp.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Reorder a catalog newest-first by posted date.
///
/// Stable: records sharing a date keep their relative order. This establishes
/// the ordering `recommend` documents as its precondition.
pub fn sort_newest_first(catalog: &mut [OpportunityRecord]) {
    catalog.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
}

/// How many opportunities each present domain carries.
pub fn domain_distribution(catalog: &[OpportunityRecord]) -> BTreeMap<DomainLabel, usize> {
    let mut counts = BTreeMap::new();
    for opp in catalog {
        *counts.entry(opp.domain()).or_insert(0) += 1;
    }
    counts
}

/// Distinct domains present in the catalog, for filter dropdowns.
pub fn domains_present(catalog: &[OpportunityRecord]) -> BTreeSet<DomainLabel> {
    catalog.iter().map(|opp| opp.domain()).collect()
}
