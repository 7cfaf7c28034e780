//! # Lead Queries
//!
//! Read-only operations behind the HTTP query surface. Every call merges the two
//! source collections of a [`LeadStore`] afresh and derives its answer from that
//! merged view, so results always reflect the store as it is at call time.
//!
//! - `merge`: builds one `CombinedLead` per `uid`, tagged with its source.
//! - `filter`: text search, categorical filters and single-column sorting.
//! - `stats`: per-source counts and distinct school/country listings.
//! - `collate`: the string ordering shared by sorting and distinct listings.

mod collate;
mod filter;
mod merge;
mod stats;

use crate::store::{Collection, LeadStore};
use common::model::lead::CombinedLead;
use common::model::stats::LeadStats;
use common::requests::LeadsFilters;

fn merged(store: &LeadStore) -> Collection<CombinedLead> {
    merge::merge(store.schools().iter(), store.salesnav().iter())
}

/// All leads matching `filters`, sorted if requested.
pub fn list(store: &LeadStore, filters: &LeadsFilters) -> Vec<CombinedLead> {
    filter::apply(merged(store).as_slice(), filters)
}

/// The merged lead for `uid`, if either source has it.
pub fn get_one(store: &LeadStore, uid: &str) -> Option<CombinedLead> {
    merged(store).get(uid).cloned()
}

/// Counts over the complete, unfiltered merged set.
pub fn stats(store: &LeadStore) -> LeadStats {
    stats::lead_stats(merged(store).as_slice())
}

pub fn schools(store: &LeadStore) -> Vec<String> {
    stats::unique_schools(merged(store).as_slice())
}

pub fn countries(store: &LeadStore) -> Vec<String> {
    stats::unique_countries(merged(store).as_slice())
}
