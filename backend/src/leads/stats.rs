use crate::leads::collate::CollationKey;
use common::model::lead::{CombinedLead, LeadSource};
use common::model::stats::LeadStats;
use std::collections::HashSet;

/// Counts leads per source tag. `total_leads` is always the sum of the three tags.
pub fn lead_stats(leads: &[CombinedLead]) -> LeadStats {
    leads.iter().fold(LeadStats::default(), |mut stats, lead| {
        match lead.source {
            LeadSource::Schools => stats.schools_only += 1,
            LeadSource::Salesnav => stats.salesnav_only += 1,
            LeadSource::Both => stats.both += 1,
        }
        stats.total_leads += 1;
        stats
    })
}

/// Deduplicated non-empty values, sorted with [`CollationKey`].
fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let unique: HashSet<&str> = values.flatten().filter(|v| !v.is_empty()).collect();

    let mut keyed: Vec<CollationKey> = unique.into_iter().map(CollationKey::new).collect();
    keyed.sort();
    keyed.into_iter().map(CollationKey::into_raw).collect()
}

pub fn unique_schools(leads: &[CombinedLead]) -> Vec<String> {
    distinct(leads.iter().map(|lead| lead.profile.req_school.as_deref()))
}

pub fn unique_countries(leads: &[CombinedLead]) -> Vec<String> {
    distinct(leads.iter().map(|lead| lead.profile.req_country.as_deref()))
}
