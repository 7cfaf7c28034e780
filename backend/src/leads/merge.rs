use crate::store::Collection;
use common::model::lead::{CombinedLead, Enrichment, LeadSource, SalesNavLead, SchoolLead};

/// Combines both source collections into one lead per `uid`.
///
/// Schools are merged first, so when a `uid` appears in both sources the school
/// copy supplies every profile field (name, title, slug, timestamp, ...) and the
/// sales navigator copy contributes only the enrichment fields. The result lists
/// school leads in their source order followed by sales-navigator-only leads.
/// Neither input is modified.
pub fn merge<'a, S, N>(schools: S, salesnav: N) -> Collection<CombinedLead>
where
    S: IntoIterator<Item = &'a SchoolLead>,
    N: IntoIterator<Item = &'a SalesNavLead>,
{
    let mut merged: Collection<CombinedLead> = schools
        .into_iter()
        .map(|lead| CombinedLead {
            uid: lead.uid.clone(),
            profile: lead.profile.clone(),
            enrichment: Enrichment::default(),
            source: LeadSource::Schools,
        })
        .collect();

    for lead in salesnav {
        match merged.get_mut(&lead.uid) {
            Some(existing) => {
                existing.enrichment = lead.enrichment.clone();
                existing.source = LeadSource::Both;
            }
            None => {
                merged.insert(CombinedLead {
                    uid: lead.uid.clone(),
                    profile: lead.profile.clone(),
                    enrichment: lead.enrichment.clone(),
                    source: LeadSource::Salesnav,
                });
            }
        }
    }

    merged
}
