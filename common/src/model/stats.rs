use serde::{Deserialize, Serialize};

/// Aggregate counts over the complete merged lead set.
///
/// Serialized with camelCase keys (`totalLeads`, `schoolsOnly`, `salesnavOnly`, `both`)
/// because that is the shape the dashboard's stats cards read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total_leads: usize,
    pub schools_only: usize,
    pub salesnav_only: usize,
    pub both: usize,
}
