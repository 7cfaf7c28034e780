use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance of a merged lead: which source collection(s) contributed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    /// Present only in the schools collection.
    Schools,
    /// Present only in the sales navigator collection.
    Salesnav,
    /// Present in both collections.
    Both,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Schools => "schools",
            LeadSource::Salesnav => "salesnav",
            LeadSource::Both => "both",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile and requirement fields carried by both lead sources.
///
/// Every field is optional; the upstream tables allow nulls everywhere except `uid`,
/// which lives on the owning record instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadProfile {
    pub user_name: Option<String>,
    pub title: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub linkedin_image_url: Option<String>,
    pub location: Option<String>,
    pub req_school: Option<String>,
    pub req_country: Option<String>,
    /// ISO-8601 instant the lead was added, kept as text exactly as ingested.
    pub timestamp: Option<String>,
    pub slug: Option<String>,
}

/// Extra profile detail only the sales navigator export provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enrichment {
    pub about: Option<String>,
    pub headline: Option<String>,
    /// Comma-joined list, e.g. `"Enterprise Sales, Team Leadership"`.
    pub skills: Option<String>,
    /// Comma-joined list of past positions.
    pub experience: Option<String>,
}

/// A raw record from the `leads_schools` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolLead {
    pub uid: String,
    #[serde(flatten)]
    pub profile: LeadProfile,
}

/// A raw record from the `leads_salesnav` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesNavLead {
    pub uid: String,
    #[serde(flatten)]
    pub profile: LeadProfile,
    #[serde(flatten)]
    pub enrichment: Enrichment,
}

/// The externally visible lead: one per `uid`, tagged with its provenance.
///
/// Serializes flat, so the JSON carries `uid`, every profile and enrichment field,
/// and `source` side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedLead {
    pub uid: String,
    #[serde(flatten)]
    pub profile: LeadProfile,
    #[serde(flatten)]
    pub enrichment: Enrichment,
    pub source: LeadSource,
}
