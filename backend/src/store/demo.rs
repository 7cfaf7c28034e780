use super::LeadStore;
use chrono::{Duration, SecondsFormat, Utc};
use common::model::lead::{Enrichment, LeadProfile, SalesNavLead, SchoolLead};

/// ISO timestamp `ago` before now, millisecond precision with a `Z` suffix.
fn added_ago(ago: Duration) -> Option<String> {
    Some((Utc::now() - ago).to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

struct Person {
    uid: &'static str,
    name: &'static str,
    handle: &'static str,
    photo: &'static str,
    title: &'static str,
    location: &'static str,
    school: &'static str,
    country: &'static str,
    slug: &'static str,
    added: Duration,
}

impl Person {
    fn profile(&self) -> LeadProfile {
        LeadProfile {
            user_name: text(self.name),
            title: text(self.title),
            linkedin_profile_url: Some(format!("https://linkedin.com/in/{}", self.handle)),
            linkedin_image_url: Some(format!(
                "https://images.unsplash.com/{}?w=100&h=100&fit=crop",
                self.photo
            )),
            location: text(self.location),
            req_school: text(self.school),
            req_country: text(self.country),
            timestamp: added_ago(self.added),
            slug: text(self.slug),
        }
    }

    fn school_lead(&self) -> SchoolLead {
        SchoolLead {
            uid: self.uid.to_string(),
            profile: self.profile(),
        }
    }

    fn salesnav_lead(&self, about: &str, headline: &str, skills: &str, experience: &str) -> SalesNavLead {
        SalesNavLead {
            uid: self.uid.to_string(),
            profile: self.profile(),
            enrichment: Enrichment {
                about: text(about),
                headline: text(headline),
                skills: text(skills),
                experience: text(experience),
            },
        }
    }
}

impl LeadStore {
    /// The demonstration dataset served when no database is configured.
    ///
    /// Two school-only leads, two sales-navigator-only leads, and `uid789`, which
    /// appears in both sources. Timestamps are relative to the moment of loading.
    pub fn demo() -> LeadStore {
        let john = Person {
            uid: "uid123",
            name: "John Richardson",
            handle: "johnrichardson",
            photo: "photo-1507003211169-0a1dd7228f2d",
            title: "Senior Marketing Director",
            location: "San Francisco, CA",
            school: "Stanford University",
            country: "United States",
            slug: "stanford-2024",
            added: Duration::hours(2),
        };
        let emily = Person {
            uid: "uid101",
            name: "Emily Watson",
            handle: "emilywatson",
            photo: "photo-1580489944761-15a19d654956",
            title: "Head of Business Development",
            location: "London, UK",
            school: "Oxford University",
            country: "United Kingdom",
            slug: "oxford-2024",
            added: Duration::days(2),
        };
        let sarah = Person {
            uid: "uid456",
            name: "Sarah Chen",
            handle: "sarahchen",
            photo: "photo-1494790108755-2616b612b786",
            title: "VP of Product Strategy",
            location: "New York, NY",
            school: "Harvard Business School",
            country: "United States",
            slug: "harvard-2024",
            added: Duration::hours(5),
        };
        let michael = Person {
            uid: "uid789",
            name: "Michael Torres",
            handle: "michaeltorres",
            photo: "photo-1472099645785-5658abf4ff4e",
            title: "Chief Technology Officer",
            location: "Austin, TX",
            school: "MIT",
            country: "United States",
            slug: "mit-2024",
            added: Duration::days(1),
        };
        let david = Person {
            uid: "uid112",
            name: "David Kim",
            handle: "davidkim",
            photo: "photo-1519085360753-af0119f7cbe7",
            title: "Senior Sales Director",
            location: "Toronto, Canada",
            school: "University of Toronto",
            country: "Canada",
            slug: "toronto-2024",
            added: Duration::days(3),
        };

        let schools = vec![john.school_lead(), emily.school_lead(), michael.school_lead()];

        let salesnav = vec![
            sarah.salesnav_lead(
                "Experienced product leader with 12+ years in tech strategy and innovation.",
                "VP of Product Strategy at InnovateTech | Harvard MBA | Product Innovation Expert",
                "Product Strategy, Innovation Management, Team Leadership, Data Analytics",
                "VP Product Strategy at InnovateTech (2021-Present), Senior Product Manager at TechCorp (2018-2021)",
            ),
            michael.salesnav_lead(
                "Technology executive with expertise in scalable systems and team leadership.",
                "CTO at ScaleTech | MIT Alum | Engineering Leadership & Architecture",
                "System Architecture, Team Leadership, Cloud Computing, DevOps",
                "CTO at ScaleTech (2020-Present), Senior Engineering Manager at BigTech (2017-2020)",
            ),
            david.salesnav_lead(
                "Sales leadership professional with proven track record in B2B enterprise sales.",
                "Senior Sales Director at GrowthCorp | Enterprise Sales Expert | Revenue Growth",
                "Enterprise Sales, Team Leadership, Customer Relations, Revenue Strategy",
                "Senior Sales Director at GrowthCorp (2019-Present), Sales Manager at SalesForce (2016-2019)",
            ),
        ];

        LeadStore::from_records(schools, salesnav)
    }
}
