use crate::leads::collate::CollationKey;
use common::model::lead::CombinedLead;
use common::requests::{LeadsFilters, SortBy, SortOrder};

/// Lowercased search term, or `None` when the parameter is missing or blank.
fn term(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

fn contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

fn sort_value(lead: &CombinedLead, sort_by: SortBy) -> &str {
    let field = match sort_by {
        SortBy::Name => &lead.profile.user_name,
        SortBy::Title => &lead.profile.title,
        SortBy::Location => &lead.profile.location,
        SortBy::Timestamp => &lead.profile.timestamp,
    };
    field.as_deref().unwrap_or("")
}

/// Applies `filters` to a merged lead list and returns the matching leads.
///
/// `search` matches a lead when any of name, title, location or school contains the
/// term; `school` and `country` match their own column; `source` must match exactly.
/// Text matching is a case-insensitive substring test and a null column never matches.
///
/// When `sort_by` is set the result is ordered with [`CollationKey`], missing values
/// sorting as the empty string. The sort is stable and `desc` only flips the
/// comparison, so leads with equal keys keep the order they had in `leads`.
pub fn apply(leads: &[CombinedLead], filters: &LeadsFilters) -> Vec<CombinedLead> {
    let search = term(&filters.search);
    let school = term(&filters.school);
    let country = term(&filters.country);

    let mut matched: Vec<&CombinedLead> = leads
        .iter()
        .filter(|lead| match &search {
            Some(s) => {
                contains(&lead.profile.user_name, s)
                    || contains(&lead.profile.title, s)
                    || contains(&lead.profile.location, s)
                    || contains(&lead.profile.req_school, s)
            }
            None => true,
        })
        .filter(|lead| match &school {
            Some(s) => contains(&lead.profile.req_school, s),
            None => true,
        })
        .filter(|lead| match &country {
            Some(c) => contains(&lead.profile.req_country, c),
            None => true,
        })
        .filter(|lead| match filters.source {
            Some(source) => lead.source == source,
            None => true,
        })
        .collect();

    if let Some(sort_by) = filters.sort_by {
        let descending = filters.sort_order == Some(SortOrder::Desc);
        let mut keyed: Vec<(CollationKey, &CombinedLead)> = matched
            .into_iter()
            .map(|lead| (CollationKey::new(sort_value(lead, sort_by)), lead))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| {
            let ordering = a.cmp(b);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        matched = keyed.into_iter().map(|(_, lead)| lead).collect();
    }

    matched.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::lead::{Enrichment, LeadProfile, LeadSource};

    fn lead(uid: &str, name: &str, location: &str, school: &str, country: &str) -> CombinedLead {
        CombinedLead {
            uid: uid.to_string(),
            profile: LeadProfile {
                user_name: Some(name.to_string()),
                title: Some(format!("{name} title")),
                location: Some(location.to_string()),
                req_school: Some(school.to_string()),
                req_country: Some(country.to_string()),
                ..LeadProfile::default()
            },
            enrichment: Enrichment::default(),
            source: LeadSource::Schools,
        }
    }

    fn sample() -> Vec<CombinedLead> {
        let mut leads = vec![
            lead("1", "John Richardson", "San Francisco, CA", "Stanford University", "United States"),
            lead("2", "Emily Watson", "London, UK", "Oxford University", "United Kingdom"),
            lead("3", "David Kim", "Toronto, Canada", "University of Toronto", "Canada"),
            lead("4", "Michael Torres", "Austin, TX", "MIT", "United States"),
        ];
        leads[2].source = LeadSource::Salesnav;
        leads[3].source = LeadSource::Both;
        leads
    }

    fn uids(leads: &[CombinedLead]) -> Vec<&str> {
        leads.iter().map(|l| l.uid.as_str()).collect()
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let leads = sample();
        let result = apply(&leads, &LeadsFilters::default());
        assert_eq!(result, leads);
    }

    #[test]
    fn search_is_case_insensitive_on_location() {
        let leads = vec![
            lead("1", "Ann", "Toronto, Canada", "X", "Canada"),
            lead("2", "Bob", "Paris, France", "Y", "France"),
        ];
        for term in ["toronto", "TORONTO", "ToRoNtO"] {
            let filters = LeadsFilters {
                search: Some(term.to_string()),
                ..LeadsFilters::default()
            };
            assert_eq!(uids(&apply(&leads, &filters)), vec!["1"]);
        }
    }

    #[test]
    fn search_matches_any_of_four_fields() {
        let leads = sample();
        let by = |term: &str| {
            let filters = LeadsFilters {
                search: Some(term.to_string()),
                ..LeadsFilters::default()
            };
            apply(&leads, &filters)
        };

        assert_eq!(uids(&by("watson")), vec!["2"]);
        assert_eq!(uids(&by("torres title")), vec!["4"]);
        assert_eq!(uids(&by("austin")), vec!["4"]);
        assert_eq!(uids(&by("oxford")), vec!["2"]);
        // country is not a search field
        assert!(by("kingdom").is_empty());
    }

    #[test]
    fn school_and_country_combine_with_and() {
        let leads = sample();
        let filters = LeadsFilters {
            school: Some("university".to_string()),
            country: Some("united".to_string()),
            ..LeadsFilters::default()
        };
        assert_eq!(uids(&apply(&leads, &filters)), vec!["1", "2"]);
    }

    #[test]
    fn source_is_an_exact_match() {
        let leads = sample();
        let filters = LeadsFilters {
            source: Some(LeadSource::Both),
            ..LeadsFilters::default()
        };
        assert_eq!(uids(&apply(&leads, &filters)), vec!["4"]);
    }

    #[test]
    fn null_fields_never_match() {
        let mut leads = sample();
        leads[0].profile.req_school = None;
        let filters = LeadsFilters {
            school: Some("stanford".to_string()),
            ..LeadsFilters::default()
        };
        assert!(apply(&leads, &filters).is_empty());
    }

    #[test]
    fn blank_terms_are_ignored() {
        let leads = sample();
        let filters = LeadsFilters {
            search: Some(String::new()),
            school: Some(String::new()),
            ..LeadsFilters::default()
        };
        assert_eq!(apply(&leads, &filters).len(), leads.len());
    }

    #[test]
    fn sorts_by_name_both_directions() {
        let leads = sample();
        let mut filters = LeadsFilters {
            sort_by: Some(SortBy::Name),
            ..LeadsFilters::default()
        };
        assert_eq!(uids(&apply(&leads, &filters)), vec!["3", "2", "1", "4"]);

        filters.sort_order = Some(SortOrder::Desc);
        assert_eq!(uids(&apply(&leads, &filters)), vec!["4", "1", "2", "3"]);
    }

    #[test]
    fn missing_sort_values_sort_as_empty() {
        let mut leads = sample();
        leads[3].profile.timestamp = Some("2024-05-01T00:00:00.000Z".to_string());
        leads[1].profile.timestamp = Some("2024-01-01T00:00:00.000Z".to_string());
        let filters = LeadsFilters {
            sort_by: Some(SortBy::Timestamp),
            ..LeadsFilters::default()
        };
        assert_eq!(uids(&apply(&leads, &filters)), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let mut leads = sample();
        for l in leads.iter_mut() {
            l.profile.location = Some("Remote".to_string());
        }
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let filters = LeadsFilters {
                sort_by: Some(SortBy::Location),
                sort_order: Some(order),
                ..LeadsFilters::default()
            };
            assert_eq!(uids(&apply(&leads, &filters)), vec!["1", "2", "3", "4"]);
        }
    }

    #[test]
    fn filtering_is_idempotent_and_leaves_input_alone() {
        let leads = sample();
        let before = leads.clone();
        let filters = LeadsFilters {
            search: Some("university".to_string()),
            sort_by: Some(SortBy::Title),
            sort_order: Some(SortOrder::Desc),
            ..LeadsFilters::default()
        };

        let once = apply(&leads, &filters);
        let twice = apply(&once, &filters);

        assert_eq!(once, twice);
        assert_eq!(leads, before);
    }
}
