use crate::error::{json_ok, ApiError};
use crate::leads;
use crate::store::LeadStore;
use actix_web::{web, HttpResponse};
use common::requests::LeadsFilters;
use log::debug;

/// Actix web handler for `GET /api/leads`.
///
/// The filters have already been validated by the `Query` extractor; a malformed
/// query string never reaches this function.
pub(crate) async fn process(
    store: web::Data<LeadStore>,
    filters: web::Query<LeadsFilters>,
) -> Result<HttpResponse, ApiError> {
    let filters = filters.into_inner();
    let leads = leads::list(&store, &filters);
    debug!(
        "Listing {} leads (source: {})",
        leads.len(),
        filters
            .source
            .map(|source| source.to_string())
            .unwrap_or_else(|| "any".to_string())
    );
    json_ok(&leads)
}

#[cfg(test)]
mod tests {
    use crate::services;
    use crate::store::LeadStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::lead::{CombinedLead, LeadSource};
    use common::responses::ErrorBody;

    async fn get_leads(query: &str) -> (StatusCode, actix_web::web::Bytes) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(LeadStore::demo()))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::get()
            .uri(&format!("/api/leads{}", query))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body(resp).await)
    }

    fn uids(leads: &[CombinedLead]) -> Vec<&str> {
        leads.iter().map(|l| l.uid.as_str()).collect()
    }

    #[actix_web::test]
    async fn lists_every_merged_lead() {
        let (status, body) = get_leads("").await;
        assert_eq!(status, StatusCode::OK);

        let leads: Vec<CombinedLead> = serde_json::from_slice(&body).unwrap();
        assert_eq!(uids(&leads), vec!["uid123", "uid101", "uid789", "uid456", "uid112"]);

        let michael = leads.iter().find(|l| l.uid == "uid789").unwrap();
        assert_eq!(michael.source, LeadSource::Both);
        assert!(michael.enrichment.headline.is_some());
    }

    #[actix_web::test]
    async fn search_is_case_insensitive() {
        let (status, body) = get_leads("?search=TORONTO").await;
        assert_eq!(status, StatusCode::OK);

        let leads: Vec<CombinedLead> = serde_json::from_slice(&body).unwrap();
        assert_eq!(uids(&leads), vec!["uid112"]);
        assert_eq!(leads[0].profile.location.as_deref(), Some("Toronto, Canada"));
    }

    #[actix_web::test]
    async fn combines_filters_and_sorting() {
        let (status, body) =
            get_leads("?country=united%20states&sortBy=name&sortOrder=desc").await;
        assert_eq!(status, StatusCode::OK);

        let leads: Vec<CombinedLead> = serde_json::from_slice(&body).unwrap();
        assert_eq!(uids(&leads), vec!["uid456", "uid789", "uid123"]);
    }

    #[actix_web::test]
    async fn filters_by_source() {
        let (_, body) = get_leads("?source=salesnav").await;
        let leads: Vec<CombinedLead> = serde_json::from_slice(&body).unwrap();
        assert_eq!(uids(&leads), vec!["uid456", "uid112"]);
    }

    #[actix_web::test]
    async fn empty_text_filters_are_ignored() {
        let (status, body) = get_leads("?search=&school=&country=").await;
        assert_eq!(status, StatusCode::OK);

        let leads: Vec<CombinedLead> = serde_json::from_slice(&body).unwrap();
        assert_eq!(leads.len(), 5);
    }

    #[actix_web::test]
    async fn blank_enum_params_are_bad_request() {
        for query in ["?source=", "?source=%20%20", "?sortBy=", "?sortOrder=%20"] {
            let (status, body) = get_leads(query).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "query {query}");

            let error: ErrorBody = serde_json::from_slice(&body).unwrap();
            assert_eq!(error.error, "Invalid filters");
        }
    }

    #[actix_web::test]
    async fn invalid_enum_is_bad_request() {
        for query in ["?source=linkedin", "?sortBy=salary", "?sortOrder=sideways"] {
            let (status, body) = get_leads(query).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "query {query}");

            let error: ErrorBody = serde_json::from_slice(&body).unwrap();
            assert_eq!(error.error, "Invalid filters");
        }
    }

    #[actix_web::test]
    async fn no_match_is_an_empty_array() {
        let (status, body) = get_leads("?search=nobody-by-this-name").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"[]");
    }
}
