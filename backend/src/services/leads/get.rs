//! # Lead Retrieval Service
//!
//! Backs `GET /api/leads/{uid}`. The lead is looked up in a freshly merged view of
//! both sources, so a `uid` present in either collection is found and carries
//! the same `source` tag it has in the list endpoint.

use crate::error::{json_ok, ApiError};
use crate::leads;
use crate::store::LeadStore;
use actix_web::{web, HttpResponse};
use log::debug;

/// Actix web handler for `GET /api/leads/{uid}`.
///
/// # Returns
/// - `200 OK` with the `CombinedLead` as JSON.
/// - `404 Not Found` with `{"error":"Lead not found"}` when no source has the `uid`.
pub(crate) async fn process(
    store: web::Data<LeadStore>,
    uid: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    match leads::get_one(&store, &uid) {
        Some(lead) => json_ok(&lead),
        None => {
            debug!("Lead {} not found", uid);
            Err(ApiError::LeadNotFound)
        }
    }
}
