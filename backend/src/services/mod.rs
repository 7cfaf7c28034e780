pub mod leads;
pub mod lookups;

use crate::error::ApiError;
use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;

async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::RouteNotFound)
}

/// Registers every API scope plus the JSON 404 fallback.
///
/// The lead scope goes first: `lookups` owns the broader `/api` prefix.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(leads::configure_routes())
        .service(lookups::configure_routes())
        .default_service(web::route().to(not_found));
}
