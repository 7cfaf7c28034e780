use crate::error::{json_ok, ApiError};
use crate::leads;
use crate::store::LeadStore;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /api/countries`.
pub(crate) async fn process(store: web::Data<LeadStore>) -> Result<HttpResponse, ApiError> {
    json_ok(&leads::countries(&store))
}
