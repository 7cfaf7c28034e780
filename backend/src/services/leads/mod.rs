//! # Lead Service Module
//!
//! Routes every request under `/api/leads` to its handler.
//!
//! ## Sub-modules:
//! - `list`: the filtered, optionally sorted lead list.
//! - `get`: a single merged lead by `uid`.

mod get;
mod list;

use crate::error::ApiError;
use crate::services::lookups;
use actix_web::web::{get, scope, QueryConfig};
use actix_web::Scope;
use log::debug;

/// The base path for all lead endpoints.
const API_PATH: &str = "/api/leads";

/// Turns any query-string deserialization failure into `400 {"error":"Invalid filters"}`.
fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, req| {
        debug!("Rejected query '{}': {}", req.query_string(), err);
        ApiError::InvalidFilters.into()
    })
}

/// Configures and returns the Actix `Scope` for lead routes.
///
/// # Registered Routes:
///
/// *   **`GET ""`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns the merged leads matching the optional `search`,
///       `school`, `country`, `source`, `sortBy` and `sortOrder` query parameters.
///       A parameter that does not fit the filter schema yields `400`.
///
/// *   **`GET /stats`**:
///     - **Handler**: `lookups::stats::process`
///     - **Description**: Alias of `/api/stats`, kept for the dashboard client,
///       which requests stats under this path. Registered before `/{uid}` so it is
///       not mistaken for a lead lookup.
///
/// *   **`GET /{uid}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns one merged lead, or `404 {"error":"Lead not found"}`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(query_config())
        .route("", get().to(list::process))
        .route("/stats", get().to(lookups::stats::process))
        .route("/{uid}", get().to(get::process))
}
