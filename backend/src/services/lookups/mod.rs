//! # Lookup Service Module
//!
//! Aggregate, read-only views over the complete merged lead set. Filters never
//! apply here: the dashboard uses these endpoints to draw its stats cards and to
//! populate the school and country drop-downs.
//!
//! ## Sub-modules:
//! - `stats`: lead counts per source tag.
//! - `schools`: distinct school names.
//! - `countries`: distinct country names.

mod countries;
mod schools;
pub(crate) mod stats;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for lookup routes.
///
/// Must be registered after `services::leads::configure_routes()`, otherwise this
/// broader `/api` scope would swallow `/api/leads/...` requests.
///
/// # Registered Routes:
///
/// *   **`GET /stats`**: `{ totalLeads, schoolsOnly, salesnavOnly, both }`.
/// *   **`GET /schools`**: sorted array of distinct school names.
/// *   **`GET /countries`**: sorted array of distinct country names.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/stats", get().to(stats::process))
        .route("/schools", get().to(schools::process))
        .route("/countries", get().to(countries::process))
}
