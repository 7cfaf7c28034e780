//! Error type shared by every HTTP handler.
//!
//! Each variant maps to one status code and one fixed client-facing message,
//! always rendered as `{ "error": "<message>" }`. Internal details are logged
//! server-side and never sent to the client.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorBody;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The `/api/leads` query string did not match the filter schema.
    #[error("Invalid filters")]
    InvalidFilters,

    #[error("Lead not found")]
    LeadNotFound,

    /// No route matched the request path.
    #[error("Not found")]
    RouteNotFound,

    #[error("Internal server error")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("JSON serialization failed: {}", err))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidFilters => StatusCode::BAD_REQUEST,
            ApiError::LeadNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(detail) = self {
            error!("Request failed: {}", detail);
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Serializes `value` into a `200 OK` JSON response.
pub fn json_ok<T: serde::Serialize>(value: &T) -> Result<HttpResponse, ApiError> {
    let body = serde_json::to_vec(value)?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}
