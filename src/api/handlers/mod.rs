//! API handlers

pub mod health;
pub mod park;
pub mod slots;
pub mod status;
pub mod users;

use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::domain::DomainError;

/// Map domain failures onto HTTP. `SlotUnavailable` never reaches this:
/// the park handler answers it in-band as routine contention.
pub(crate) fn error_response(e: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        DomainError::SlotUnavailable(_) => StatusCode::CONFLICT,
        DomainError::Transient(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(e.to_string())))
}
