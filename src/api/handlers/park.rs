//! Park endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::api::dto::{ApiResponse, ParkRequestDto, ParkResponse};
use crate::api::router::ApiState;
use crate::domain::DomainError;

use super::error_response;

/// Park a vehicle
///
/// Claims the slot, opens an occupancy record and bumps the user's loyalty
/// counter atomically. A slot that is not AVAILABLE (including one lost to a
/// concurrent request) answers `{"success":false}`: routine contention, not
/// an error status.
#[utoipa::path(
    post,
    path = "/park",
    tag = "Reservation",
    request_body = ParkRequestDto,
    responses(
        (status = 200, description = "Parked (success=true, new_count) or slot unavailable (success=false)", body = ParkResponse),
        (status = 404, description = "Slot or user not found"),
        (status = 503, description = "Transient contention, retry with backoff")
    )
)]
pub async fn park(
    State(state): State<ApiState>,
    Json(request): Json<ParkRequestDto>,
) -> Result<Json<ParkResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    request
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e.to_string()))))?;

    match state.reservations.park(request.into_domain()).await {
        Ok(ticket) => Ok(Json(ParkResponse::parked(ticket.parking_count))),
        Err(DomainError::SlotUnavailable(_)) => Ok(Json(ParkResponse::rejected())),
        Err(e) => Err(error_response(e)),
    }
}
