//! Administrative slot status endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::api::dto::{ApiResponse, UpdateStatusRequest, UpdateStatusResponse};
use crate::api::router::ApiState;

use super::error_response;

/// Override a slot's status
///
/// Unconditional administrative transition. Moving away from OCCUPIED closes
/// the slot's open occupancy record; forcing OCCUPIED creates none.
/// Idempotent.
#[utoipa::path(
    post,
    path = "/update_status",
    tag = "Reservation",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status applied", body = UpdateStatusResponse),
        (status = 400, description = "Unrecognized status value"),
        (status = 404, description = "Slot not found")
    )
)]
pub async fn update_status(
    State(state): State<ApiState>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    request
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e.to_string()))))?;

    state
        .reservations
        .change_status(&request.slot_id, &request.status)
        .await
        .map_err(error_response)?;
    Ok(Json(UpdateStatusResponse::ok()))
}
