//! Status board endpoint

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::{ApiResponse, SlotStatusDto, StatusQuery};
use crate::api::router::ApiState;

use super::error_response;

/// Slot status board
///
/// Lists every slot with its status and, where a vehicle is parked, the
/// occupant's plate and model. Optionally filtered to one area.
#[utoipa::path(
    get,
    path = "/status",
    tag = "Status",
    params(StatusQuery),
    responses(
        (status = 200, description = "One row per slot", body = [SlotStatusDto])
    )
)]
pub async fn get_status(
    State(state): State<ApiState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<SlotStatusDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let rows = state
        .status_board
        .list_with_occupant(query.area_filter())
        .await
        .map_err(error_response)?;
    Ok(Json(
        rows.into_iter().map(SlotStatusDto::from_projection).collect(),
    ))
}
