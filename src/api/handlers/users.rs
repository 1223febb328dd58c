//! User info endpoint

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::{ApiResponse, UserInfoQuery, UserInfoResponse};
use crate::api::router::ApiState;

use super::error_response;

/// Loyalty counter lookup
///
/// Unknown users answer `{"parking_count":0}`, not an error.
#[utoipa::path(
    get,
    path = "/get_user_info",
    tag = "Users",
    params(UserInfoQuery),
    responses(
        (status = 200, description = "Loyalty counter for the user", body = UserInfoResponse)
    )
)]
pub async fn get_user_info(
    State(state): State<ApiState>,
    Query(query): Query<UserInfoQuery>,
) -> Result<Json<UserInfoResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let parking_count = state
        .loyalty
        .parking_count(query.user_id)
        .await
        .map_err(error_response)?;
    Ok(Json(UserInfoResponse { parking_count }))
}
