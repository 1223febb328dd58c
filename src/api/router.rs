//! API router with Swagger UI

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::{health, park, slots, status, users};
use crate::application::{LoyaltyService, ReservationService, StatusBoardService};
use crate::domain::RepositoryProvider;

/// Shared state for all routes.
#[derive(Clone)]
pub struct ApiState {
    pub reservations: Arc<ReservationService>,
    pub status_board: Arc<StatusBoardService>,
    pub loyalty: Arc<LoyaltyService>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        status::get_status,
        park::park,
        slots::update_status,
        users::get_user_info,
    ),
    components(schemas(
        SlotStatusDto,
        ParkRequestDto,
        ParkResponse,
        UpdateStatusRequest,
        UpdateStatusResponse,
        UserInfoResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "Status", description = "Read-only slot status board"),
        (name = "Reservation", description = "Slot reservation and administrative overrides"),
        (name = "Users", description = "Loyalty counters"),
        (name = "Health", description = "Service health"),
    )
)]
struct ApiDoc;

/// Build the REST API router over the repository provider.
pub fn create_api_router(repos: Arc<dyn RepositoryProvider>) -> Router {
    let state = ApiState {
        reservations: Arc::new(ReservationService::new(Arc::clone(&repos))),
        status_board: Arc::new(StatusBoardService::new(Arc::clone(&repos))),
        loyalty: Arc::new(LoyaltyService::new(repos)),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/status", get(status::get_status))
        .route("/park", post(park::park))
        .route("/update_status", post(slots::update_status))
        .route("/get_user_info", get(users::get_user_info))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
