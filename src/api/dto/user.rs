//! User info DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct UserInfoQuery {
    pub user_id: i32,
}

/// Loyalty counter for a user; 0 for unknown users, never an error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserInfoResponse {
    pub parking_count: i64,
}
