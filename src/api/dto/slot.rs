//! Administrative status change DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Administrative status override for one slot.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1))]
    pub slot_id: String,
    /// One of AVAILABLE, OCCUPIED, RESERVED, UNAVAILABLE
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusResponse {
    pub success: bool,
}

impl UpdateStatusResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
