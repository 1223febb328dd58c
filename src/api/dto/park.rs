//! Park endpoint DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::ParkRequest;

/// Park a vehicle in a specific slot.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ParkRequestDto {
    /// Target slot id, e.g. "SLOT-01"
    #[validate(length(min = 1))]
    pub slot: String,
    #[validate(length(min = 1))]
    pub plate: String,
    #[validate(length(min = 1))]
    pub model: String,
    pub user_id: i32,
}

impl ParkRequestDto {
    pub fn into_domain(self) -> ParkRequest {
        ParkRequest {
            slot_id: self.slot,
            plate: self.plate,
            model: self.model,
            user_id: self.user_id,
        }
    }
}

/// `{"success":true,"new_count":N}` on success; a lost race returns
/// `{"success":false}` with no count.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParkResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_count: Option<i64>,
}

impl ParkResponse {
    pub fn parked(new_count: i64) -> Self {
        Self {
            success: true,
            new_count: Some(new_count),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            new_count: None,
        }
    }
}
