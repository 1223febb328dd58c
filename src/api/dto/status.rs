//! Status board DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::SlotOccupancy;

/// Area filter for the status board. `All` or absent means every area.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StatusQuery {
    pub area: Option<String>,
}

impl StatusQuery {
    /// The effective filter: `None` when no area or the `All` pseudo-area
    /// was requested.
    pub fn area_filter(&self) -> Option<&str> {
        match self.area.as_deref() {
            None | Some("All") => None,
            Some(area) => Some(area),
        }
    }
}

/// One status board row. `plate`/`model` are null when the slot has no open
/// occupancy record, regardless of its status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlotStatusDto {
    pub slot_id: String,
    pub status: String,
    pub area: String,
    pub plate: Option<String>,
    pub model: Option<String>,
}

impl SlotStatusDto {
    pub fn from_projection(row: SlotOccupancy) -> Self {
        Self {
            slot_id: row.slot.slot_id,
            status: row.slot.status.as_str().to_string(),
            area: row.slot.area,
            plate: row.plate,
            model: row.model,
        }
    }
}
