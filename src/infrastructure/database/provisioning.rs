//! One-shot slot provisioning
//!
//! Runs once at deployment, decoupled from request handling. Idempotent:
//! a non-empty slots table means a previous run already seeded the catalog.

use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use crate::domain::slot::SlotStatus;
use crate::domain::DomainResult;

use super::entities::slot;
use super::repositories::db_err;

/// Seed `slots_per_area` slots for each configured area. Slot ids are
/// numbered continuously across areas: SLOT-01..SLOT-03 in the first area,
/// SLOT-04..SLOT-06 in the second, and so on.
pub async fn provision_slots(
    db: &DatabaseConnection,
    areas: &[String],
    slots_per_area: u32,
) -> DomainResult<()> {
    let existing = slot::Entity::find().count(db).await.map_err(db_err)?;
    if existing > 0 {
        info!(slots = existing, "Slot catalog already provisioned, skipping");
        return Ok(());
    }

    let now = Utc::now();
    let mut models = Vec::new();
    for (area_index, area) in areas.iter().enumerate() {
        for offset in 0..slots_per_area {
            let number = area_index as u32 * slots_per_area + offset + 1;
            models.push(slot::ActiveModel {
                slot_id: Set(format!("SLOT-{number:02}")),
                area: Set(area.clone()),
                status: Set(SlotStatus::Available.as_str().to_string()),
                updated_at: Set(now),
            });
        }
    }

    if models.is_empty() {
        return Ok(());
    }

    let total = models.len();
    slot::Entity::insert_many(models)
        .exec(db)
        .await
        .map_err(db_err)?;
    info!(slots = total, areas = areas.len(), "Provisioned parking slots");
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────
