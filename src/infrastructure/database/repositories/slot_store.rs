//! SeaORM implementation of SlotStore

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::domain::slot::{Slot, SlotStatus, SlotStore};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::slot;

use super::db_err;

pub struct SeaOrmSlotStore {
    db: DatabaseConnection,
}

impl SeaOrmSlotStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn model_to_domain(m: slot::Model) -> DomainResult<Slot> {
    let status = SlotStatus::parse(&m.status)
        .ok_or_else(|| DomainError::InvalidStatus(m.status.clone()))?;
    Ok(Slot {
        slot_id: m.slot_id,
        area: m.area,
        status,
        updated_at: m.updated_at,
    })
}

// ── Shared statement helpers ────────────────────────────────────
//
// Generic over `ConnectionTrait` so the reservation transaction can run the
// same statements inside its transactional scope.

/// Conditionally transition a slot's status. One `UPDATE ... WHERE slot_id
/// AND status = expected`; the row count decides who won.
pub(crate) async fn compare_and_set_status<C: ConnectionTrait>(
    conn: &C,
    slot_id: &str,
    expected: SlotStatus,
    new: SlotStatus,
) -> Result<bool, sea_orm::DbErr> {
    let result = slot::Entity::update_many()
        .col_expr(slot::Column::Status, Expr::value(new.as_str()))
        .col_expr(slot::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(slot::Column::SlotId.eq(slot_id))
        .filter(slot::Column::Status.eq(expected.as_str()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}

/// Unconditional status write (administrative override). Returns the number
/// of rows touched so callers can detect a missing slot.
pub(crate) async fn set_status<C: ConnectionTrait>(
    conn: &C,
    slot_id: &str,
    new: SlotStatus,
) -> Result<u64, sea_orm::DbErr> {
    let result = slot::Entity::update_many()
        .col_expr(slot::Column::Status, Expr::value(new.as_str()))
        .col_expr(slot::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(slot::Column::SlotId.eq(slot_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

// ── SlotStore impl ──────────────────────────────────────────────

#[async_trait]
impl SlotStore for SeaOrmSlotStore {
    async fn find_by_id(&self, slot_id: &str) -> DomainResult<Option<Slot>> {
        let model = slot::Entity::find_by_id(slot_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn list(&self, area: Option<&str>) -> DomainResult<Vec<Slot>> {
        let mut query = slot::Entity::find().order_by_asc(slot::Column::SlotId);
        if let Some(area) = area {
            query = query.filter(slot::Column::Area.eq(area));
        }
        let models = query.all(&self.db).await.map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn compare_and_set_status(
        &self,
        slot_id: &str,
        expected: SlotStatus,
        new: SlotStatus,
    ) -> DomainResult<bool> {
        compare_and_set_status(&self.db, slot_id, expected, new)
            .await
            .map_err(db_err)
    }

    async fn count(&self) -> DomainResult<u64> {
        slot::Entity::find().count(&self.db).await.map_err(db_err)
    }
}

// ── Tests ──────────────────────────────────────────────────────
