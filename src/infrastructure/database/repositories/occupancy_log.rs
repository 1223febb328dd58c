//! SeaORM implementation of OccupancyLog

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::occupancy::{OccupancyLog, OccupancyRecord};
use crate::domain::reservation::ParkRequest;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::occupancy_record;

use super::db_err;

pub struct SeaOrmOccupancyLog {
    db: DatabaseConnection,
}

impl SeaOrmOccupancyLog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn model_to_domain(m: occupancy_record::Model) -> OccupancyRecord {
    OccupancyRecord {
        id: m.id,
        slot_id: m.slot_id,
        user_id: m.user_id,
        plate: m.plate,
        model: m.model,
        arrival_at: m.arrival_at,
        exit_at: m.exit_at,
    }
}

// ── Shared statement helpers ────────────────────────────────────

/// Insert an open record for a freshly claimed slot. Part of the park
/// transaction; never called outside it.
pub(crate) async fn insert_open<C: ConnectionTrait>(
    conn: &C,
    request: &ParkRequest,
    arrival_at: DateTime<Utc>,
) -> Result<i32, sea_orm::DbErr> {
    let model = occupancy_record::ActiveModel {
        slot_id: Set(request.slot_id.clone()),
        user_id: Set(request.user_id),
        plate: Set(request.plate.clone()),
        model: Set(request.model.clone()),
        arrival_at: Set(arrival_at),
        exit_at: Set(None),
        ..Default::default()
    };
    let inserted = model.insert(conn).await?;
    Ok(inserted.id)
}

/// Close whatever open record the slot has. The filter targets all open rows
/// so a transient invariant violation cannot leave strays behind; repeating
/// the call is a no-op.
pub(crate) async fn close_open_for_slot<C: ConnectionTrait>(
    conn: &C,
    slot_id: &str,
    exit_at: DateTime<Utc>,
) -> Result<u64, sea_orm::DbErr> {
    let result = occupancy_record::Entity::update_many()
        .col_expr(occupancy_record::Column::ExitAt, Expr::value(exit_at))
        .filter(occupancy_record::Column::SlotId.eq(slot_id))
        .filter(occupancy_record::Column::ExitAt.is_null())
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

// ── OccupancyLog impl ───────────────────────────────────────────

#[async_trait]
impl OccupancyLog for SeaOrmOccupancyLog {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<OccupancyRecord>> {
        let model = occupancy_record::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_open_for_slot(&self, slot_id: &str) -> DomainResult<Option<OccupancyRecord>> {
        let model = occupancy_record::Entity::find()
            .filter(occupancy_record::Column::SlotId.eq(slot_id))
            .filter(occupancy_record::Column::ExitAt.is_null())
            .order_by_asc(occupancy_record::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_open(&self) -> DomainResult<Vec<OccupancyRecord>> {
        let models = occupancy_record::Entity::find()
            .filter(occupancy_record::Column::ExitAt.is_null())
            .order_by_asc(occupancy_record::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_slot(&self, slot_id: &str) -> DomainResult<Vec<OccupancyRecord>> {
        let models = occupancy_record::Entity::find()
            .filter(occupancy_record::Column::SlotId.eq(slot_id))
            .order_by_desc(occupancy_record::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
