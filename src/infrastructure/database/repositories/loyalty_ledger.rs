//! SeaORM implementation of LoyaltyLedger

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::loyalty::{LoyaltyLedger, User};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::user;

use super::db_err;

pub struct SeaOrmLoyaltyLedger {
    db: DatabaseConnection,
}

impl SeaOrmLoyaltyLedger {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        username: m.username,
        parking_count: m.parking_count,
        created_at: m.created_at,
    }
}

// ── Shared statement helpers ────────────────────────────────────

/// `UPDATE users SET parking_count = parking_count + 1 WHERE id = ?`.
///
/// Only the park transaction calls this; the row count tells it whether the
/// user exists (0 rows rolls the whole park back).
pub(crate) async fn increment_parking_count<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = user::Entity::update_many()
        .col_expr(
            user::Column::ParkingCount,
            Expr::col(user::Column::ParkingCount).add(1),
        )
        .filter(user::Column::Id.eq(user_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

// ── LoyaltyLedger impl ──────────────────────────────────────────

#[async_trait]
impl LoyaltyLedger for SeaOrmLoyaltyLedger {
    async fn find_user(&self, user_id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn parking_count(&self, user_id: i32) -> DomainResult<i64> {
        let model = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        // Unknown user is a benign default, not an error
        Ok(model.map(|u| u.parking_count).unwrap_or(0))
    }
}

// ── Tests ──────────────────────────────────────────────────────
