//! SeaORM implementation of ReservationStore
//!
//! Each operation is one database transaction. Same-slot writers serialize
//! on that boundary; the compare-and-set row count decides races. There is
//! no per-slot mutex anywhere above the store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::debug;

use crate::domain::reservation::{ParkRequest, ParkTicket, ReservationStore};
use crate::domain::slot::SlotStatus;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{slot, user};

use super::{db_err, loyalty_ledger, occupancy_log, slot_store, txn_err};

pub struct SeaOrmReservationStore {
    db: DatabaseConnection,
}

impl SeaOrmReservationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn slot_not_found(slot_id: &str) -> DomainError {
    DomainError::NotFound {
        entity: "Slot",
        field: "slot_id",
        value: slot_id.to_string(),
    }
}

#[async_trait]
impl ReservationStore for SeaOrmReservationStore {
    async fn park(&self, request: ParkRequest) -> DomainResult<ParkTicket> {
        debug!(
            slot_id = %request.slot_id,
            user_id = request.user_id,
            "park transaction begin"
        );

        self.db
            .transaction::<_, ParkTicket, DomainError>(move |txn| {
                Box::pin(async move {
                    let slot = slot::Entity::find_by_id(request.slot_id.as_str())
                        .one(txn)
                        .await
                        .map_err(db_err)?;
                    if slot.is_none() {
                        return Err(slot_not_found(&request.slot_id));
                    }

                    let claimed = slot_store::compare_and_set_status(
                        txn,
                        &request.slot_id,
                        SlotStatus::Available,
                        SlotStatus::Occupied,
                    )
                    .await
                    .map_err(db_err)?;
                    if !claimed {
                        // Lost the race or the slot was not AVAILABLE;
                        // nothing has been written.
                        return Err(DomainError::SlotUnavailable(request.slot_id.clone()));
                    }

                    let record_id = occupancy_log::insert_open(txn, &request, Utc::now())
                        .await
                        .map_err(db_err)?;

                    let updated = loyalty_ledger::increment_parking_count(txn, request.user_id)
                        .await
                        .map_err(db_err)?;
                    if updated == 0 {
                        // Unknown user rolls back the slot claim and the
                        // record insert with it.
                        return Err(DomainError::NotFound {
                            entity: "User",
                            field: "id",
                            value: request.user_id.to_string(),
                        });
                    }

                    let parking_count = user::Entity::find_by_id(request.user_id)
                        .one(txn)
                        .await
                        .map_err(db_err)?
                        .map(|u| u.parking_count)
                        .unwrap_or(0);

                    Ok(ParkTicket {
                        record_id,
                        parking_count,
                    })
                })
            })
            .await
            .map_err(txn_err)
    }

    async fn change_status(&self, slot_id: &str, new_status: SlotStatus) -> DomainResult<()> {
        debug!(slot_id, status = %new_status, "change_status transaction begin");

        let slot_id = slot_id.to_string();
        self.db
            .transaction::<_, (), DomainError>(move |txn| {
                Box::pin(async move {
                    let rows = slot_store::set_status(txn, &slot_id, new_status)
                        .await
                        .map_err(db_err)?;
                    if rows == 0 {
                        return Err(slot_not_found(&slot_id));
                    }

                    if new_status.releases_occupancy() {
                        occupancy_log::close_open_for_slot(txn, &slot_id, Utc::now())
                            .await
                            .map_err(db_err)?;
                    }
                    // Forcing OCCUPIED creates no record: the slot may be
                    // OCCUPIED with no open record and projections tolerate it.

                    Ok(())
                })
            })
            .await
            .map_err(txn_err)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectOptions, Database, PaginatorTrait, QueryFilter, Set,
    };
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::domain::occupancy::OccupancyLog;
    use crate::domain::slot::SlotStore;
    use crate::infrastructure::database::entities::occupancy_record;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::provisioning::provision_slots;
    use crate::infrastructure::database::repositories::{SeaOrmOccupancyLog, SeaOrmSlotStore};

    /// Temp-file SQLite with a single pooled connection: transactions then
    /// serialize at the pool, so SQLite write contention cannot surface as
    /// spurious errors and the CAS row count alone decides races.
    async fn setup() -> (tempfile::TempDir, DatabaseConnection) {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("parking.db").display()
        );
        let mut opts = ConnectOptions::new(url);
        opts.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await.expect("connect");
        Migrator::up(&db, None).await.expect("migrations");

        let areas: Vec<String> = ["Hayatabad", "University Road"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        provision_slots(&db, &areas, 3).await.expect("provisioning");

        user::ActiveModel {
            username: Set("alice".to_string()),
            parking_count: Set(0),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("seed user");

        (dir, db)
    }

    fn park_request(slot_id: &str, plate: &str) -> ParkRequest {
        ParkRequest {
            slot_id: slot_id.to_string(),
            plate: plate.to_string(),
            model: "Civic".to_string(),
            user_id: 1,
        }
    }

    async fn open_record_count(db: &DatabaseConnection, slot_id: &str) -> u64 {
        occupancy_record::Entity::find()
            .filter(occupancy_record::Column::SlotId.eq(slot_id))
            .filter(occupancy_record::Column::ExitAt.is_null())
            .count(db)
            .await
            .expect("count")
    }

    #[tokio::test]
    async fn park_claims_slot_opens_record_and_bumps_counter() {
        let (_dir, db) = setup().await;
        let store = SeaOrmReservationStore::new(db.clone());

        let ticket = store.park(park_request("SLOT-01", "ABC-123")).await.unwrap();
        assert_eq!(ticket.parking_count, 1);

        let slots = SeaOrmSlotStore::new(db.clone());
        let slot = slots.find_by_id("SLOT-01").await.unwrap().unwrap();
        assert_eq!(slot.status, SlotStatus::Occupied);

        let log = SeaOrmOccupancyLog::new(db.clone());
        let open = log.find_open_for_slot("SLOT-01").await.unwrap().unwrap();
        assert_eq!(open.id, ticket.record_id);
        assert_eq!(open.plate, "ABC-123");
        assert!(open.is_open());
    }

    #[tokio::test]
    async fn park_on_occupied_slot_is_unavailable() {
        let (_dir, db) = setup().await;
        let store = SeaOrmReservationStore::new(db.clone());

        store.park(park_request("SLOT-01", "ABC-123")).await.unwrap();
        let err = store
            .park(park_request("SLOT-01", "XYZ-999"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotUnavailable(_)));

        // The loser wrote nothing
        assert_eq!(open_record_count(&db, "SLOT-01").await, 1);
        let log = SeaOrmOccupancyLog::new(db.clone());
        let open = log.find_open_for_slot("SLOT-01").await.unwrap().unwrap();
        assert_eq!(open.plate, "ABC-123");
    }

    #[tokio::test]
    async fn concurrent_parks_have_exactly_one_winner() {
        let (_dir, db) = setup().await;
        let store = Arc::new(SeaOrmReservationStore::new(db.clone()));

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .park(park_request("SLOT-02", &format!("PLATE-{i}")))
                    .await
            }));
        }

        let mut winners = Vec::new();
        let mut losers = 0;
        for handle in handles {
            match handle.await.expect("task") {
                Ok(ticket) => winners.push(ticket),
                Err(DomainError::SlotUnavailable(_)) => losers += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(winners.len(), 1);
        assert_eq!(losers, 7);
        assert_eq!(open_record_count(&db, "SLOT-02").await, 1);

        let slots = SeaOrmSlotStore::new(db.clone());
        let slot = slots.find_by_id("SLOT-02").await.unwrap().unwrap();
        assert_eq!(slot.status, SlotStatus::Occupied);

        // Exactly one loyalty increment across all attempts
        let count = user::Entity::find_by_id(1)
            .one(&db)
            .await
            .unwrap()
            .unwrap()
            .parking_count;
        assert_eq!(count, 1);
    }

    /// Full pool: each transaction gets its own connection, so losers can
    /// surface either as a lost compare-and-set or as SQLite write
    /// contention. Both are routine; neither may come back as Storage.
    #[tokio::test]
    async fn pooled_concurrent_parks_never_fail_hard() {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("parking.db").display()
        );
        let mut opts = ConnectOptions::new(url);
        opts.max_connections(5).sqlx_logging(false);
        let db = Database::connect(opts).await.expect("connect");
        Migrator::up(&db, None).await.expect("migrations");
        provision_slots(&db, &["Hayatabad".to_string()], 3)
            .await
            .expect("provisioning");
        user::ActiveModel {
            username: Set("alice".to_string()),
            parking_count: Set(0),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("seed user");

        let store = Arc::new(SeaOrmReservationStore::new(db.clone()));
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .park(park_request("SLOT-02", &format!("PLATE-{i}")))
                    .await
            }));
        }

        let mut winners = 0;
        for handle in handles {
            match handle.await.expect("task") {
                Ok(_) => winners += 1,
                Err(DomainError::SlotUnavailable(_)) | Err(DomainError::Transient(_)) => {}
                Err(other) => panic!("contention must stay retryable, got: {other}"),
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(open_record_count(&db, "SLOT-02").await, 1);

        let slots = SeaOrmSlotStore::new(db.clone());
        let slot = slots.find_by_id("SLOT-02").await.unwrap().unwrap();
        assert_eq!(slot.status, SlotStatus::Occupied);
    }

    #[tokio::test]
    async fn park_unknown_user_rolls_everything_back() {
        let (_dir, db) = setup().await;
        let store = SeaOrmReservationStore::new(db.clone());

        let mut request = park_request("SLOT-01", "ABC-123");
        request.user_id = 999;
        let err = store.park(request).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));

        // The slot claim rolled back with the rest of the transaction
        let slots = SeaOrmSlotStore::new(db.clone());
        let slot = slots.find_by_id("SLOT-01").await.unwrap().unwrap();
        assert_eq!(slot.status, SlotStatus::Available);
        assert_eq!(open_record_count(&db, "SLOT-01").await, 0);
    }

    #[tokio::test]
    async fn park_missing_slot_is_not_found() {
        let (_dir, db) = setup().await;
        let store = SeaOrmReservationStore::new(db.clone());

        let err = store
            .park(park_request("SLOT-99", "ABC-123"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Slot", .. }));
    }

    #[tokio::test]
    async fn release_closes_open_record_and_is_idempotent() {
        let (_dir, db) = setup().await;
        let store = SeaOrmReservationStore::new(db.clone());

        store.park(park_request("SLOT-01", "ABC-123")).await.unwrap();
        store
            .change_status("SLOT-01", SlotStatus::Available)
            .await
            .unwrap();

        let slots = SeaOrmSlotStore::new(db.clone());
        let slot = slots.find_by_id("SLOT-01").await.unwrap().unwrap();
        assert_eq!(slot.status, SlotStatus::Available);
        assert_eq!(open_record_count(&db, "SLOT-01").await, 0);

        let log = SeaOrmOccupancyLog::new(db.clone());
        let history = log.find_by_slot("SLOT-01").await.unwrap();
        assert_eq!(history.len(), 1);
        let exit_at = history[0].exit_at.expect("closed");

        // Second release: same final state, the closed record untouched
        store
            .change_status("SLOT-01", SlotStatus::Available)
            .await
            .unwrap();
        let history = log.find_by_slot("SLOT-01").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].exit_at, Some(exit_at));
    }

    #[tokio::test]
    async fn reserve_and_unavailable_also_close_open_record() {
        let (_dir, db) = setup().await;
        let store = SeaOrmReservationStore::new(db.clone());

        store.park(park_request("SLOT-01", "ABC-123")).await.unwrap();
        store
            .change_status("SLOT-01", SlotStatus::Reserved)
            .await
            .unwrap();
        assert_eq!(open_record_count(&db, "SLOT-01").await, 0);

        store.park(park_request("SLOT-03", "DEF-456")).await.unwrap();
        store
            .change_status("SLOT-03", SlotStatus::Unavailable)
            .await
            .unwrap();
        assert_eq!(open_record_count(&db, "SLOT-03").await, 0);
    }

    #[tokio::test]
    async fn force_occupy_creates_no_record() {
        let (_dir, db) = setup().await;
        let store = SeaOrmReservationStore::new(db.clone());

        store
            .change_status("SLOT-03", SlotStatus::Occupied)
            .await
            .unwrap();

        let slots = SeaOrmSlotStore::new(db.clone());
        let slot = slots.find_by_id("SLOT-03").await.unwrap().unwrap();
        assert_eq!(slot.status, SlotStatus::Occupied);
        assert_eq!(open_record_count(&db, "SLOT-03").await, 0);

        // And an administratively occupied slot rejects park
        let err = store
            .park(park_request("SLOT-03", "ABC-123"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotUnavailable(_)));
    }

    #[tokio::test]
    async fn change_status_missing_slot_is_not_found() {
        let (_dir, db) = setup().await;
        let store = SeaOrmReservationStore::new(db.clone());

        let err = store
            .change_status("SLOT-99", SlotStatus::Reserved)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Slot", .. }));
    }

    #[tokio::test]
    async fn loyalty_counter_is_monotonic_across_parks() {
        let (_dir, db) = setup().await;
        let store = SeaOrmReservationStore::new(db.clone());

        let first = store.park(park_request("SLOT-01", "ABC-123")).await.unwrap();
        store
            .change_status("SLOT-01", SlotStatus::Available)
            .await
            .unwrap();
        let second = store.park(park_request("SLOT-01", "ABC-123")).await.unwrap();

        assert_eq!(first.parking_count, 1);
        assert_eq!(second.parking_count, 2);

        // Releases never decrement
        store
            .change_status("SLOT-01", SlotStatus::Available)
            .await
            .unwrap();
        let count = user::Entity::find_by_id(1)
            .one(&db)
            .await
            .unwrap()
            .unwrap()
            .parking_count;
        assert_eq!(count, 2);
    }
}
