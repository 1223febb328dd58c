//! Status board projection
//!
//! Read-only view joining the slot store with each slot's open occupancy
//! record. Never mutates state.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::occupancy::OccupancyRecord;
use crate::domain::slot::Slot;
use crate::domain::{DomainResult, RepositoryProvider};

/// One projection row: a slot plus its current occupant, if any.
///
/// `plate`/`model` are `None` when the slot has no open record, whatever its
/// status says; an administratively force-occupied slot shows up OCCUPIED
/// with no occupant.
#[derive(Debug, Clone)]
pub struct SlotOccupancy {
    pub slot: Slot,
    pub plate: Option<String>,
    pub model: Option<String>,
}

pub struct StatusBoardService {
    repos: Arc<dyn RepositoryProvider>,
}

impl StatusBoardService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Left-outer join of slots against open occupancy records, optionally
    /// restricted to one area. Exactly one row per slot.
    pub async fn list_with_occupant(
        &self,
        area: Option<&str>,
    ) -> DomainResult<Vec<SlotOccupancy>> {
        let slots = self.repos.slots().list(area).await?;
        let open = self.repos.occupancy().find_open().await?;

        // Keyed by slot id; the invariant allows at most one open record per
        // slot, and keeping the first seen (lowest id) makes the row unique
        // even under a transient violation.
        let mut occupants: HashMap<String, OccupancyRecord> = HashMap::new();
        for record in open {
            occupants.entry(record.slot_id.clone()).or_insert(record);
        }

        Ok(slots
            .into_iter()
            .map(|slot| {
                let occupant = occupants.remove(&slot.slot_id);
                SlotOccupancy {
                    plate: occupant.as_ref().map(|r| r.plate.clone()),
                    model: occupant.map(|r| r.model),
                    slot,
                }
            })
            .collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{
        ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set,
    };
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::domain::reservation::{ParkRequest, ReservationStore};
    use crate::domain::slot::SlotStatus;
    use crate::infrastructure::database::entities::user;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::provisioning::provision_slots;
    use crate::infrastructure::database::SeaOrmRepositoryProvider;

    async fn setup() -> (tempfile::TempDir, Arc<dyn RepositoryProvider>) {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("parking.db").display()
        );
        let mut opts = ConnectOptions::new(url);
        opts.max_connections(1).sqlx_logging(false);
        let db: DatabaseConnection = Database::connect(opts).await.expect("connect");
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

        (dir, Arc::new(SeaOrmRepositoryProvider::new(db)))
    }

    fn park_request(slot_id: &str) -> ParkRequest {
        ParkRequest {
            slot_id: slot_id.to_string(),
            plate: "ABC-123".to_string(),
            model: "Civic".to_string(),
            user_id: 1,
        }
    }

    #[tokio::test]
    async fn occupied_slot_shows_its_occupant() {
        let (_dir, repos) = setup().await;
        repos.reservations().park(park_request("SLOT-01")).await.unwrap();

        let board = StatusBoardService::new(Arc::clone(&repos));
        let rows = board.list_with_occupant(None).await.unwrap();
        assert_eq!(rows.len(), 6);

        let row = rows.iter().find(|r| r.slot.slot_id == "SLOT-01").unwrap();
        assert_eq!(row.slot.status, SlotStatus::Occupied);
        assert_eq!(row.plate.as_deref(), Some("ABC-123"));
        assert_eq!(row.model.as_deref(), Some("Civic"));

        let empty = rows.iter().find(|r| r.slot.slot_id == "SLOT-02").unwrap();
        assert_eq!(empty.slot.status, SlotStatus::Available);
        assert!(empty.plate.is_none());
        assert!(empty.model.is_none());
    }

    #[tokio::test]
    async fn area_filter_restricts_rows() {
        let (_dir, repos) = setup().await;
        let board = StatusBoardService::new(Arc::clone(&repos));

        let rows = board.list_with_occupant(Some("Hayatabad")).await.unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.slot.area == "Hayatabad"));
    }

    #[tokio::test]
    async fn released_slot_shows_no_occupant() {
        let (_dir, repos) = setup().await;
        repos.reservations().park(park_request("SLOT-01")).await.unwrap();
        repos
            .reservations()
            .change_status("SLOT-01", SlotStatus::Available)
            .await
            .unwrap();

        let board = StatusBoardService::new(Arc::clone(&repos));
        let rows = board.list_with_occupant(None).await.unwrap();
        let row = rows.iter().find(|r| r.slot.slot_id == "SLOT-01").unwrap();
        assert_eq!(row.slot.status, SlotStatus::Available);
        assert!(row.plate.is_none());
    }

    #[tokio::test]
    async fn force_occupied_slot_shows_null_occupant() {
        let (_dir, repos) = setup().await;
        repos
            .reservations()
            .change_status("SLOT-03", SlotStatus::Occupied)
            .await
            .unwrap();

        let board = StatusBoardService::new(Arc::clone(&repos));
        let rows = board.list_with_occupant(None).await.unwrap();
        let row = rows.iter().find(|r| r.slot.slot_id == "SLOT-03").unwrap();
        assert_eq!(row.slot.status, SlotStatus::Occupied);
        assert!(row.plate.is_none());
        assert!(row.model.is_none());
    }
}
