//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::loyalty::LoyaltyLedger;
use crate::domain::occupancy::OccupancyLog;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationStore;
use crate::domain::slot::SlotStore;

use super::loyalty_ledger::SeaOrmLoyaltyLedger;
use super::occupancy_log::SeaOrmOccupancyLog;
use super::reservation_store::SeaOrmReservationStore;
use super::slot_store::SeaOrmSlotStore;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    slots: SeaOrmSlotStore,
    occupancy: SeaOrmOccupancyLog,
    loyalty: SeaOrmLoyaltyLedger,
    reservations: SeaOrmReservationStore,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            slots: SeaOrmSlotStore::new(db.clone()),
            occupancy: SeaOrmOccupancyLog::new(db.clone()),
            loyalty: SeaOrmLoyaltyLedger::new(db.clone()),
            reservations: SeaOrmReservationStore::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn slots(&self) -> &dyn SlotStore {
        &self.slots
    }

    fn occupancy(&self) -> &dyn OccupancyLog {
        &self.occupancy
    }

    fn loyalty(&self) -> &dyn LoyaltyLedger {
        &self.loyalty
    }

    fn reservations(&self) -> &dyn ReservationStore {
        &self.reservations
    }
}
