//! Reservation store interface

use async_trait::async_trait;

use super::model::{ParkRequest, ParkTicket};
use crate::domain::slot::SlotStatus;
use crate::domain::DomainResult;

/// The two transactional write primitives of the engine.
///
/// Each call is one atomic unit over the slot store, the occupancy log and
/// the loyalty ledger: either every mutation applies or none does. Same-slot
/// callers serialize on the store's transaction boundary, not on any
/// application-level lock.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Claim an AVAILABLE slot, open an occupancy record and bump the user's
    /// loyalty counter, all in one transaction.
    ///
    /// Of any set of concurrent calls targeting the same slot, exactly one
    /// succeeds; the rest fail with `SlotUnavailable` and write nothing.
    async fn park(&self, request: ParkRequest) -> DomainResult<ParkTicket>;

    /// Administrative status override. Any transition away from active
    /// occupancy closes the slot's open record; forcing OCCUPIED creates no
    /// record. Idempotent.
    async fn change_status(&self, slot_id: &str, new_status: SlotStatus) -> DomainResult<()>;
}
