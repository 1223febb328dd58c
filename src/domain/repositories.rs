//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives unified access to the per-aggregate
//! repositories; consumers request only the repository they need.

use crate::domain::loyalty::LoyaltyLedger;
use crate::domain::occupancy::OccupancyLog;
use crate::domain::reservation::ReservationStore;
use crate::domain::slot::SlotStore;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let slot = repos.slots().find_by_id("SLOT-01").await?;
///     let open = repos.occupancy().find_open_for_slot("SLOT-01").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn slots(&self) -> &dyn SlotStore;
    fn occupancy(&self) -> &dyn OccupancyLog;
    fn loyalty(&self) -> &dyn LoyaltyLedger;
    fn reservations(&self) -> &dyn ReservationStore;
}
