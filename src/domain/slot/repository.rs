//! Slot store interface

use async_trait::async_trait;

use super::model::{Slot, SlotStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait SlotStore: Send + Sync {
    async fn find_by_id(&self, slot_id: &str) -> DomainResult<Option<Slot>>;

    /// List slots, optionally restricted to one area. `None` lists all.
    async fn list(&self, area: Option<&str>) -> DomainResult<Vec<Slot>>;

    /// Atomically transition `slot_id` from `expected` to `new` status.
    ///
    /// Returns `false` without mutating anything when the current status does
    /// not equal `expected`. Must be a single conditional update, never a
    /// read followed by a write: this primitive is what prevents
    /// double-booking under concurrent callers.
    async fn compare_and_set_status(
        &self,
        slot_id: &str,
        expected: SlotStatus,
        new: SlotStatus,
    ) -> DomainResult<bool>;

    async fn count(&self) -> DomainResult<u64>;
}
