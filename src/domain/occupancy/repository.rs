//! Occupancy log interface

use async_trait::async_trait;

use super::model::OccupancyRecord;
use crate::domain::DomainResult;

/// Append-mostly history of vehicle stays. Records are inserted open and
/// closed exactly once; they are never deleted or reopened.
#[async_trait]
pub trait OccupancyLog: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<OccupancyRecord>>;

    /// The slot's currently open record, if a vehicle is parked.
    async fn find_open_for_slot(&self, slot_id: &str) -> DomainResult<Option<OccupancyRecord>>;

    /// All currently open records across all slots (projection input).
    async fn find_open(&self) -> DomainResult<Vec<OccupancyRecord>>;

    /// Full stay history for a slot, newest first.
    async fn find_by_slot(&self, slot_id: &str) -> DomainResult<Vec<OccupancyRecord>>;
}
