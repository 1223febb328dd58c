//! Loyalty ledger interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::DomainResult;

/// Read side of the per-user loyalty counter.
///
/// Deliberately exposes no increment: the counter only moves inside the park
/// transaction, so it cannot drift from writes outside the atomic unit.
#[async_trait]
pub trait LoyaltyLedger: Send + Sync {
    async fn find_user(&self, user_id: i32) -> DomainResult<Option<User>>;

    /// Loyalty count for the user; 0 for unknown or no-history users.
    async fn parking_count(&self, user_id: i32) -> DomainResult<i64>;
}
