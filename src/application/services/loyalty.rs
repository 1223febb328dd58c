//! Loyalty read service

use std::sync::Arc;

use crate::domain::{DomainResult, RepositoryProvider};

/// Read side of the loyalty counter. The counter itself only moves inside
/// the park transaction.
pub struct LoyaltyService {
    repos: Arc<dyn RepositoryProvider>,
}

impl LoyaltyService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Successful-park count for the user; 0 for unknown users.
    pub async fn parking_count(&self, user_id: i32) -> DomainResult<i64> {
        self.repos.loyalty().parking_count(user_id).await
    }
}
