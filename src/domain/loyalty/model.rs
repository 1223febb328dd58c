//! User loyalty entity
//!
//! Only the loyalty-relevant fields live here; credential storage and
//! authentication belong to an external collaborator.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Running total of successful park operations. Incremented by exactly 1
    /// inside the park transaction, never decremented by this engine.
    pub parking_count: i64,
    pub created_at: DateTime<Utc>,
}
