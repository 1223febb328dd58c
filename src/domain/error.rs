//! Domain errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Compare-and-set precondition failed: the slot is not AVAILABLE, or a
    /// concurrent park claimed it first. Routine contention, not a bug.
    #[error("Slot {0} is not available")]
    SlotUnavailable(String),

    #[error("Invalid slot status: {0}")]
    InvalidStatus(String),

    /// Lock/timeout contention; the operation may succeed if retried.
    #[error("Transient: {0}")]
    Transient(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether the operation may succeed if retried with backoff.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Transient(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
