//! Reservation business logic service
//!
//! The only writer of slot, occupancy and loyalty state. Everything else in
//! the system reads.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::reservation::{ParkRequest, ParkTicket};
use crate::domain::slot::SlotStatus;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Park a vehicle: claim the slot, open an occupancy record and bump the
    /// user's loyalty counter as one atomic unit. Of concurrent requests for
    /// the same slot, exactly one succeeds.
    pub async fn park(&self, request: ParkRequest) -> DomainResult<ParkTicket> {
        let slot_id = request.slot_id.clone();
        let user_id = request.user_id;

        match self.repos.reservations().park(request).await {
            Ok(ticket) => {
                info!(
                    slot_id = %slot_id,
                    user_id,
                    record_id = ticket.record_id,
                    parking_count = ticket.parking_count,
                    "Vehicle parked"
                );
                Ok(ticket)
            }
            Err(e @ DomainError::SlotUnavailable(_)) => {
                // Routine contention, logged below error level
                info!(slot_id = %slot_id, user_id, "Park rejected: slot unavailable");
                Err(e)
            }
            Err(e) => {
                warn!(slot_id = %slot_id, user_id, error = %e, "Park failed");
                Err(e)
            }
        }
    }

    /// Administrative status override. The status string is validated before
    /// any write; transitions away from active occupancy close the slot's
    /// open record. Idempotent.
    pub async fn change_status(&self, slot_id: &str, status: &str) -> DomainResult<()> {
        let new_status = SlotStatus::parse(status)
            .ok_or_else(|| DomainError::InvalidStatus(status.to_string()))?;

        self.repos
            .reservations()
            .change_status(slot_id, new_status)
            .await?;
        info!(slot_id, status = %new_status, "Slot status changed");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
