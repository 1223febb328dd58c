pub mod error;
pub mod loyalty;
pub mod occupancy;
pub mod repositories;
pub mod reservation;
pub mod slot;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use loyalty::{LoyaltyLedger, User};
pub use occupancy::{OccupancyLog, OccupancyRecord};
pub use repositories::RepositoryProvider;
pub use reservation::{ParkRequest, ParkTicket, ReservationStore};
pub use slot::{Slot, SlotStatus, SlotStore};
