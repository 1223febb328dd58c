//! Application layer - business logic and use cases

pub mod services;

pub use services::{LoyaltyService, ReservationService, SlotOccupancy, StatusBoardService};
