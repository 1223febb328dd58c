//! Application services

pub mod loyalty;
pub mod reservation;
pub mod status_board;

pub use loyalty::LoyaltyService;
pub use reservation::ReservationService;
pub use status_board::{SlotOccupancy, StatusBoardService};
