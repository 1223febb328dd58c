pub mod model;
pub mod repository;

pub use model::{ParkRequest, ParkTicket};
pub use repository::ReservationStore;
