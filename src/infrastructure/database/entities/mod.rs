//! Database entities module

pub mod occupancy_record;
pub mod slot;
pub mod user;

pub use occupancy_record::Entity as OccupancyRecord;
pub use slot::Entity as Slot;
pub use user::Entity as User;
