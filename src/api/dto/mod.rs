//! API data transfer objects

pub mod common;
pub mod park;
pub mod slot;
pub mod status;
pub mod user;

pub use common::ApiResponse;
pub use park::{ParkRequestDto, ParkResponse};
pub use slot::{UpdateStatusRequest, UpdateStatusResponse};
pub use status::{SlotStatusDto, StatusQuery};
pub use user::{UserInfoQuery, UserInfoResponse};
