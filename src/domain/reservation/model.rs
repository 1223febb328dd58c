//! Reservation write-path types

/// A request to park a vehicle in a specific slot.
#[derive(Debug, Clone)]
pub struct ParkRequest {
    pub slot_id: String,
    pub plate: String,
    pub model: String,
    pub user_id: i32,
}

/// Outcome of a successful park: the opened record and the user's loyalty
/// count after the increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkTicket {
    pub record_id: i32,
    pub parking_count: i64,
}
