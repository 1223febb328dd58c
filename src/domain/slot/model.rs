//! Slot domain entity

use chrono::{DateTime, Utc};

/// Slot lifecycle status.
///
/// `park` only succeeds from `Available`; every status is administratively
/// reachable from every other via `change_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotStatus {
    Available,
    Occupied,
    Reserved,
    Unavailable,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Occupied => "OCCUPIED",
            Self::Reserved => "RESERVED",
            Self::Unavailable => "UNAVAILABLE",
        }
    }

    /// Parse a wire/storage status string. Unknown strings are rejected
    /// before any write reaches the store.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AVAILABLE" => Some(Self::Available),
            "OCCUPIED" => Some(Self::Occupied),
            "RESERVED" => Some(Self::Reserved),
            "UNAVAILABLE" => Some(Self::Unavailable),
            _ => None,
        }
    }

    /// Whether a vehicle may park while the slot is in this status.
    pub fn accepts_park(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Whether moving to this status releases active occupancy, i.e. closes
    /// the slot's open occupancy record if one exists.
    pub fn releases_occupancy(&self) -> bool {
        !matches!(self, Self::Occupied)
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single physical parking space.
///
/// `slot_id` and `area` are fixed at provisioning; only `status` mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Stable identifier, e.g. "SLOT-01"
    pub slot_id: String,
    /// Named zone the slot belongs to
    pub area: String,
    pub status: SlotStatus,
    pub updated_at: DateTime<Utc>,
}

impl Slot {
    pub fn new(slot_id: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            area: area.into(),
            status: SlotStatus::Available,
            updated_at: Utc::now(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
