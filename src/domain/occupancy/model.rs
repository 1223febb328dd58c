//! Occupancy record domain entity

use chrono::{DateTime, Utc};

/// One stay of a vehicle in a slot, bounded by arrival and (eventually)
/// exit timestamps. The record is *open* while `exit_at` is unset.
///
/// Invariant: for every slot, at most one record is open at any instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyRecord {
    /// Monotonically assigned identifier
    pub id: i32,
    /// Slot the vehicle occupies; many records per slot over time
    pub slot_id: String,
    /// User who parked
    pub user_id: i32,
    pub plate: String,
    pub model: String,
    pub arrival_at: DateTime<Utc>,
    /// `None` means the vehicle is still parked
    pub exit_at: Option<DateTime<Utc>>,
}

impl OccupancyRecord {
    pub fn open(
        id: i32,
        slot_id: impl Into<String>,
        user_id: i32,
        plate: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id,
            slot_id: slot_id.into(),
            user_id,
            plate: plate.into(),
            model: model.into(),
            arrival_at: Utc::now(),
            exit_at: None,
        }
    }

    /// Close the stay. Closing is a one-way operation; a closed record is
    /// never reopened.
    pub fn close(&mut self, at: DateTime<Utc>) {
        if self.exit_at.is_none() {
            self.exit_at = Some(at);
        }
    }

    pub fn is_open(&self) -> bool {
        self.exit_at.is_none()
    }

    /// Duration of the stay in seconds, once closed.
    pub fn duration_seconds(&self) -> Option<i64> {
        self.exit_at.map(|exit| (exit - self.arrival_at).num_seconds())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> OccupancyRecord {
        OccupancyRecord::open(1, "SLOT-01", 7, "ABC-123", "Civic")
    }

    #[test]
    fn new_record_is_open() {
        let rec = sample_record();
        assert!(rec.is_open());
        assert!(rec.exit_at.is_none());
        assert_eq!(rec.slot_id, "SLOT-01");
        assert_eq!(rec.user_id, 7);
    }

    #[test]
    fn close_sets_exit() {
        let mut rec = sample_record();
        rec.close(Utc::now());
        assert!(!rec.is_open());
        assert!(rec.exit_at.is_some());
    }

    #[test]
    fn close_is_one_way() {
        let mut rec = sample_record();
        let first = Utc::now();
        rec.close(first);
        rec.close(first + chrono::Duration::seconds(60));
        assert_eq!(rec.exit_at, Some(first));
    }

    #[test]
    fn duration_none_while_open() {
        let rec = sample_record();
        assert_eq!(rec.duration_seconds(), None);
    }

    #[test]
    fn duration_after_close() {
        let mut rec = sample_record();
        rec.close(rec.arrival_at + chrono::Duration::seconds(90));
        assert_eq!(rec.duration_seconds(), Some(90));
    }
}
