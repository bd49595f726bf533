use chrono_tz::Tz;
use serde::*;

/// Grid step between temporally adjacent slots: 15 minutes.
/// Any other delta between two slots is treated as a gap.
pub const SLOT_STEP_SECONDS: i64 = 900;

/// Slot-grid timestamp: Unix epoch seconds at a slot boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SlotTimestamp(pub i64);

impl SlotTimestamp {
    /// Create a new slot timestamp from epoch seconds.
    pub fn new(epoch_seconds: i64) -> Self {
        Self(epoch_seconds)
    }

    /// Raw epoch seconds.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// The timestamp one grid step (15 minutes) later.
    pub fn next_slot(&self) -> Self {
        Self(self.0 + SLOT_STEP_SECONDS)
    }

    /// Whether `self` starts exactly one grid step after `prev`.
    pub fn follows(&self, prev: SlotTimestamp) -> bool {
        self.0 == prev.0 + SLOT_STEP_SECONDS
    }

    /// Convert to a chrono DateTime in the given display timezone.
    pub fn to_datetime(&self, tz: Tz) -> chrono::DateTime<Tz> {
        chrono::DateTime::from_timestamp(self.0, 0)
            .unwrap_or(chrono::DateTime::UNIX_EPOCH)
            .with_timezone(&tz)
    }

    /// Display date, abbreviated weekday/month/day, e.g. "Mon, Jan 15".
    pub fn format_date(&self, tz: Tz) -> String {
        self.to_datetime(tz).format("%a, %b %d").to_string()
    }

    /// Display time, 12-hour clock, e.g. "02:30 PM".
    pub fn format_time(&self, tz: Tz) -> String {
        self.to_datetime(tz).format("%I:%M %p").to_string()
    }
}

impl From<i64> for SlotTimestamp {
    fn from(v: i64) -> Self {
        SlotTimestamp::new(v)
    }
}

impl std::fmt::Display for SlotTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
