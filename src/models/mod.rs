//! Input model: slot-grid timestamps and raw-payload parsing.

pub mod raw;
pub mod time;

pub use raw::parse_raw_availability_str;
pub use time::{SlotTimestamp, SLOT_STEP_SECONDS};
