//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use crate::models::SlotTimestamp;

/// Participant identifier assigned by the scraped scheduling page.
/// Opaque to the engine; unique within one scrape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub i64);

impl PersonId {
    pub fn new(value: i64) -> Self {
        PersonId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PersonId> for i64 {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

/// One scraped participant. Names may be empty or duplicated; ids may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

/// Raw dataset handed over by the scraping collaborator.
///
/// Three parallel structures: the slot grid timestamps, the attendee-id list
/// per slot (same length as `timestamps`), and the person table resolving
/// ids to names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAvailability {
    /// Epoch seconds per slot, 15-minute grid.
    pub timestamps: Vec<i64>,
    /// For each slot, the ids of people marked available in it.
    pub attendee_ids_per_slot: Vec<Vec<PersonId>>,
    /// Every person known to the scrape, participating or not.
    pub people: Vec<Person>,
}

/// One fixed-width (15-minute) unit on the schedule grid, with the attendee
/// set resolved to names and the attendance percentage precomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot start, epoch seconds.
    pub timestamp: SlotTimestamp,
    /// Display date in the configured timezone, e.g. "Mon, Jan 15".
    pub date: String,
    /// Display time in the configured timezone, 12-hour clock.
    pub time: String,
    /// Names of the people available in this slot.
    pub available_people: BTreeSet<String>,
    pub num_available: usize,
    /// `num_available / total people * 100`; 0 when the scrape has no people.
    pub availability_percentage: f64,
}

/// One pairing produced by the name reconciliation.
///
/// Exactly one side may be empty: `(name, "")` is a roster name with no
/// scraped counterpart, `("", name)` a scraped participant nobody expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationEntry {
    pub user_name: String,
    pub matched_name: String,
}

/// A run of time-adjacent slots all meeting an attendance threshold,
/// summarized for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousBlock {
    /// Start of the first slot, epoch seconds.
    pub start_timestamp: SlotTimestamp,
    /// Display date of the first slot.
    pub date: String,
    /// Display time of the first slot.
    pub start_time: String,
    /// Display time of the end of the last slot.
    pub end_time: String,
    pub duration_minutes: usize,
    /// Mean attendee count over the block's slots, one decimal.
    pub avg_available: f64,
    /// Mean attendance percentage over the block's slots, one decimal.
    pub avg_percentage: f64,
    /// People present for the whole block, or (fallback) present for at
    /// least three-quarters of it.
    pub available_people: Vec<String>,
}

/// Summary statistics over the full slot grid. All zero when there are no slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityStats {
    pub total_slots: usize,
    /// Max attendee count across slots.
    pub max_availability: usize,
    /// Mean attendee count across slots, one decimal.
    pub avg_availability: f64,
}

/// Complete engine output for one analysis invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// Roster/scrape name reconciliation.
    pub reconciliation: Vec<ReconciliationEntry>,
    /// Top individual slots by attendance (contiguity not required).
    pub best_slots: Vec<Slot>,
    /// Recommended 1-hour blocks (4 slots).
    pub one_hour_blocks: Vec<ContinuousBlock>,
    /// Recommended 2-hour blocks (8 slots).
    pub two_hour_blocks: Vec<ContinuousBlock>,
    /// Recommended 3-hour blocks (12 slots).
    pub three_hour_blocks: Vec<ContinuousBlock>,
    pub stats: AvailabilityStats,
}
