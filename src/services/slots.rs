//! Slot Builder: raw parallel arrays → slot records with attendance counts.

use std::collections::{BTreeSet, HashMap};

use chrono_tz::Tz;

use crate::api::{PersonId, RawAvailability, Slot, SlotTimestamp};

/// Build one [`Slot`] per raw grid entry, resolving attendee ids to names
/// and precomputing the attendance percentage.
///
/// The percentage denominator is everyone in the scrape's person table,
/// participating or not; it is 0 when the table is empty. Attendee ids with
/// no person-table entry are skipped. Output preserves input order; callers
/// sort by timestamp before any contiguity-sensitive analysis.
pub fn build_slots(raw: &RawAvailability, timezone: Tz) -> Vec<Slot> {
    let names_by_id: HashMap<PersonId, &str> = raw
        .people
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();
    let total_people = raw.people.len();

    raw.timestamps
        .iter()
        .zip(&raw.attendee_ids_per_slot)
        .map(|(&epoch, attendee_ids)| {
            let available_people: BTreeSet<String> = attendee_ids
                .iter()
                .filter_map(|id| names_by_id.get(id))
                .map(|name| name.to_string())
                .collect();
            let num_available = available_people.len();
            let availability_percentage = if total_people == 0 {
                0.0
            } else {
                num_available as f64 / total_people as f64 * 100.0
            };

            let timestamp = SlotTimestamp::new(epoch);
            Slot {
                timestamp,
                date: timestamp.format_date(timezone),
                time: timestamp.format_time(timezone),
                available_people,
                num_available,
                availability_percentage,
            }
        })
        .collect()
}
