//! Best-Slot Selector: ranks individual slots by attendance.

use std::cmp::Ordering;

use crate::api::Slot;

/// Minimum attendance percentage for a slot to qualify on its own.
/// Fixed, and deliberately independent of the configurable block-search
/// threshold: an isolated well-attended slot qualifies here even when it can
/// never anchor a contiguous block.
pub const BEST_SLOT_MIN_PERCENTAGE: f64 = 70.0;

/// Result count limit.
pub const MAX_BEST_SLOTS: usize = 5;

/// Top individual slots by attendance, ties broken by earlier timestamp.
/// No slot reaching the cutoff yields an empty list, not an error.
pub fn find_best_slots(slots: &[Slot]) -> Vec<Slot> {
    let mut qualified: Vec<Slot> = slots
        .iter()
        .filter(|s| s.availability_percentage >= BEST_SLOT_MIN_PERCENTAGE)
        .cloned()
        .collect();

    qualified.sort_by(|a, b| {
        b.availability_percentage
            .partial_cmp(&a.availability_percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });
    qualified.truncate(MAX_BEST_SLOTS);
    qualified
}

#[cfg(test)]
mod tests {
    use super::{find_best_slots, MAX_BEST_SLOTS};
    use crate::api::{Slot, SlotTimestamp};
    use std::collections::BTreeSet;

    fn slot(epoch: i64, percentage: f64) -> Slot {
        Slot {
            timestamp: SlotTimestamp::new(epoch),
            date: String::new(),
            time: String::new(),
            available_people: BTreeSet::new(),
            num_available: 0,
            availability_percentage: percentage,
        }
    }

    #[test]
    fn test_filters_below_seventy() {
        let slots = vec![slot(0, 69.9), slot(900, 70.0), slot(1800, 85.0)];
        let best = find_best_slots(&slots);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].availability_percentage, 85.0);
        assert_eq!(best[1].availability_percentage, 70.0);
    }

    #[test]
    fn test_ties_break_on_earlier_timestamp() {
        let slots = vec![slot(1800, 80.0), slot(0, 80.0), slot(900, 90.0)];
        let best = find_best_slots(&slots);
        assert_eq!(best[0].timestamp.value(), 900);
        assert_eq!(best[1].timestamp.value(), 0);
        assert_eq!(best[2].timestamp.value(), 1800);
    }

    #[test]
    fn test_truncates_to_five() {
        let slots: Vec<Slot> = (0..8).map(|i| slot(i * 900, 75.0 + i as f64)).collect();
        let best = find_best_slots(&slots);
        assert_eq!(best.len(), MAX_BEST_SLOTS);
    }

    #[test]
    fn test_empty_input_is_empty_result() {
        assert!(find_best_slots(&[]).is_empty());
    }

    #[test]
    fn test_isolated_slot_qualifies() {
        // Contiguity is not required here.
        let slots = vec![slot(0, 10.0), slot(9000, 95.0)];
        let best = find_best_slots(&slots);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].timestamp.value(), 9000);
    }
}
