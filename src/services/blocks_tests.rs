#[cfg(test)]
mod tests {
    use crate::api::{Slot, SlotTimestamp};
    use crate::models::SLOT_STEP_SECONDS;
    use crate::services::blocks::{find_contiguous_blocks, ONE_HOUR_SLOTS};
    use std::collections::BTreeSet;

    const BASE: i64 = 1_705_320_000;

    fn slot(index: i64, percentage: f64) -> Slot {
        Slot {
            timestamp: SlotTimestamp::new(BASE + index * SLOT_STEP_SECONDS),
            date: String::new(),
            time: String::new(),
            available_people: BTreeSet::new(),
            num_available: 0,
            availability_percentage: percentage,
        }
    }

    fn grid(percentages: &[f64]) -> Vec<Slot> {
        percentages
            .iter()
            .enumerate()
            .map(|(i, &p)| slot(i as i64, p))
            .collect()
    }

    #[test]
    fn test_two_full_slots_form_one_block() {
        let slots = grid(&[100.0, 100.0]);
        let blocks = find_contiguous_blocks(&slots, 2, 50.0);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 2);
    }

    #[test]
    fn test_growing_run_emits_overlapping_windows() {
        // Five qualifying slots with required 4 yield both 4-slot windows.
        let slots = grid(&[80.0, 80.0, 80.0, 80.0, 80.0]);
        let blocks = find_contiguous_blocks(&slots, ONE_HOUR_SLOTS, 50.0);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0].timestamp.value(), BASE);
        assert_eq!(blocks[1][0].timestamp.value(), BASE + SLOT_STEP_SECONDS);
        for block in &blocks {
            assert_eq!(block.len(), ONE_HOUR_SLOTS);
        }
    }

    #[test]
    fn test_every_block_is_contiguous_and_long_enough() {
        let slots = grid(&[60.0, 60.0, 60.0, 60.0, 10.0, 60.0, 60.0, 60.0, 60.0, 60.0, 60.0]);
        let blocks = find_contiguous_blocks(&slots, ONE_HOUR_SLOTS, 50.0);

        assert!(!blocks.is_empty());
        for block in &blocks {
            assert!(block.len() >= ONE_HOUR_SLOTS);
            for pair in block.windows(2) {
                assert_eq!(
                    pair[1].timestamp.value() - pair[0].timestamp.value(),
                    SLOT_STEP_SECONDS
                );
            }
        }
    }

    #[test]
    fn test_grid_gap_breaks_run() {
        // Four qualifying slots but with a missing grid entry in the middle.
        let mut slots = vec![slot(0, 80.0), slot(1, 80.0), slot(3, 80.0), slot(4, 80.0)];
        slots.sort_by_key(|s| s.timestamp);
        let blocks = find_contiguous_blocks(&slots, 4, 50.0);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_below_threshold_slot_breaks_run() {
        // The 10% dip stays below every relaxation level, so neither
        // two-slot run ever reaches the required length.
        let slots = grid(&[80.0, 80.0, 10.0, 80.0, 80.0]);
        let blocks = find_contiguous_blocks(&slots, 4, 50.0);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_ladder_floor_slot_joins_run() {
        // A 20% dip splits the run at 50/40/30 but qualifies at the final
        // 20% level, where the full five-slot run yields both 4-slot windows.
        let slots = grid(&[80.0, 80.0, 20.0, 80.0, 80.0]);
        let blocks = find_contiguous_blocks(&slots, 4, 50.0);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0].timestamp.value(), BASE);
        assert_eq!(blocks[1][0].timestamp.value(), BASE + SLOT_STEP_SECONDS);
    }

    #[test]
    fn test_threshold_relaxation_finds_weak_block() {
        // Nothing reaches 50%, but a full hour holds at 35%: the relaxation
        // ladder reaches it at the 30% retry.
        let slots = grid(&[35.0, 35.0, 35.0, 35.0]);
        let blocks = find_contiguous_blocks(&slots, ONE_HOUR_SLOTS, 50.0);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), ONE_HOUR_SLOTS);
    }

    #[test]
    fn test_relaxation_stops_at_first_yielding_threshold() {
        // 45% slots qualify at the 40% retry; the 30/20 levels are not the
        // ones reporting.
        let slots = grid(&[45.0, 45.0, 45.0, 45.0, 15.0, 25.0, 25.0, 25.0, 25.0]);
        let blocks = find_contiguous_blocks(&slots, ONE_HOUR_SLOTS, 50.0);

        // Only the 45% run clears 40%; the 25% run would only appear at 20%.
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0][0].availability_percentage, 45.0);
    }

    #[test]
    fn test_nothing_clears_even_lowest_threshold() {
        let slots = grid(&[10.0, 10.0, 10.0, 10.0]);
        let blocks = find_contiguous_blocks(&slots, ONE_HOUR_SLOTS, 50.0);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_zero_slots_yield_no_blocks() {
        assert!(find_contiguous_blocks(&[], 4, 50.0).is_empty());
    }

    #[test]
    fn test_required_longer_than_grid_yields_no_blocks() {
        let slots = grid(&[100.0, 100.0]);
        assert!(find_contiguous_blocks(&slots, 4, 50.0).is_empty());
    }

    #[test]
    fn test_zero_required_slots_yield_no_blocks() {
        let slots = grid(&[100.0, 100.0]);
        assert!(find_contiguous_blocks(&slots, 0, 50.0).is_empty());
    }
}
