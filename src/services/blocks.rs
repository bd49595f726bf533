//! Contiguous-Block Finder: sliding-window detection of well-attended runs.

use crate::api::Slot;

/// Required run lengths at 15-minute granularity.
pub const ONE_HOUR_SLOTS: usize = 4;
pub const TWO_HOUR_SLOTS: usize = 8;
pub const THREE_HOUR_SLOTS: usize = 12;

/// Fallback thresholds tried in order when the primary pass finds nothing.
/// Degrades to the "least bad" windows rather than returning empty-handed.
pub const RELAXED_THRESHOLDS: [f64; 3] = [40.0, 30.0, 20.0];

/// Find every run of `required_slots` temporally adjacent slots whose
/// attendance percentage reaches `min_percentage`, relaxing the threshold
/// through [`RELAXED_THRESHOLDS`] when the primary pass yields nothing.
///
/// Expects `slots` sorted ascending by timestamp. Adjacency means a delta of
/// exactly 900 seconds; any other delta (scrape irregularities, overnight
/// gaps) breaks a run. As a qualifying run grows past `required_slots`, each
/// window of that length is emitted, so overlapping candidates of equal
/// length reach the summarizer - downstream ranking depends on having them.
pub fn find_contiguous_blocks(
    slots: &[Slot],
    required_slots: usize,
    min_percentage: f64,
) -> Vec<Vec<Slot>> {
    if required_slots == 0 || slots.len() < required_slots {
        return Vec::new();
    }

    let blocks = find_blocks_at(slots, required_slots, min_percentage);
    if !blocks.is_empty() {
        return blocks;
    }

    for &threshold in RELAXED_THRESHOLDS.iter() {
        let blocks = find_blocks_at(slots, required_slots, threshold);
        if !blocks.is_empty() {
            log::debug!(
                "no blocks of {} slots at {}%, relaxed to {}%",
                required_slots,
                min_percentage,
                threshold
            );
            return blocks;
        }
    }

    Vec::new()
}

/// Single sliding-window pass at one threshold.
fn find_blocks_at(slots: &[Slot], required_slots: usize, threshold: f64) -> Vec<Vec<Slot>> {
    let mut found: Vec<Vec<Slot>> = Vec::new();
    let mut current: Vec<Slot> = Vec::new();

    for slot in slots {
        if slot.availability_percentage >= threshold {
            if current.is_empty() {
                current.push(slot.clone());
            } else if slot.timestamp.follows(current[current.len() - 1].timestamp) {
                current.push(slot.clone());
            } else {
                // Gap on the grid: flush a long-enough run, restart here.
                if current.len() >= required_slots {
                    found.push(current.clone());
                }
                current = vec![slot.clone()];
            }

            if current.len() >= required_slots {
                let window = current[current.len() - required_slots..].to_vec();
                found.push(window);
                current.remove(0);
            }
        } else {
            if current.len() >= required_slots {
                found.push(current.clone());
            }
            current.clear();
        }
    }

    if current.len() >= required_slots {
        found.push(current);
    }

    found
}
