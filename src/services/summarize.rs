//! Block Summarizer: aggregate statistics and attendee sets per block.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono_tz::Tz;

use crate::api::{ContinuousBlock, Slot};

/// Result count limit per block duration.
pub const MAX_BLOCKS: usize = 5;

/// Fraction of a block's slots a person must attend to count as frequently
/// available when nobody is present for the whole block.
pub const FREQUENT_FRACTION: f64 = 0.75;

/// Summarize, rank, and truncate detected block candidates.
///
/// Candidates may overlap; ranking is by descending mean attendance
/// percentage, then display date, then start time. Keeps the first
/// [`MAX_BLOCKS`].
pub fn summarize_blocks(candidates: &[Vec<Slot>], timezone: Tz) -> Vec<ContinuousBlock> {
    let mut summaries: Vec<ContinuousBlock> = candidates
        .iter()
        .filter(|slots| !slots.is_empty())
        .map(|slots| summarize_block(slots, timezone))
        .collect();

    summaries.sort_by(|a, b| {
        b.avg_percentage
            .partial_cmp(&a.avg_percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.date.cmp(&b.date))
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    summaries.truncate(MAX_BLOCKS);
    summaries
}

fn summarize_block(slots: &[Slot], timezone: Tz) -> ContinuousBlock {
    let len = slots.len();
    let avg_available =
        round1(slots.iter().map(|s| s.num_available).sum::<usize>() as f64 / len as f64);
    let avg_percentage =
        round1(slots.iter().map(|s| s.availability_percentage).sum::<f64>() / len as f64);

    let mut common: BTreeSet<String> = slots[0].available_people.clone();
    for slot in &slots[1..] {
        common = common
            .intersection(&slot.available_people)
            .cloned()
            .collect();
    }

    let available_people: Vec<String> = if common.is_empty() {
        frequently_available(slots)
    } else {
        common.into_iter().collect()
    };

    let first = &slots[0];
    let last = &slots[len - 1];
    ContinuousBlock {
        start_timestamp: first.timestamp,
        date: first.date.clone(),
        start_time: first.time.clone(),
        // A block covering 10:00-10:45 slots ends at 11:00.
        end_time: last.timestamp.next_slot().format_time(timezone),
        duration_minutes: 15 * len,
        avg_available,
        avg_percentage,
        available_people,
    }
}

/// People present in at least three-quarters of the block's slots.
/// The minimum appearance count truncates `len * 0.75` to an integer.
fn frequently_available(slots: &[Slot]) -> Vec<String> {
    let min_appearances = (slots.len() as f64 * FREQUENT_FRACTION) as usize;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for slot in slots {
        for name in &slot.available_people {
            *counts.entry(name.as_str()).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count >= min_appearances)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
