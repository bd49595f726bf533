//! Analysis orchestrator: runs the full pipeline over one raw snapshot.

use std::collections::HashSet;

use crate::api::{AvailabilityReport, AvailabilityStats, RawAvailability, Slot};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::services::blocks::{
    find_contiguous_blocks, ONE_HOUR_SLOTS, THREE_HOUR_SLOTS, TWO_HOUR_SLOTS,
};
use crate::services::summarize::{round1, summarize_blocks};
use crate::services::{best_slots, build_slots, reconcile_names};

/// Run the complete analysis over one raw availability snapshot.
///
/// Synchronous and pure: validates the payload, builds and sorts the slot
/// grid, reconciles the roster against the scraped pool, ranks individual
/// slots, and detects/summarizes 1h, 2h, and 3h contiguous blocks. Calling
/// twice on identical input yields identical output.
pub fn analyze(
    raw: &RawAvailability,
    user_names: &[String],
    config: &EngineConfig,
) -> Result<AvailabilityReport, EngineError> {
    raw.validate()?;

    let mut slots = build_slots(raw, config.timezone);
    slots.sort_by_key(|s| s.timestamp);
    log::debug!(
        "analyzing {} slots, {} people, {} roster names",
        slots.len(),
        raw.people.len(),
        user_names.len()
    );

    let scraped_names = scraped_name_pool(raw, &slots);
    let reconciliation = reconcile_names(user_names, &scraped_names);
    let best_slots = best_slots::find_best_slots(&slots);

    let one_hour_blocks = summarize_blocks(
        &find_contiguous_blocks(&slots, ONE_HOUR_SLOTS, config.min_block_percentage),
        config.timezone,
    );
    let two_hour_blocks = summarize_blocks(
        &find_contiguous_blocks(&slots, TWO_HOUR_SLOTS, config.min_block_percentage),
        config.timezone,
    );
    let three_hour_blocks = summarize_blocks(
        &find_contiguous_blocks(&slots, THREE_HOUR_SLOTS, config.min_block_percentage),
        config.timezone,
    );

    Ok(AvailabilityReport {
        reconciliation,
        best_slots,
        one_hour_blocks,
        two_hour_blocks,
        three_hour_blocks,
        stats: compute_stats(&slots),
    })
}

/// Names eligible for reconciliation: people marked available in at least
/// one slot, in person-table order, deduplicated. People scraped but never
/// available anywhere are excluded entirely rather than reported unmatched.
fn scraped_name_pool(raw: &RawAvailability, slots: &[Slot]) -> Vec<String> {
    let mut available: HashSet<&str> = HashSet::new();
    for slot in slots {
        for name in &slot.available_people {
            available.insert(name.as_str());
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    raw.people
        .iter()
        .filter(|p| available.contains(p.name.as_str()) && seen.insert(p.name.as_str()))
        .map(|p| p.name.clone())
        .collect()
}

/// Summary statistics over the slot grid. All zero for an empty grid.
fn compute_stats(slots: &[Slot]) -> AvailabilityStats {
    if slots.is_empty() {
        return AvailabilityStats {
            total_slots: 0,
            max_availability: 0,
            avg_availability: 0.0,
        };
    }

    let total_slots = slots.len();
    let max_availability = slots.iter().map(|s| s.num_available).max().unwrap_or(0);
    let avg_availability = round1(
        slots.iter().map(|s| s.num_available).sum::<usize>() as f64 / total_slots as f64,
    );

    AvailabilityStats {
        total_slots,
        max_availability,
        avg_availability,
    }
}
