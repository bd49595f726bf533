//! Service layer: the availability analysis engine.
//!
//! Each component of the pipeline lives in its own module and is a pure
//! function over immutable input. Data flows strictly forward: raw arrays →
//! slots → {reconciliation, best-slot ranking, block detection → block
//! summarization}; no component mutates another's output.

pub mod analysis;

pub mod best_slots;

pub mod blocks;

pub mod reconcile;

pub mod slots;

pub mod summarize;

#[cfg(test)]
mod blocks_tests;

pub use analysis::analyze;
pub use best_slots::find_best_slots;
pub use blocks::{find_contiguous_blocks, ONE_HOUR_SLOTS, THREE_HOUR_SLOTS, TWO_HOUR_SLOTS};
pub use reconcile::{missing_names, reconcile_names, similarity_ratio};
pub use slots::build_slots;
pub use summarize::summarize_blocks;
