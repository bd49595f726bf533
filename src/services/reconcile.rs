//! Name Reconciler: greedy fuzzy pairing of roster names to scraped names.

use crate::api::ReconciliationEntry;

/// Minimum similarity ratio (0-100) for a pairing to count as a match.
pub const MATCH_THRESHOLD: f64 = 90.0;

/// Case-insensitive similarity ratio between two strings, 0-100.
///
/// Match-counting over lowercased characters, normalized by the combined
/// length: `200 * matched / (|a| + |b|)`. Matched characters are the shared
/// prefix run, plus one trailing anchor when the final character of either
/// name reappears in the other, capped at the shorter length. The anchor
/// keeps diminutive/suffix name forms close: "alice" vs "alicia" shares the
/// "alic" prefix and the trailing "a" anchors, scoring 10/11 ~ 90.9.
/// Two empty strings are identical and score 100.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let combined_len = a.len() + b.len();
    if combined_len == 0 {
        return 100.0;
    }

    let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();

    let trailing_anchor = match (a.last(), b.last()) {
        (Some(&last_a), Some(&last_b)) => b.contains(&last_a) || a.contains(&last_b),
        _ => false,
    };

    let matched = (prefix + usize::from(trailing_anchor)).min(a.len().min(b.len()));

    200.0 * matched as f64 / combined_len as f64
}

/// Pair roster names against the scraped participant pool.
///
/// Greedy and order-dependent by design: user names are processed in input
/// order and each claims its best-scoring remaining scraped name when the
/// ratio reaches [`MATCH_THRESHOLD`] (ties go to the first-encountered
/// candidate). Earlier roster names therefore claim before later ones; this
/// is deliberately not an optimal bipartite assignment. Blank roster entries
/// are discarded after trimming. Every scraped name left unclaimed is
/// emitted as a `("", name)` entry, so the non-empty matched/unclaimed names
/// across the output partition the input pool exactly.
pub fn reconcile_names(user_names: &[String], scraped_names: &[String]) -> Vec<ReconciliationEntry> {
    let mut remaining: Vec<String> = scraped_names.to_vec();
    let mut entries = Vec::new();

    for raw_name in user_names {
        let name = raw_name.trim();
        if name.is_empty() {
            continue;
        }

        let mut best: Option<(usize, f64)> = None;
        for (idx, candidate) in remaining.iter().enumerate() {
            let ratio = similarity_ratio(name, candidate);
            // Strictly-greater comparison keeps the first candidate on ties.
            if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
                best = Some((idx, ratio));
            }
        }

        match best {
            Some((idx, ratio)) if ratio >= MATCH_THRESHOLD => {
                entries.push(ReconciliationEntry {
                    user_name: name.to_string(),
                    matched_name: remaining.remove(idx),
                });
            }
            _ => {
                entries.push(ReconciliationEntry {
                    user_name: name.to_string(),
                    matched_name: String::new(),
                });
            }
        }
    }

    for leftover in remaining {
        entries.push(ReconciliationEntry {
            user_name: String::new(),
            matched_name: leftover,
        });
    }

    entries
}

/// Roster names that found no scraped counterpart.
pub fn missing_names(entries: &[ReconciliationEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| !e.user_name.is_empty() && e.matched_name.is_empty())
        .map(|e| e.user_name.clone())
        .collect()
}
