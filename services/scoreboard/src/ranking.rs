//! Summary ordering
//!
//! Matches are ranked by total score descending; ties are broken by start
//! time descending, so the most recently started match comes first.

use std::cmp::Ordering;
use types::matches::Match;

/// Composite comparator for the summary view
///
/// Used with a stable sort, so two matches equal under both keys (same total
/// and the same timestamp down to the nanosecond) keep their pre-sort
/// relative order.
pub fn summary_order(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_time.cmp(&a.start_time))
}
