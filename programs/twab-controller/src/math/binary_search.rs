//! Bisection over a circular buffer of initialized observations (spec §4.3).
//!
//! Operates through a caller-supplied timestamp accessor rather than a
//! concrete slice so it works uniformly whether the caller holds a
//! zero-copy account borrow or a plain array (used directly by unit tests).

use crate::math::ring::wrap;

/// Finds the adjacent pair of logical offsets `(before, after)` in
/// `[0, cardinality)` such that the physical slots they map to satisfy
/// `timestamp(before) <= target <= timestamp(after)`.
///
/// Returns physical ring indices, not logical offsets. Caller guarantees
/// `target` lies within `[timestamp(oldest), timestamp(newest)]` and that
/// `cardinality >= 2`; this is a precondition, not something this function
/// re-validates, matching spec §4.3 ("out-of-range is an error for this
/// primitive and handled by the engine before calling").
pub fn bracket<F>(
    oldest_physical: u16,
    cardinality: u16,
    capacity: u16,
    target: u64,
    timestamp_at: F,
) -> (u16, u16)
where
    F: Fn(u16) -> u64,
{
    debug_assert!(cardinality >= 2, "bracket requires at least two observations");

    let to_physical = |logical_offset: u16| wrap(oldest_physical + logical_offset, capacity);

    let mut lo: u16 = 0;
    let mut hi: u16 = cardinality - 1;

    while lo < hi {
        // Bias the midpoint high so `lo == hi` terminates on the smallest
        // offset whose timestamp is >= target, i.e. the "after" side.
        let mid = lo + (hi - lo + 1) / 2;
        let mid_ts = timestamp_at(to_physical(mid));
        if mid_ts > target {
            hi = mid - 1;
        } else {
            lo = mid;
        }
    }

    // `lo` now indexes the last offset whose timestamp is <= target (the
    // before-or-at side); `lo + 1` is the first whose timestamp is > target,
    // unless `lo`'s own timestamp equals `target` exactly, in which case the
    // spec's tie-break returns the same observation on both sides.
    let before_offset = lo;
    let before_physical = to_physical(before_offset);
    if timestamp_at(before_physical) == target {
        return (before_physical, before_physical);
    }

    let after_offset = (before_offset + 1).min(cardinality - 1);
    (before_physical, to_physical(after_offset))
}
