//! Pattern detection over a full window.
//!
//! A match is a start `x` such that `[x, x + INTERVAL_LEN - 1]` contains
//! every prime in the window while excluding the primes on either side of
//! it. With `p1`/`p12` the window ends and `pred`/`succ` its neighbours:
//!
//! ```text
//! x <= p1                    p1 inside
//! x >= pred + 1              pred outside
//! x >= p12 - (LEN - 1)       p12 inside
//! x <= succ - LEN            succ outside
//! ```

use crate::config::pattern::INTERVAL_LEN;
use crate::window::PrimeWindow;

/// Range of admissible interval starts for one window position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchInterval {
    /// Smallest admissible start; the canonical answer
    pub start: u64,
    /// Largest admissible start
    pub latest_start: u64,
}

impl MatchInterval {
    /// Last integer of the canonical interval
    pub fn end(&self) -> u64 {
        self.start + (INTERVAL_LEN - 1)
    }
}

/// Evaluate a full window against its neighbouring primes.
///
/// Returns `None` for a window that is not yet full.
pub fn detect(window: &PrimeWindow, predecessor: u64, successor: u64) -> Option<MatchInterval> {
    if !window.is_full() {
        return None;
    }
    let first = window.front()?;
    let last = window.back()?;
    match_bounds(first, last, predecessor, successor)
}

/// Admissible starts for window ends `first`/`last` and neighbours
/// `predecessor`/`successor`.
///
/// A `predecessor` of 0 means no prime precedes the window.
pub fn match_bounds(
    first: u64,
    last: u64,
    predecessor: u64,
    successor: u64,
) -> Option<MatchInterval> {
    // Below INTERVAL_LEN - 1 the "last inside" constraint is vacuous
    let last_inside = last.saturating_sub(INTERVAL_LEN - 1);
    if last_inside > first {
        return None;
    }
    // No start can keep the successor outside
    if successor < INTERVAL_LEN {
        return None;
    }

    let lo = predecessor.saturating_add(1).max(last_inside);
    let hi = first.min(successor - INTERVAL_LEN);
    (lo <= hi).then_some(MatchInterval {
        start: lo,
        latest_start: hi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::SlidingWindow;
    use proptest::prelude::*;

    fn window_of(values: [u64; 12]) -> PrimeWindow {
        SlidingWindow::restore(values)
    }

    #[test]
    fn test_synthetic_match() {
        // L = max(991, 2900 - 2003) = 991, R = min(1000, 3010 - 2004) = 1000
        let window = window_of([
            1000, 1100, 1300, 1500, 1700, 1900, 2100, 2300, 2500, 2700, 2800, 2900,
        ]);
        let found = detect(&window, 990, 3010).unwrap();
        assert_eq!(found.start, 991);
        assert_eq!(found.latest_start, 1000);
        assert_eq!(found.end(), 2994);
    }

    #[test]
    fn test_tight_match_single_start() {
        // Window spans exactly INTERVAL_LEN integers, neighbours adjacent
        let first = 1_000_000;
        let last = first + INTERVAL_LEN - 1;
        let found = match_bounds(first, last, first - 1, last + 1).unwrap();
        assert_eq!(found.start, first);
        assert_eq!(found.latest_start, first);
    }

    #[test]
    fn test_window_too_wide_is_rejected() {
        let first = 1_000_000;
        let last = first + INTERVAL_LEN;
        assert_eq!(match_bounds(first, last, first - 1, last + 100), None);
    }

    #[test]
    fn test_successor_too_close() {
        // succ - LEN < pred + 1
        assert_eq!(match_bounds(5000, 6000, 4990, 6500), None);
    }

    #[test]
    fn test_small_primes_no_underflow() {
        // First twelve primes: 41 - 2004 would wrap, detector must not match
        let window = window_of([2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
        assert_eq!(detect(&window, 0, 41), None);
    }

    #[test]
    fn test_small_last_prime_with_distant_successor() {
        // last < LEN - 1 clamps the left bound to the predecessor side
        let found = match_bounds(100, 1500, 0, 2200).unwrap();
        assert_eq!(found.start, 1);
        assert_eq!(found.latest_start, 100);
    }

    #[test]
    fn test_partial_window_never_matches() {
        let mut window = PrimeWindow::new();
        window.slide(1000);
        assert_eq!(detect(&window, 0, u64::MAX), None);
    }

    fn brute_force_start(first: u64, last: u64, pred: u64, succ: u64) -> Option<u64> {
        let lowest = last.saturating_sub(INTERVAL_LEN);
        (lowest..=first).find(|&x| {
            let end = x + INTERVAL_LEN - 1;
            x <= first && end >= last && (pred == 0 || x > pred) && end < succ
        })
    }

    proptest! {
        #[test]
        fn bounds_follow_formula(
            pred in 0u64..1_000_000,
            d_first in 1u64..3000,
            span in 0u64..3000,
            d_succ in 1u64..3000,
        ) {
            let first = pred + d_first;
            let last = first + span;
            let succ = last + d_succ;

            let lo = (pred as i128 + 1).max(last as i128 - (INTERVAL_LEN as i128 - 1));
            let hi = (first as i128).min(succ as i128 - INTERVAL_LEN as i128);

            let found = match_bounds(first, last, pred, succ);
            if lo <= hi {
                let found = found.unwrap();
                prop_assert_eq!(found.start as i128, lo);
                prop_assert_eq!(found.latest_start as i128, hi);
            } else {
                prop_assert_eq!(found, None);
            }
        }

        #[test]
        fn reported_start_is_minimal(
            pred in 1u64..5000,
            d_first in 1u64..2500,
            span in 0u64..2500,
            d_succ in 1u64..2500,
        ) {
            let first = pred + d_first;
            let last = first + span;
            let succ = last + d_succ;

            let found = match_bounds(first, last, pred, succ).map(|m| m.start);
            prop_assert_eq!(found, brute_force_start(first, last, pred, succ));
        }
    }
}
