//! Independent check of a reported interval start.

use serde::Serialize;

use crate::config::pattern::{INTERVAL_LEN, WINDOW_SIZE};
use crate::cursor::PrimeCursor;

/// Outcome of counting primes in `[start, start + INTERVAL_LEN - 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub start: u64,
    pub end: u64,
    /// Primes found, capped at `WINDOW_SIZE + 1`
    pub prime_count: usize,
    pub verified: bool,
}

/// Count primes in `[start, end]`, stopping once the count exceeds `limit`
pub fn count_primes_between<C: PrimeCursor + ?Sized>(
    cursor: &mut C,
    start: u64,
    end: u64,
    limit: usize,
) -> usize {
    cursor.jump_to(start);
    let mut count = 0;
    while let Some(p) = cursor.next_prime() {
        if p > end {
            break;
        }
        count += 1;
        if count > limit {
            break;
        }
    }
    count
}

/// Check that the interval starting at `start` holds exactly `WINDOW_SIZE` primes
pub fn verify_start<C: PrimeCursor + ?Sized>(cursor: &mut C, start: u64) -> Verification {
    let end = start.saturating_add(INTERVAL_LEN - 1);
    let prime_count = count_primes_between(cursor, start, end, WINDOW_SIZE);
    Verification {
        start,
        end,
        prime_count,
        verified: prime_count == WINDOW_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{SequenceCursor, SieveCursor};

    #[test]
    fn test_count_small_range() {
        let mut cursor = SieveCursor::new();
        // 2, 3, 5, 7, 11, 13, 17, 19, 23, 29
        assert_eq!(count_primes_between(&mut cursor, 0, 30, 100), 10);
        assert_eq!(count_primes_between(&mut cursor, 14, 16, 100), 0);
        assert_eq!(count_primes_between(&mut cursor, 13, 13, 100), 1);
    }

    #[test]
    fn test_count_stops_past_limit() {
        let mut cursor = SieveCursor::new();
        assert_eq!(count_primes_between(&mut cursor, 0, 1_000_000, 12), 13);
    }

    #[test]
    fn test_real_interval_has_too_many_primes() {
        let mut cursor = SieveCursor::new();
        let result = verify_start(&mut cursor, 1_000_000);
        assert_eq!(result.end, 1_002_003);
        assert_eq!(result.prime_count, WINDOW_SIZE + 1);
        assert!(!result.verified);
    }

    #[test]
    fn test_synthetic_interval_verifies() {
        let mut values = vec![5000];
        values.extend((0..12).map(|i| 7000 + 100 * i));
        values.push(9500);
        let mut cursor = SequenceCursor::new(values);

        let result = verify_start(&mut cursor, 6097);
        assert_eq!(result.prime_count, 12);
        assert!(result.verified);

        // One step left drops 8100 out of the interval
        let result = verify_start(&mut cursor, 6096);
        assert_eq!(result.prime_count, 11);
        assert!(!result.verified);
    }

    #[test]
    fn test_interval_end_saturates() {
        let mut cursor = SequenceCursor::new(vec![u64::MAX - 10]);
        let result = verify_start(&mut cursor, u64::MAX - 100);
        assert_eq!(result.end, u64::MAX);
        assert_eq!(result.prime_count, 1);
    }
}
