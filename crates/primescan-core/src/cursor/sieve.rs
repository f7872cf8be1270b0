//! Segmented sieve of Eratosthenes behind the [`PrimeCursor`] interface.
//!
//! The cursor keeps one sieved segment of `SEGMENT_SPAN` integers cached and
//! re-sieves whenever a step leaves it. Base primes are grown on demand up to
//! `isqrt` of the segment's upper end, so memory scales with the square root
//! of the largest value visited.

use tracing::debug;

use super::PrimeCursor;

/// Integers covered by one sieved segment
const SEGMENT_SPAN: u64 = 1 << 20;

/// Smallest base-prime table built on first use
const MIN_BASE_LIMIT: u64 = 1 << 12;

/// Sieving primes `<= limit`
#[derive(Debug, Default)]
struct BasePrimes {
    limit: u64,
    primes: Vec<u64>,
}

impl BasePrimes {
    fn ensure(&mut self, limit: u64) {
        if limit <= self.limit && !self.primes.is_empty() {
            return;
        }
        let new_limit = limit.max(self.limit.saturating_mul(2)).max(MIN_BASE_LIMIT);
        let size = new_limit as usize + 1;
        let mut composite = vec![false; size];
        let mut primes = Vec::new();
        for n in 2..size {
            if composite[n] {
                continue;
            }
            primes.push(n as u64);
            let mut m = n * n;
            while m < size {
                composite[m] = true;
                m += n;
            }
        }
        debug!(
            "Base primes extended to {} ({} primes)",
            new_limit,
            primes.len()
        );
        self.limit = new_limit;
        self.primes = primes;
    }
}

/// Primes in `[lo, hi)`
#[derive(Debug, Default)]
struct Segment {
    lo: u64,
    hi: u64,
    primes: Vec<u64>,
}

impl Segment {
    fn contains(&self, n: u64) -> bool {
        self.lo <= n && n < self.hi
    }
}

/// Prime cursor backed by a segmented sieve
#[derive(Debug, Default)]
pub struct SieveCursor {
    base: BasePrimes,
    segment: Segment,
    next_from: u64,
    prev_below: u64,
}

impl SieveCursor {
    pub fn new() -> Self {
        Self::default()
    }

    fn load(&mut self, lo: u64, hi: u64) {
        let primes = self.sieve(lo, hi);
        self.segment = Segment { lo, hi, primes };
    }

    fn sieve(&mut self, lo: u64, hi: u64) -> Vec<u64> {
        if hi <= lo {
            return Vec::new();
        }
        let limit = (hi - 1).isqrt();
        self.base.ensure(limit);

        let mut composite = vec![false; (hi - lo) as usize];
        for &q in self.base.primes.iter().take_while(|&&q| q <= limit) {
            // Start at q*q so q itself survives when it lies in the segment
            let Some(mut m) = lo.div_ceil(q).max(q).checked_mul(q) else {
                continue;
            };
            while m < hi {
                composite[(m - lo) as usize] = true;
                match m.checked_add(q) {
                    Some(next) => m = next,
                    None => break,
                }
            }
        }

        (lo..hi)
            .zip(composite)
            .filter(|&(n, is_composite)| n >= 2 && !is_composite)
            .map(|(n, _)| n)
            .collect()
    }
}

impl PrimeCursor for SieveCursor {
    fn jump_to(&mut self, n: u64) {
        self.next_from = n;
        self.prev_below = n;
    }

    fn next_prime(&mut self) -> Option<u64> {
        loop {
            // u64::MAX is divisible by 3
            if self.next_from == u64::MAX {
                return None;
            }
            if !self.segment.contains(self.next_from) {
                let lo = self.next_from;
                self.load(lo, lo.saturating_add(SEGMENT_SPAN));
            }

            let i = self
                .segment
                .primes
                .partition_point(|&p| p < self.next_from);
            if let Some(&p) = self.segment.primes.get(i) {
                self.next_from = p + 1;
                self.prev_below = p;
                return Some(p);
            }
            self.next_from = self.segment.hi;
        }
    }

    fn prev_prime(&mut self) -> Option<u64> {
        loop {
            if self.prev_below <= 2 {
                return None;
            }
            if !self.segment.contains(self.prev_below - 1) {
                let hi = self.prev_below;
                self.load(hi.saturating_sub(SEGMENT_SPAN), hi);
            }

            let i = self
                .segment
                .primes
                .partition_point(|&p| p < self.prev_below);
            if i > 0 {
                let p = self.segment.primes[i - 1];
                self.next_from = p + 1;
                self.prev_below = p;
                return Some(p);
            }
            self.prev_below = self.segment.lo;
        }
    }
}
