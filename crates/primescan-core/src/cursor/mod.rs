//! Ordered, bidirectional prime enumeration.
//!
//! The search loop only talks to [`PrimeCursor`]; [`SieveCursor`] is the
//! production implementation.

#[cfg(test)]
pub mod mock;
mod sieve;

pub use sieve::SieveCursor;

#[cfg(test)]
pub use mock::SequenceCursor;

/// A cursor over the primes in ascending order.
///
/// After `jump_to(n)`, `next_prime()` yields the first prime `>= n` and
/// `prev_prime()` yields the last prime `< n`. After either call returns
/// `x`, `next_prime()` yields the prime after `x` and `prev_prime()` the
/// prime before `x`. `None` means no such prime exists in the `u64` range.
pub trait PrimeCursor {
    fn jump_to(&mut self, n: u64);

    fn next_prime(&mut self) -> Option<u64>;

    fn prev_prime(&mut self) -> Option<u64>;
}

impl<C: PrimeCursor + ?Sized> PrimeCursor for &mut C {
    fn jump_to(&mut self, n: u64) {
        (**self).jump_to(n)
    }

    fn next_prime(&mut self) -> Option<u64> {
        (**self).next_prime()
    }

    fn prev_prime(&mut self) -> Option<u64> {
        (**self).prev_prime()
    }
}
