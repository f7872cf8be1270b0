//! Fixed-capacity window over the most recent primes.

use crate::config::pattern::WINDOW_SIZE;

/// The window size the search runs with
pub type PrimeWindow = SlidingWindow<WINDOW_SIZE>;

/// Ring buffer holding up to `N` ascending values.
///
/// Once full, every [`slide`](Self::slide) evicts the oldest value in O(1)
/// without allocating. The capacity must be non-zero:
///
/// ```compile_fail
/// let _ = primescan_core::SlidingWindow::<0>::new();
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindow<const N: usize> {
    buf: [u64; N],
    /// Index of the oldest element
    head: usize,
    len: usize,
}

impl<const N: usize> SlidingWindow<N> {
    pub fn new() -> Self {
        const { assert!(N > 0, "window capacity must be non-zero") };
        Self {
            buf: [0; N],
            head: 0,
            len: 0,
        }
    }

    /// Rebuild a full window from values in ascending order
    pub fn restore(values: [u64; N]) -> Self {
        const { assert!(N > 0, "window capacity must be non-zero") };
        Self {
            buf: values,
            head: 0,
            len: N,
        }
    }

    /// Admit `p` as the newest element.
    ///
    /// Returns the evicted oldest element once the window is full, `None`
    /// while it is still filling.
    pub fn slide(&mut self, p: u64) -> Option<u64> {
        if self.len < N {
            self.buf[(self.head + self.len) % N] = p;
            self.len += 1;
            return None;
        }

        // The slot being vacated by the oldest element becomes the newest
        let evicted = std::mem::replace(&mut self.buf[self.head], p);
        self.head = (self.head + 1) % N;
        Some(evicted)
    }

    pub fn front(&self) -> Option<u64> {
        (self.len > 0).then(|| self.buf[self.head])
    }

    pub fn back(&self) -> Option<u64> {
        (self.len > 0).then(|| self.buf[(self.head + self.len - 1) % N])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Elements from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len).map(move |i| self.buf[(self.head + i) % N])
    }

    /// Contents in ascending order, or `None` if the window is not full
    pub fn snapshot(&self) -> Option<[u64; N]> {
        if !self.is_full() {
            return None;
        }
        let mut out = [0; N];
        for (slot, value) in out.iter_mut().zip(self.iter()) {
            *slot = value;
        }
        Some(out)
    }
}

/// Windows are equal when they hold the same elements in the same order,
/// wherever the ring happens to start
impl<const N: usize> PartialEq for SlidingWindow<N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<const N: usize> Eq for SlidingWindow<N> {}

impl<const N: usize> Default for SlidingWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}
