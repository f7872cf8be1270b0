//! Cursor over a fixed ascending sequence, for driving the search loop with
//! hand-built "prime" layouts.

use super::PrimeCursor;

#[derive(Debug, Clone)]
pub struct SequenceCursor {
    values: Vec<u64>,
    next_from: u64,
    prev_below: u64,
    emitted: usize,
}

impl SequenceCursor {
    /// `values` must be strictly ascending.
    pub fn new(values: Vec<u64>) -> Self {
        debug_assert!(values.windows(2).all(|w| w[0] < w[1]));
        Self {
            values,
            next_from: 0,
            prev_below: 0,
            emitted: 0,
        }
    }

    /// Number of values handed out by `next_prime` so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl PrimeCursor for SequenceCursor {
    fn jump_to(&mut self, n: u64) {
        self.next_from = n;
        self.prev_below = n;
    }

    fn next_prime(&mut self) -> Option<u64> {
        let i = self.values.partition_point(|&v| v < self.next_from);
        let v = *self.values.get(i)?;
        self.next_from = v + 1;
        self.prev_below = v;
        self.emitted += 1;
        Some(v)
    }

    fn prev_prime(&mut self) -> Option<u64> {
        let i = self.values.partition_point(|&v| v < self.prev_below);
        let v = *self.values.get(i.checked_sub(1)?)?;
        self.next_from = v + 1;
        self.prev_below = v;
        Some(v)
    }
}
