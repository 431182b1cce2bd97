//! Square set packed into a single `u32`

use super::{Square, NUM_SQUARES};

/// Set of playable squares, one bit per square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SquareSet {
    bits: u32,
}

impl SquareSet {
    /// Create empty set
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.bits |= 1u32 << sq.index();
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.bits &= !(1u32 << sq.index());
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        (self.bits >> sq.index()) & 1 == 1
    }

    /// Number of squares in the set (popcount)
    #[inline]
    pub fn len(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over member squares in ascending order
    pub fn iter_ones(&self) -> SquareSetIter {
        SquareSetIter { bits: self.bits }
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ones()
    }
}

/// Iterator over set bits in a SquareSet
pub struct SquareSetIter {
    bits: u32,
}

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        debug_assert!(idx < NUM_SQUARES);
        Some(Square::new(idx as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}
