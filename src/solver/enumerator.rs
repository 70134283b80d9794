//! Lazy enumeration of the full board search space
//!
//! Boards are the ordered `N`-tuples of the candidate pool, with repetition,
//! numbered in lexicographic order: index `i` written in base `pool.len()`
//! gives the pool position of each row, row 0 most significant. Any index
//! range can therefore be walked without materializing the rest.

use super::board::Board;
use super::candidates::WordCandidate;
use std::ops::Range;

/// A contiguous slice of the enumeration, the unit of parallel work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Position of this chunk among all chunks
    pub index: u64,
    /// Enumeration index of the first board
    pub start: u128,
    /// Number of boards in the chunk
    pub len: u64,
}

impl Chunk {
    /// Enumeration indices covered by this chunk
    #[must_use]
    pub const fn range(&self) -> Range<u128> {
        self.start..self.start + self.len as u128
    }
}

/// Enumerates every board that can be stacked from a candidate pool
#[derive(Debug, Clone, Copy)]
pub struct BoardEnumerator<'a, const N: usize> {
    pool: &'a [WordCandidate<N>],
    total: u128,
}

impl<'a, const N: usize> BoardEnumerator<'a, N> {
    /// Create an enumerator over `pool`
    ///
    /// Returns `None` if `pool.len()^N` does not fit the index type.
    #[must_use]
    pub fn new(pool: &'a [WordCandidate<N>]) -> Option<Self> {
        let exponent = u32::try_from(N).ok()?;
        let total = (pool.len() as u128).checked_pow(exponent)?;
        Some(Self { pool, total })
    }

    /// Total number of boards in the search space
    #[must_use]
    pub const fn len(&self) -> u128 {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub const fn pool(&self) -> &'a [WordCandidate<N>] {
        self.pool
    }

    /// The board at enumeration position `index`
    #[must_use]
    pub fn board_at(&self, index: u128) -> Option<Board<N>> {
        (index < self.total).then(|| {
            let digits = self.digits_of(index);
            Board::new(std::array::from_fn(|row| self.pool[digits[row]]))
        })
    }

    /// Every board, in enumeration order
    #[must_use]
    pub fn iter(&self) -> Boards<'a, N> {
        self.boards_in(0..self.total)
    }

    /// Number of chunks of at most `chunk_size` boards
    ///
    /// Returns `None` if `chunk_size` is 0 or the count overflows `u64`.
    #[must_use]
    pub fn chunk_count(&self, chunk_size: u64) -> Option<u64> {
        if chunk_size == 0 {
            return None;
        }
        u64::try_from(self.total.div_ceil(u128::from(chunk_size))).ok()
    }

    /// The `index`-th chunk of at most `chunk_size` boards
    ///
    /// The final chunk may be shorter; chunks past the end are empty.
    #[must_use]
    pub fn chunk(&self, index: u64, chunk_size: u64) -> Chunk {
        let start = (u128::from(index) * u128::from(chunk_size)).min(self.total);
        let len = (self.total - start).min(u128::from(chunk_size)) as u64;
        Chunk { index, start, len }
    }

    /// All chunks in order; together they cover the enumeration exactly once
    pub fn chunks(&self, chunk_size: u64) -> impl Iterator<Item = Chunk> + '_ {
        let count = self.chunk_count(chunk_size).unwrap_or(0);
        (0..count).map(move |index| self.chunk(index, chunk_size))
    }

    /// Boards of one chunk, in enumeration order
    #[must_use]
    pub fn boards(&self, chunk: &Chunk) -> Boards<'a, N> {
        self.boards_in(chunk.range())
    }

    fn boards_in(&self, range: Range<u128>) -> Boards<'a, N> {
        let end = range.end.min(self.total);
        let start = range.start.min(end);
        Boards {
            pool: self.pool,
            digits: self.digits_of(start),
            remaining: end - start,
        }
    }

    fn digits_of(&self, mut index: u128) -> [usize; N] {
        let base = self.pool.len() as u128;
        let mut digits = [0; N];
        if base == 0 {
            return digits;
        }
        for digit in digits.iter_mut().rev() {
            *digit = (index % base) as usize;
            index /= base;
        }
        digits
    }
}

/// Iterator over a contiguous range of boards
///
/// Holds only the current row positions, never the boards themselves.
#[derive(Debug, Clone)]
pub struct Boards<'a, const N: usize> {
    pool: &'a [WordCandidate<N>],
    digits: [usize; N],
    remaining: u128,
}

impl<const N: usize> Boards<'_, N> {
    /// Step to the next row combination, last row fastest
    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.pool.len() {
                return;
            }
            *digit = 0;
        }
    }
}

impl<const N: usize> Iterator for Boards<'_, N> {
    type Item = Board<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let board = Board::new(std::array::from_fn(|row| self.pool[self.digits[row]]));
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(board)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
