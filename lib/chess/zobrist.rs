use derive_more::{Display, From};

/// A structural key derived from a [`Position`](`crate::chess::Position`).
///
/// Keys only capture part of the position, typically its [zobrist hash] restricted to a subset of
/// the pieces, so distinct positions that share that structure share the same key.
///
/// [zobrist hash]: https://www.chessprogramming.org/Zobrist_Hashing
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{_0:016x}")]
pub struct Zobrist(u64);

impl Zobrist {
    /// Constructs [`Zobrist`] from the raw key.
    #[inline(always)]
    pub const fn new(key: u64) -> Self {
        Zobrist(key)
    }

    /// Returns the raw key.
    #[inline(always)]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The bucket this key falls into in a table of `n` buckets.
    #[inline(always)]
    pub const fn bucket(&self, n: usize) -> usize {
        (self.0 % n as u64) as usize
    }
}
