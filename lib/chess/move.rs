use crate::chess::Square;
use crate::util::Integer;
use derive_more::{Debug, Display};

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[debug("Move({self})")]
#[display("{_0}{_1}")]
pub struct Move(Square, Square, bool);

impl Move {
    /// Constructs a regular [`Move`].
    #[inline(always)]
    pub fn new(whence: Square, whither: Square) -> Self {
        Move(whence, whither, false)
    }

    /// Constructs an [en passant] capture.
    ///
    /// [en passant]: https://www.chessprogramming.org/En_passant
    #[inline(always)]
    pub fn en_passant(whence: Square, whither: Square) -> Self {
        Move(whence, whither, true)
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// Whether this is an en passant capture.
    #[inline(always)]
    pub fn is_en_passant(&self) -> bool {
        self.2
    }

    /// The combined origin and destination index in the range `0..4096`.
    ///
    /// See [butterfly boards].
    ///
    /// [butterfly boards]: https://www.chessprogramming.org/Butterfly_Boards
    #[inline(always)]
    pub fn butterfly(&self) -> usize {
        self.whence().index() * 64 + self.whither().index()
    }
}
