use crate::chess::{Color, Role, Square, Zobrist};

#[cfg(test)]
use crate::util::Integer;

/// The board as seen by the heuristic statistics.
///
/// Implemented by the host engine's position representation, which is responsible for legality
/// and for keeping the structural keys up to date as moves are played.
#[cfg_attr(test, mockall::automock)]
pub trait Position {
    /// The side to move.
    fn turn(&self) -> Color;

    /// The [`Role`] of the piece on a [`Square`], if any.
    fn role_on(&self, sq: Square) -> Option<Role>;

    /// Whether a [`Square`] is attacked by a piece of the given [`Color`].
    fn is_threatened(&self, sq: Square, by: Color) -> bool;

    /// Key over the placement of pawns of both sides.
    fn pawns(&self) -> Zobrist;

    /// Key over the placement of the non-pawn pieces of one side, king included.
    fn non_pawns(&self, side: Color) -> Zobrist;

    /// Key over the placement of rooks, queens and kings of both sides.
    fn majors(&self) -> Zobrist;
}

impl<T: Position + ?Sized> Position for &T {
    #[inline(always)]
    fn turn(&self) -> Color {
        (**self).turn()
    }

    #[inline(always)]
    fn role_on(&self, sq: Square) -> Option<Role> {
        (**self).role_on(sq)
    }

    #[inline(always)]
    fn is_threatened(&self, sq: Square, by: Color) -> bool {
        (**self).is_threatened(sq, by)
    }

    #[inline(always)]
    fn pawns(&self) -> Zobrist {
        (**self).pawns()
    }

    #[inline(always)]
    fn non_pawns(&self, side: Color) -> Zobrist {
        (**self).non_pawns(side)
    }

    #[inline(always)]
    fn majors(&self) -> Zobrist {
        (**self).majors()
    }
}

#[cfg(test)]
impl MockPosition {
    /// A stub with `turn` to move and `board` listing the role on each square.
    ///
    /// Squares in the `threats` bitboard are attacked by the side not to move, and `keys` holds
    /// the pawn, white non-pawn, black non-pawn and major keys in that order.
    pub fn stub(turn: Color, board: [Option<Role>; 64], threats: u64, keys: [Zobrist; 4]) -> Self {
        let mut pos = MockPosition::new();
        pos.expect_turn().return_const(turn);
        pos.expect_role_on().returning(move |sq| board[sq.index()]);
        pos.expect_is_threatened()
            .returning(move |sq, by| by != turn && threats & (1 << sq.index()) != 0);
        pos.expect_pawns().return_const(keys[0]);
        pos.expect_non_pawns().returning(move |c| keys[1 + c.index()]);
        pos.expect_majors().return_const(keys[3]);
        pos
    }
}
