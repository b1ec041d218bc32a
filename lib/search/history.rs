use crate::chess::{Move, Position};
use crate::search::{Graviton, Gravity};
use crate::util::Integer;
use derive_more::Debug;

/// [Historical statistics] about a quiet [`Move`].
///
/// Statistics are kept per side to move, origin and destination, and whether either end of the
/// move is attacked by the opponent.
///
/// [Historical statistics]: https://www.chessprogramming.org/History_Heuristic
#[derive(Debug)]
#[debug("History")]
pub struct History(Box<[[[Graviton; 4]; 4096]; 2]>);

impl Default for History {
    #[inline(always)]
    fn default() -> Self {
        Self(unsafe { Box::new_zeroed().assume_init() })
    }
}

impl History {
    /// Which ends of a [`Move`] are attacked by the opponent, in the range `0..4`.
    #[inline(always)]
    pub fn exposure<P: Position + ?Sized>(pos: &P, m: Move) -> usize {
        let them = !pos.turn();
        let whence = pos.is_threatened(m.whence(), them);
        let whither = pos.is_threatened(m.whither(), them);
        whence as usize * 2 + whither as usize
    }

    /// Resets all statistics to zero.
    pub fn clear(&mut self) {
        self.0.iter_mut().flatten().flatten().for_each(Graviton::clear);
    }
}

impl Gravity for History {
    #[inline(always)]
    fn graviton<P: Position + ?Sized>(&self, pos: &P, m: Move) -> Option<&Graviton> {
        Some(&self.0[pos.turn().index()][m.butterfly()][Self::exposure(pos, m)])
    }
}
