use crate::chess::{Move, Position};
use crate::search::{Graviton, Gravity};
use crate::util::{Assume, Integer};
use derive_more::Debug;

/// Statistics about the moves that follow a particular move.
///
/// Indexed by the side to move, the [`Role`](crate::chess::Role) of the moving piece and its
/// destination.
#[derive(Debug)]
#[debug("Reply")]
pub struct Reply([[[Graviton; 64]; 6]; 2]);

impl Reply {
    #[inline(always)]
    fn clear(&mut self) {
        self.0.iter_mut().flatten().flatten().for_each(Graviton::clear);
    }
}

impl Gravity for Reply {
    #[inline(always)]
    fn graviton<P: Position + ?Sized>(&self, pos: &P, m: Move) -> Option<&Graviton> {
        let role = pos.role_on(m.whence()).assume();
        Some(&self.0[pos.turn().index()][role.index()][m.whither().index()])
    }
}

/// [Continuation] statistics.
///
/// Holds one [`Reply`] per side to move, moving [`Role`](crate::chess::Role) and destination.
///
/// [Continuation]: https://www.chessprogramming.org/History_Heuristic#Continuation_History
#[derive(Debug)]
#[debug("Continuation")]
pub struct Continuation(Box<[[[Reply; 64]; 6]; 2]>);

impl Default for Continuation {
    #[inline(always)]
    fn default() -> Self {
        Self(unsafe { Box::new_zeroed().assume_init() })
    }
}

impl Continuation {
    /// How many plies back the ancestor moves whose replies are consulted were played.
    pub const LOOKBACK: [usize; 4] = [1, 2, 4, 6];

    /// The [`Reply`] statistics for moves played after `m`.
    #[inline(always)]
    pub fn reply<P: Position + ?Sized>(&self, pos: &P, m: Move) -> &Reply {
        let role = pos.role_on(m.whence()).assume();
        &self.0[pos.turn().index()][role.index()][m.whither().index()]
    }

    /// Resets all statistics to zero.
    pub fn clear(&mut self) {
        self.0.iter_mut().flatten().flatten().for_each(Reply::clear);
    }
}
