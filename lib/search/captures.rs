use crate::chess::{Move, Position, Role};
use crate::search::{Graviton, Gravity};
use crate::util::{Assume, Integer};
use derive_more::Debug;

/// Historical statistics about a capturing [`Move`].
///
/// Indexed by the side to move, the attacking and captured [`Role`]s, and the destination.
#[derive(Debug)]
#[debug("Captures")]
pub struct Captures(Box<[[[[Graviton; 64]; 6]; 6]; 2]>);

impl Default for Captures {
    #[inline(always)]
    fn default() -> Self {
        Self(unsafe { Box::new_zeroed().assume_init() })
    }
}

impl Captures {
    /// The [`Role`] captured by a [`Move`].
    #[inline(always)]
    pub fn victim<P: Position + ?Sized>(pos: &P, m: Move) -> Role {
        let victim = match m.is_en_passant() {
            true => Role::Pawn,
            false => pos.role_on(m.whither()).assume(),
        };

        (victim != Role::King).assume();
        victim
    }

    /// Resets all statistics to zero.
    pub fn clear(&mut self) {
        self.0.iter_mut().flatten().flatten().flatten().for_each(Graviton::clear);
    }
}

impl Gravity for Captures {
    #[inline(always)]
    fn graviton<P: Position + ?Sized>(&self, pos: &P, m: Move) -> Option<&Graviton> {
        let attacker = pos.role_on(m.whence()).assume();
        let victim = Self::victim(pos, m);
        Some(&self.0[pos.turn().index()][attacker.index()][victim.index()][m.whither().index()])
    }
}
