use crate::search::{Continuation, Reply};

const FRAMES: usize = 128;

/// The per-ply frames of a search.
///
/// Each frame caches the [`Reply`] statistics of the move played at that ply, so that deeper
/// plies can look up [`Continuation`] statistics without recomputing them.
#[derive(Debug, Clone)]
pub struct Stack<'a> {
    replies: [Option<&'a Reply>; FRAMES],
}

impl Default for Stack<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Stack<'a> {
    /// The number of frames.
    pub const CAPACITY: usize = FRAMES;

    /// Constructs an empty [`Stack`].
    pub const fn new() -> Self {
        Stack {
            replies: [None; FRAMES],
        }
    }

    /// Caches `reply` in the frame at `ply`.
    ///
    /// Ignored if `ply` is out of bounds.
    #[inline(always)]
    pub fn set(&mut self, ply: usize, reply: Option<&'a Reply>) {
        if let Some(r) = self.replies.get_mut(ply) {
            *r = reply;
        }
    }

    /// The [`Reply`] cached in the frame at `ply`, if any.
    #[inline(always)]
    pub fn get(&self, ply: usize) -> Option<&'a Reply> {
        self.replies.get(ply).copied().flatten()
    }

    /// The [`Reply`] cached `offset` plies before `ply`, if any.
    #[inline(always)]
    pub fn ancestor(&self, ply: usize, offset: usize) -> Option<&'a Reply> {
        self.get(ply.checked_sub(offset)?)
    }

    /// The [`Reply`]s cached at each of the [`Continuation::LOOKBACK`] offsets before `ply`.
    #[inline(always)]
    pub fn ancestors(&self, ply: usize) -> impl Iterator<Item = &'a Reply> + '_ {
        Continuation::LOOKBACK
            .into_iter()
            .filter_map(move |offset| self.ancestor(ply, offset))
    }
}
