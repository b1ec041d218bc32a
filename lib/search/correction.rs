use crate::chess::{Color, Position};
use crate::search::{Bound, Weight};
use crate::util::Integer;
use derive_more::Debug;
use std::cell::Cell;

const BUCKETS: usize = 16384;

/// One slot per [`Bound`].
type Entry = [Cell<i32>; Bound::COUNT];

/// Entries indexed by side to move and structural key.
type Table = [[Entry; BUCKETS]; 2];

/// [Correction] statistics for the static evaluation.
///
/// Learns how far the static evaluation deviates from the search result for positions that share
/// the same pawn structure, non-pawn material of either side, or placement of major pieces.
///
/// [Correction]: https://www.chessprogramming.org/Static_Evaluation_Correction_History
#[derive(Debug)]
#[debug("Correction")]
pub struct Correction {
    pawns: Box<Table>,
    non_pawns: [Box<Table>; 2],
    majors: Box<Table>,
}

impl Default for Correction {
    #[inline(always)]
    fn default() -> Self {
        Correction {
            pawns: unsafe { Box::new_zeroed().assume_init() },
            non_pawns: [
                unsafe { Box::new_zeroed().assume_init() },
                unsafe { Box::new_zeroed().assume_init() },
            ],
            majors: unsafe { Box::new_zeroed().assume_init() },
        }
    }
}

impl Correction {
    /// The number of hash buckets in each table.
    pub const BUCKETS: usize = BUCKETS;

    /// The fixed-point scale of stored corrections.
    pub const GRAIN: i32 = 256;

    /// The denominator of update weights.
    pub const SCALE: i32 = 512;

    /// The largest magnitude of a stored correction.
    pub const LIMIT: i32 = 32 * Self::GRAIN;

    #[inline(always)]
    fn entries<P: Position + ?Sized>(&self, pos: &P) -> [&Entry; 4] {
        let side = pos.turn().index();

        [
            &self.pawns[side][pos.pawns().bucket(BUCKETS)],
            &self.non_pawns[0][side][pos.non_pawns(Color::White).bucket(BUCKETS)],
            &self.non_pawns[1][side][pos.non_pawns(Color::Black).bucket(BUCKETS)],
            &self.majors[side][pos.majors().bucket(BUCKETS)],
        ]
    }

    /// The estimated bias of the static evaluation of a [`Position`] classified as [`Bound`].
    #[inline(always)]
    pub fn get<P: Position + ?Sized>(&self, pos: &P, bound: Bound) -> i32 {
        let [a, b, c, d] = self.entries(pos);
        let sum = a[bound.index()].get()
            + b[bound.index()].get()
            + c[bound.index()].get()
            + d[bound.index()].get();

        sum / Self::GRAIN
    }

    /// Blends the observed `diff` between search result and static evaluation into the estimate.
    ///
    /// The slot for `bound` is weighted by `exact` and its neighbors by `adjacent`, both scaled
    /// by `depth`.
    #[inline(always)]
    pub fn update<P: Position + ?Sized>(
        &self,
        pos: &P,
        depth: i32,
        diff: i32,
        bound: Bound,
        exact: Weight,
        adjacent: Weight,
    ) {
        debug_assert!(depth >= 0, "{depth} < 0");

        let exact = exact.at(depth).clamp(0, Self::SCALE);
        let adjacent = adjacent.at(depth).clamp(0, Self::SCALE);
        let [a, b, c, d] = self.entries(pos);

        blend(a, bound, diff, exact, adjacent);
        blend(b, bound, diff, exact, adjacent);
        blend(c, bound, diff, exact, adjacent);
        blend(d, bound, diff, exact, adjacent);
    }

    /// Resets all statistics to zero.
    pub fn clear(&mut self) {
        let [w, b] = &mut self.non_pawns;
        for table in [&mut self.pawns, w, b, &mut self.majors] {
            table.iter_mut().flatten().flatten().for_each(|s| *s.get_mut() = 0);
        }
    }
}

#[inline(always)]
fn blend(entry: &Entry, bound: Bound, diff: i32, exact: i32, adjacent: i32) {
    nudge(&entry[bound.index()], diff, exact);
    for b in bound.adjacent() {
        nudge(&entry[b.index()], diff, adjacent);
    }
}

#[inline(always)]
fn nudge(slot: &Cell<i32>, diff: i32, weight: i32) {
    let (scale, grain) = (i64::from(Correction::SCALE), i64::from(Correction::GRAIN));
    let (limit, weight) = (i64::from(Correction::LIMIT), i64::from(weight));
    let blended = (i64::from(slot.get()) * (scale - weight) + i64::from(diff) * grain * weight) / scale;
    slot.set(blended.clamp(-limit, limit) as i32);
}
