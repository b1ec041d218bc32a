use crate::chess::{Move, Position};
use crate::search::{Bound, Captures, Continuation, Correction, Gravity, History};
use crate::search::{Options, Reply, Stack};
use derive_more::Debug;
use tracing::debug;

#[cfg(debug_assertions)]
use tracing::instrument;

/// The heuristic statistics of a search.
///
/// Accumulates evidence about which moves tend to be good, to order moves, and about how biased
/// the static evaluation tends to be, to correct it.
///
/// Every query and update goes through a shared reference, so replies cached in a [`Stack`]
/// remain usable while the statistics are updated. The statistics are not [`Sync`], each search
/// context owns its own.
#[derive(Debug)]
#[debug("Heuristics({options})")]
pub struct Heuristics {
    options: Options,
    history: History,
    continuation: Continuation,
    captures: Captures,
    correction: Correction,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristics {
    /// Constructs zeroed [`Heuristics`] with the default [`Options`].
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Constructs zeroed [`Heuristics`] with the given [`Options`].
    pub fn with_options(options: Options) -> Self {
        debug!(%options, "allocating heuristic statistics");

        Heuristics {
            options,
            history: History::default(),
            continuation: Continuation::default(),
            captures: Captures::default(),
            correction: Correction::default(),
        }
    }

    /// The current [`Options`].
    #[inline(always)]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Classifies `eval` relative to the window `alpha..beta` with the configured margin.
    #[inline(always)]
    pub fn bound(&self, eval: i32, alpha: i32, beta: i32) -> Bound {
        Bound::classify_with_margin(eval, alpha, beta, self.options.margin)
    }

    /// The [history] score of a quiet [`Move`].
    ///
    /// [history]: https://www.chessprogramming.org/History_Heuristic
    #[inline(always)]
    pub fn quiet<P: Position + ?Sized>(&self, pos: &P, m: Move) -> i32 {
        self.history.get(pos, m)
    }

    /// Rewards or penalizes a quiet [`Move`].
    #[inline(always)]
    pub fn update_quiet<P: Position + ?Sized>(&self, pos: &P, m: Move, bonus: i32) {
        self.history.update(pos, m, bonus);
    }

    /// The [`Reply`] statistics for moves played after `m`.
    ///
    /// Meant to be cached in the [`Stack`] frame of the ply `m` is played at.
    #[inline(always)]
    pub fn reply<P: Position + ?Sized>(&self, pos: &P, m: Move) -> &Reply {
        self.continuation.reply(pos, m)
    }

    /// The continuation score of a [`Move`] at `ply`.
    ///
    /// Sums the statistics of the replies cached [`Continuation::LOOKBACK`] plies back, missing
    /// frames contribute nothing.
    #[inline(always)]
    pub fn continuation<P: Position + ?Sized>(
        &self,
        pos: &P,
        m: Move,
        ply: usize,
        stack: &Stack<'_>,
    ) -> i32 {
        stack.ancestors(ply).map(|r| r.get(pos, m)).sum()
    }

    /// Rewards or penalizes a [`Move`] at `ply` in every cached ancestor reply.
    ///
    /// Every reply is pulled towards the continuation score prior to the update rather than its
    /// own value.
    #[inline(always)]
    pub fn update_continuation<P: Position + ?Sized>(
        &self,
        pos: &P,
        m: Move,
        ply: usize,
        stack: &Stack<'_>,
        bonus: i32,
    ) {
        let base = self.continuation(pos, m, ply, stack);
        for reply in stack.ancestors(ply) {
            if let Some(g) = reply.graviton(pos, m) {
                g.update_relative(base, bonus);
            }
        }
    }

    /// The combined history and continuation score of a quiet [`Move`] at `ply`.
    #[inline(always)]
    pub fn quiet_stats<P: Position + ?Sized>(
        &self,
        pos: &P,
        m: Move,
        ply: usize,
        stack: &Stack<'_>,
    ) -> i32 {
        self.quiet(pos, m) + 2 * self.continuation(pos, m, ply, stack)
    }

    /// Rewards or penalizes a quiet [`Move`] at `ply` in both history and continuation.
    #[inline(always)]
    pub fn update_quiet_stats<P: Position + ?Sized>(
        &self,
        pos: &P,
        m: Move,
        ply: usize,
        stack: &Stack<'_>,
        bonus: i32,
    ) {
        self.update_quiet(pos, m, bonus);
        self.update_continuation(pos, m, ply, stack, bonus);
    }

    /// The history score of a capturing [`Move`].
    #[inline(always)]
    pub fn capture<P: Position + ?Sized>(&self, pos: &P, m: Move) -> i32 {
        self.captures.get(pos, m)
    }

    /// Rewards or penalizes a capturing [`Move`].
    #[inline(always)]
    pub fn update_capture<P: Position + ?Sized>(&self, pos: &P, m: Move, bonus: i32) {
        self.captures.update(pos, m, bonus);
    }

    /// The estimated bias of the static evaluation of a [`Position`] classified as [`Bound`].
    #[inline(always)]
    pub fn correction<P: Position + ?Sized>(&self, pos: &P, bound: Bound) -> i32 {
        self.correction.get(pos, bound)
    }

    /// Records that a search to `depth` deviated from the static evaluation by `diff`.
    #[cfg_attr(debug_assertions, instrument(level = "trace", skip(self, pos)))]
    #[inline(always)]
    pub fn update_correction<P: Position + ?Sized>(
        &self,
        pos: &P,
        depth: i32,
        diff: i32,
        bound: Bound,
    ) {
        let (exact, adjacent) = (self.options.exact, self.options.adjacent);
        self.correction.update(pos, depth, diff, bound, exact, adjacent);
    }

    /// Resets all statistics to zero.
    pub fn reset(&mut self) {
        debug!("resetting heuristic statistics");
        self.history.clear();
        self.continuation.clear();
        self.captures.clear();
        self.correction.clear();
    }
}
