use crate::util::Integer;

/// How an evaluation relates to an alpha-beta window.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Bound {
    /// At least [`Bound::MARGIN`] at or below alpha.
    FailVeryLow,
    /// At or below alpha.
    FailLow,
    /// Strictly within the window.
    Exact,
    /// At or above beta.
    FailHigh,
    /// At least [`Bound::MARGIN`] at or above beta.
    FailVeryHigh,
}

unsafe impl Integer for Bound {
    type Repr = u8;
    const MIN: Self::Repr = Bound::FailVeryLow as _;
    const MAX: Self::Repr = Bound::FailVeryHigh as _;
}

impl Bound {
    /// The number of categories.
    pub const COUNT: usize = Self::MAX as usize + 1;

    /// The default distance from the window that separates failing from failing very low or high.
    pub const MARGIN: i32 = 420;

    /// Classifies `eval` relative to the window `alpha..beta` with the default [`Bound::MARGIN`].
    #[inline(always)]
    pub fn classify(eval: i32, alpha: i32, beta: i32) -> Self {
        Self::classify_with_margin(eval, alpha, beta, Self::MARGIN)
    }

    /// Classifies `eval` relative to the window `alpha..beta` with a custom `margin`.
    #[inline(always)]
    pub fn classify_with_margin(eval: i32, alpha: i32, beta: i32, margin: i32) -> Self {
        if eval.saturating_add(margin) <= alpha {
            Bound::FailVeryLow
        } else if eval <= alpha {
            Bound::FailLow
        } else if eval < beta {
            Bound::Exact
        } else if eval < beta.saturating_add(margin) {
            Bound::FailHigh
        } else {
            Bound::FailVeryHigh
        }
    }

    /// The categories immediately below and above this one, if any.
    #[inline(always)]
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        let i = self.get();
        [i.checked_sub(1), i.checked_add(1)]
            .into_iter()
            .flatten()
            .filter(|&i| Self::in_range(i))
            .map(Self::new)
    }
}
