use crate::chess::{Move, Position};
use derive_more::Debug;
use std::cell::Cell;

/// Trait for tables of [`Graviton`]s indexed by [`Move`].
pub trait Gravity {
    /// The [`Graviton`] that accumulates statistics about a [`Move`], if any.
    fn graviton<P: Position + ?Sized>(&self, pos: &P, m: Move) -> Option<&Graviton>;

    /// Returns the accumulated statistics about a [`Move`].
    #[inline(always)]
    fn get<P: Position + ?Sized>(&self, pos: &P, m: Move) -> i32 {
        self.graviton(pos, m).map_or(0, Graviton::get)
    }

    /// Rewards or penalizes a [`Move`].
    #[inline(always)]
    fn update<P: Position + ?Sized>(&self, pos: &P, m: Move, bonus: i32) {
        if let Some(g) = self.graviton(pos, m) {
            g.update(bonus);
        }
    }
}

/// The unit of [`Gravity`].
///
/// Updates are pulled towards zero as the statistic grows, so that it saturates at
/// [`Graviton::LIMIT`] for bonuses no larger than the limit.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
#[debug("Graviton({})", _0.get())]
#[repr(transparent)]
pub struct Graviton(Cell<i32>);

impl Graviton {
    /// The saturation constant.
    pub const LIMIT: i32 = 16384;

    /// Constructs a [`Graviton`] holding `value`.
    #[inline(always)]
    pub const fn new(value: i32) -> Self {
        Graviton(Cell::new(value))
    }

    /// The current value.
    #[inline(always)]
    pub fn get(&self) -> i32 {
        self.0.get()
    }

    /// Applies `bonus` scaled down by the current value.
    #[inline(always)]
    pub fn update(&self, bonus: i32) {
        self.pull(self.get(), bonus);
    }

    /// Applies `bonus` scaled down by an aggregate `base` shared with other gravitons.
    ///
    /// Unlike [`Graviton::update`], the result is clamped to twice [`Graviton::LIMIT`].
    #[inline(always)]
    pub fn update_relative(&self, base: i32, bonus: i32) {
        self.pull(base, bonus);
        let limit = 2 * Self::LIMIT;
        self.0.set(self.get().clamp(-limit, limit));
    }

    /// Resets to zero.
    #[inline(always)]
    pub fn clear(&mut self) {
        *self.0.get_mut() = 0;
    }

    #[inline(always)]
    fn pull(&self, base: i32, bonus: i32) {
        let (base, bonus) = (i64::from(base), i64::from(bonus));
        let value = i64::from(self.get()) + bonus - base * bonus.abs() / i64::from(Self::LIMIT);
        self.0.set(value.clamp(i32::MIN.into(), i32::MAX.into()) as i32);
    }
}

impl Gravity for Graviton {
    #[inline(always)]
    fn graviton<P: Position + ?Sized>(&self, _: &P, _: Move) -> Option<&Graviton> {
        Some(self)
    }
}

impl<T: Gravity + ?Sized> Gravity for &T {
    #[inline(always)]
    fn graviton<P: Position + ?Sized>(&self, pos: &P, m: Move) -> Option<&Graviton> {
        (**self).graviton(pos, m)
    }
}

impl<T: Gravity> Gravity for Option<T> {
    #[inline(always)]
    fn graviton<P: Position + ?Sized>(&self, pos: &P, m: Move) -> Option<&Graviton> {
        self.as_ref().and_then(|g| g.graviton(pos, m))
    }
}
