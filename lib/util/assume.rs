use std::hint::assert_unchecked;

/// Trait for preconditions that callers guarantee.
///
/// Checked in debug builds, handed to the optimizer as facts otherwise.
pub trait Assume {
    /// What remains once the precondition holds.
    type Assumed;

    /// Takes the precondition for granted.
    fn assume(self) -> Self::Assumed;
}

impl Assume for bool {
    type Assumed = ();

    #[track_caller]
    #[inline(always)]
    fn assume(self) -> Self::Assumed {
        debug_assert!(self, "precondition violated");
        unsafe { assert_unchecked(self) }
    }
}

impl<T> Assume for Option<T> {
    type Assumed = T;

    #[track_caller]
    #[inline(always)]
    fn assume(self) -> Self::Assumed {
        debug_assert!(self.is_some(), "expected a value");
        unsafe { self.unwrap_unchecked() }
    }
}
