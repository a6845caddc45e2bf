/// A trait for types that can be assumed to hold a value.
pub trait Assume {
    /// The type of the assumed value.
    type Assumed;

    /// Assume `Self` holds a value of `Self::Assumed`.
    ///
    /// Only checked in debug builds, callers must uphold the assumption.
    fn assume(self) -> Self::Assumed;
}

impl<T> Assume for Option<T> {
    type Assumed = T;

    #[track_caller]
    #[inline(always)]
    fn assume(self) -> Self::Assumed {
        debug_assert!(self.is_some(), "assumed `Some` but found `None`");
        // Unit tests exercise every caller in debug builds.
        unsafe { self.unwrap_unchecked() }
    }
}
