//! An extension trait for [`Option`]s which are known to be [`Some`].

use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch for dev
    /// builds and [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds.
    ///
    /// Invoking this method asserts that [`None`] is impossible, so no panics annotation is
    /// carried even though dev builds do panic on misuse.
    ///
    /// # Safety
    /// The caller must guarantee that the [`Option`] is [`Some`], usually via a structural
    /// invariant of the containing type.
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible
            // when invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
