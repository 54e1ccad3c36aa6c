use std::fmt::Display;

/// Unwrapping for results that can't be handed back to the caller, such as inside an
/// [`Index`](std::ops::Index) implementation.
pub(crate) trait Throw<T> {
    /// Returns the [`Ok`] value, or panics with the error's [`Display`] message rather than its
    /// debug representation.
    ///
    /// # Panics
    /// Panics if `self` is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Display> Throw<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
