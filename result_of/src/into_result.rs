use crate::{Panic, Result};

/// Conversion into a [`Result`], used by [`Result::of`] and by the closures
/// passed to [`Result::and_then`], [`Result::or_else`] and [`Result::attempt`].
///
/// A value that already is a [`Result`] is passed through as-is, so closures
/// that return one are never wrapped twice.
pub trait IntoResult<T, E> {
    /// Converts `self` into a [`Result`].
    fn into_result(self) -> Result<T, E>;
}

impl<T, E> IntoResult<T, E> for Result<T, E> {
    #[inline(always)]
    fn into_result(self) -> Result<T, E> {
        self
    }
}

impl<T, E> IntoResult<T, E> for core::result::Result<T, E> {
    fn into_result(self) -> Result<T, E> {
        match self {
            Ok(value) => Result::Success(value),
            Err(error) => Result::Error(error),
        }
    }
}

/// A captured panic is an error value, converted into any error type that
/// accepts one.
impl<T, E> IntoResult<T, E> for Panic
where
    E: From<Panic>,
{
    fn into_result(self) -> Result<T, E> {
        Result::Error(E::from(self))
    }
}
