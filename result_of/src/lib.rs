//! A result type that is exactly one of a successful value or an error value,
//! and whose combinators never unwind.
//!
//! [`Result`] mirrors [`core::result::Result`], with one difference: a closure
//! passed to [`Result::map`], [`Result::and_then`], [`Result::map_error`] or
//! [`Result::or_else`] may panic, and that panic is caught and returned as
//! the [`Result::Error`] variant instead of unwinding through the caller.
//! The error type opts into this by implementing `From<`[`Panic`]`>`.
//!
//! Capture relies on unwinding. The global panic hook still runs first, so
//! with the default hook every captured panic is also printed to stderr;
//! install a quieter hook with [`std::panic::set_hook`] if that is unwanted.
//! In builds with `panic = "abort"` nothing can be captured and the process
//! aborts at the first panic.
//!
//! ```rust
//! use result_of::{Panic, Result};
//!
//! let parsed = Result::<&str, Panic>::Success("42")
//!     .map(|s| s.parse::<u32>().expect("not a number"))
//!     .map(|n| n + 1);
//! assert_eq!(parsed.unwrap(), 43);
//!
//! // this panic becomes an error, and the rest of the chain is skipped
//! let failed = Result::<&str, Panic>::Success("forty-two")
//!     .map(|s| s.parse::<u32>().expect("not a number"))
//!     .map(|n| n + 1);
//! assert!(failed.is_error());
//! assert!(failed.unwrap_error().message().contains("not a number"));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod into_result;
mod panic;

pub use error::ResultError;
pub use into_result::IntoResult;
pub use panic::Panic;

use core::fmt::{self, Display};
use std::any::Any;

/// Which of the two branches a [`Result`] holds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Variant {
    /// The successful branch.
    Success,
    /// The failed branch.
    Error,
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Success => "Success",
            Variant::Error => "Error",
        })
    }
}

/// Either a successful value of type `T`, or an error value of type `E`.
///
/// A `Result` is never modified in place: every combinator consumes it and
/// returns a new one.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[must_use = "this `Result` may be an `Error` variant, which should be handled"]
pub enum Result<T, E> {
    /// Contains the success value.
    Success(T),
    /// Contains the error value.
    Error(E),
}

impl<T, E> Result<T, E> {
    /// Normalizes `value` into a `Result`.
    ///
    /// A `Result` is returned unchanged, a [`core::result::Result`] maps
    /// `Ok` to [`Result::Success`] and `Err` to [`Result::Error`], and a
    /// [`Panic`] becomes [`Result::Error`] for any `E: From<Panic>`.
    ///
    /// ```rust
    /// use result_of::Result;
    ///
    /// let res = Result::<u8, &str>::Success(1);
    /// assert_eq!(Result::of(res), res);
    /// assert_eq!(Result::of(Err::<u8, _>("no")), Result::Error("no"));
    /// ```
    pub fn of(value: impl IntoResult<T, E>) -> Self {
        value.into_result()
    }

    /// Runs `f`, normalizing its output with [`Result::of`]. If `f` panics,
    /// the panic is returned as [`Result::Error`].
    ///
    /// ```rust
    /// use result_of::{Panic, Result};
    ///
    /// let res = Result::<u8, Panic>::attempt(|| -> Result<u8, Panic> {
    ///     panic!("too early")
    /// });
    /// assert_eq!(res.unwrap_error().message(), "too early");
    /// ```
    pub fn attempt<R, Fun>(f: Fun) -> Self
    where
        Fun: FnOnce() -> R,
        R: IntoResult<T, E>,
        E: From<Panic>,
    {
        call((), |()| f())
    }

    /// Which branch this result holds.
    pub fn variant(&self) -> Variant {
        match self {
            Result::Success(_) => Variant::Success,
            Result::Error(_) => Variant::Error,
        }
    }

    /// Returns `true` if the result is [`Result::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Result::Success(_))
    }

    /// Returns `true` if the result is [`Result::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Result::Error(_))
    }

    /// Converts into an [`Option`] holding the success value, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Result::Success(value) => Some(value),
            Result::Error(_) => None,
        }
    }

    /// Converts into an [`Option`] holding the error value, if any.
    pub fn error(self) -> Option<E> {
        match self {
            Result::Success(_) => None,
            Result::Error(error) => Some(error),
        }
    }

    /// Borrows the success value, if any.
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Result::Success(value) => Some(value),
            Result::Error(_) => None,
        }
    }

    /// Borrows the error value, if any.
    pub fn as_error(&self) -> Option<&E> {
        match self {
            Result::Success(_) => None,
            Result::Error(error) => Some(error),
        }
    }

    /// Applies `f` to the success value, leaving an error untouched.
    ///
    /// If `f` panics, the panic is returned as [`Result::Error`].
    pub fn map<U, Fun>(self, f: Fun) -> Result<U, E>
    where
        Fun: FnOnce(T) -> U,
        E: From<Panic>,
    {
        match self {
            Result::Success(value) => {
                call(value, |value| Result::<U, E>::Success(f(value)))
            }
            Result::Error(error) => Result::Error(error),
        }
    }

    /// Applies `f` to the error value, leaving a success untouched.
    ///
    /// If `f` panics, the panic is returned as [`Result::Error`].
    pub fn map_error<E1, Fun>(self, f: Fun) -> Result<T, E1>
    where
        Fun: FnOnce(E) -> E1,
        E1: From<Panic>,
    {
        match self {
            Result::Success(value) => Result::Success(value),
            Result::Error(error) => {
                call(error, |error| Result::<T, E1>::Error(f(error)))
            }
        }
    }

    /// Calls `f` with the success value and normalizes its output with
    /// [`Result::of`]. An error is returned unchanged without calling `f`.
    ///
    /// `f` must return something [`IntoResult`], such as a `Result`; for a
    /// closure that returns a plain value, use [`Result::map`].
    ///
    /// If `f` panics, the panic is returned as [`Result::Error`].
    pub fn and_then<U, R, Fun>(self, f: Fun) -> Result<U, E>
    where
        Fun: FnOnce(T) -> R,
        R: IntoResult<U, E>,
        E: From<Panic>,
    {
        match self {
            Result::Success(value) => call(value, f),
            Result::Error(error) => Result::Error(error),
        }
    }

    /// Calls `f` with the error value and normalizes its output with
    /// [`Result::of`]. A success is returned unchanged without calling `f`.
    ///
    /// If `f` panics, the panic is returned as [`Result::Error`].
    pub fn or_else<E1, R, Fun>(self, f: Fun) -> Result<T, E1>
    where
        Fun: FnOnce(E) -> R,
        R: IntoResult<T, E1>,
        E1: From<Panic>,
    {
        match self {
            Result::Success(value) => Result::Success(value),
            Result::Error(error) => call(error, f),
        }
    }

    /// Returns `other` if this is a success, otherwise this error.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Result::Success(_) => other,
            Result::Error(error) => Result::Error(error),
        }
    }

    /// Returns this success, otherwise `other`.
    pub fn or<E1>(self, other: Result<T, E1>) -> Result<T, E1> {
        match self {
            Result::Success(value) => Result::Success(value),
            Result::Error(_) => other,
        }
    }

    /// Calls `f` with a reference to the success value, if any.
    pub fn inspect<Fun>(self, f: Fun) -> Self
    where
        Fun: FnOnce(&T),
    {
        if let Result::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error value, if any.
    pub fn inspect_error<Fun>(self, f: Fun) -> Self
    where
        Fun: FnOnce(&E),
    {
        if let Result::Error(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the success value.
    ///
    /// ## Panics
    ///
    /// Panics with a [`ResultError::InvalidCall`] message if this is an error.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the error value.
    ///
    /// ## Panics
    ///
    /// Panics with a [`ResultError::InvalidCall`] message if this is a success.
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self.try_unwrap_error() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the success value, or [`ResultError::InvalidCall`] if this is
    /// an error.
    pub fn try_unwrap(self) -> core::result::Result<T, ResultError> {
        match self {
            Result::Success(value) => Ok(value),
            Result::Error(_) => {
                Err(ResultError::invalid_call("unwrap", Variant::Error))
            }
        }
    }

    /// Returns the error value, or [`ResultError::InvalidCall`] if this is
    /// a success.
    pub fn try_unwrap_error(self) -> core::result::Result<E, ResultError> {
        match self {
            Result::Success(_) => {
                Err(ResultError::invalid_call("unwrap_error", Variant::Success))
            }
            Result::Error(error) => Ok(error),
        }
    }

    /// Returns the success value, or `fallback`.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Result::Success(value) => value,
            Result::Error(_) => fallback,
        }
    }

    /// Returns the success value, or computes one from the error with `f`.
    pub fn unwrap_or_else<Fun>(self, f: Fun) -> T
    where
        Fun: FnOnce(E) -> T,
    {
        match self {
            Result::Success(value) => value,
            Result::Error(error) => f(error),
        }
    }

    /// Returns the success value, or panics with `payload` if this is an
    /// error.
    ///
    /// The payload is raised with [`std::panic::panic_any`], so it can be
    /// recovered by whoever catches the panic, including another combinator.
    #[track_caller]
    pub fn expect<P>(self, payload: P) -> T
    where
        P: Any + Send + 'static,
    {
        match self {
            Result::Success(value) => value,
            Result::Error(_) => std::panic::panic_any(payload),
        }
    }

    /// Returns the error value, or panics with `payload` if this is a
    /// success.
    #[track_caller]
    pub fn expect_error<P>(self, payload: P) -> E
    where
        P: Any + Send + 'static,
    {
        match self {
            Result::Success(_) => std::panic::panic_any(payload),
            Result::Error(error) => error,
        }
    }

    /// Converts into the standard library's result type.
    pub fn into_std(self) -> core::result::Result<T, E> {
        self.into()
    }
}

/// Applies `f` to `value` and normalizes its output, turning a panic inside
/// `f` into an error.
fn call<V, T, E, R, Fun>(value: V, f: Fun) -> Result<T, E>
where
    Fun: FnOnce(V) -> R,
    R: IntoResult<T, E>,
    E: From<Panic>,
{
    match panic::trap(value, f) {
        Ok(out) => out.into_result(),
        Err(caught) => Result::Error(E::from(caught)),
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        value.into_result()
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Success(value) => Ok(value),
            Result::Error(error) => Err(error),
        }
    }
}

impl<T, E> Display for Result<T, E>
where
    T: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Result::Success(this) => this.fmt(f),
            Result::Error(this) => this.fmt(f),
        }
    }
}
