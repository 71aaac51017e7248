use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::{Mutex, PoisonError},
};
use thiserror::Error;

/// A panic captured while running a closure passed to one of the
/// [`Result`](crate::Result) combinators.
///
/// The original payload is kept, so a value raised with
/// [`std::panic::panic_any`] can be recovered with [`Panic::downcast_ref`], or
/// raised again with [`Panic::resume`]. The payload sits behind a [`Mutex`]
/// so that a `Panic`, and any result or error type holding one, is
/// `Send + Sync`.
///
/// ```rust
/// use result_of::{Panic, Result};
///
/// let res = Result::<i32, Panic>::Success(1)
///     .map(|_| -> i32 { panic!("boom") });
///
/// assert!(res.is_error());
/// assert_eq!(res.unwrap_error().message(), "boom");
/// ```
#[derive(Error)]
#[error("{message}")]
pub struct Panic {
    message: String,
    payload: Mutex<Box<dyn Any + Send + 'static>>,
}

impl Panic {
    /// Wraps a payload as returned by [`std::panic::catch_unwind`].
    pub fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("Box<dyn Any>")
        };
        Panic {
            message,
            payload: Mutex::new(payload),
        }
    }

    /// The panic message, if the payload was a string.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the payload is of type `P`.
    pub fn is<P: Any>(&self) -> bool {
        self.payload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is::<P>()
    }

    /// Returns a reference to the payload if it is of type `P`.
    ///
    /// Takes `&mut self` so the payload can be borrowed without holding the
    /// lock.
    pub fn downcast_ref<P: Any>(&mut self) -> Option<&P> {
        self.payload
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .downcast_ref::<P>()
    }

    /// Consumes the wrapper, returning the original payload.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Raises the original payload again, without invoking the panic hook.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.into_payload())
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Applies `f` to `value`, converting a panic into a [`Panic`].
///
/// The global panic hook still runs before the unwind is caught, so the
/// default hook prints the panic message to stderr. Under `panic = "abort"`
/// nothing unwinds and the process aborts instead.
pub(crate) fn trap<V, R>(
    value: V,
    f: impl FnOnce(V) -> R,
) -> core::result::Result<R, Panic> {
    panic::catch_unwind(AssertUnwindSafe(move || f(value))).map_err(|payload| {
        let caught = Panic::from_payload(payload);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            panic_message = caught.message(),
            "captured panic in result combinator"
        );
        caught
    })
}
