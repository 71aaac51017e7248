use crate::Variant;
use thiserror::Error;

/// Errors produced by the fallible extraction methods of
/// [`Result`](crate::Result).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultError {
    /// A terminal extraction method was called on the wrong variant.
    #[error("Invalid method call \"{method}()\" on a Result of type {variant}")]
    InvalidCall {
        /// The name of the method that was called.
        method: &'static str,
        /// The variant the method was called on.
        variant: Variant,
    },
}

impl ResultError {
    pub(crate) fn invalid_call(method: &'static str, variant: Variant) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(method, %variant, "invalid call on result");
        ResultError::InvalidCall { method, variant }
    }

    /// The variant the offending method was called on.
    pub fn variant(&self) -> Variant {
        match self {
            ResultError::InvalidCall { variant, .. } => *variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_method_and_variant() {
        let err = ResultError::invalid_call("unwrap", Variant::Error);
        assert_eq!(
            err.to_string(),
            "Invalid method call \"unwrap()\" on a Result of type Error"
        );

        let err = ResultError::invalid_call("unwrap_error", Variant::Success);
        assert_eq!(
            err.to_string(),
            "Invalid method call \"unwrap_error()\" on a Result of type Success"
        );
        assert_eq!(err.variant(), Variant::Success);
    }
}
