//! Error types for the optional container.

use thiserror::Error;

/// Faults raised by misusing an [`Optional`](crate::Optional).
///
/// Both variants signal a programmer error at the call site, not a
/// recoverable runtime condition. The panicking accessors format these same
/// errors into their panic messages, so the checked and unchecked surfaces
/// report faults identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// An empty container was asked for its value.
    #[error("no value present")]
    NoValuePresent,

    /// An absent value reached a constructor that requires a present one.
    #[error("absent value where a present value is required")]
    AbsentValue,
}

/// Result type for checked container operations.
pub type OptionalResult<T> = Result<T, OptionalError>;
