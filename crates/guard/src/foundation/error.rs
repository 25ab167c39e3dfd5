//! Error types raised by failing guard checks
//!
//! Every failing check produces a [`GuardError`] carrying three things:
//! the [`ErrorKind`], the resolved parameter name, and a message. The
//! message is either the caller's override (see [`CheckExt::because`]) or
//! a deterministic default generated by the evaluator.
//!
//! All string fields use `Cow<'static, str>` so that names captured by
//! `must!` (which are `&'static str`) never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The three failure categories a guard can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required value was absent.
    NullViolation,
    /// An equality, ordering, membership or custom predicate did not hold.
    ConditionViolation,
    /// A parse/format check failed, or the guard itself was misused
    /// (inverted range, zero divisor).
    InvalidValue,
}

impl ErrorKind {
    /// Stable machine-readable code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NullViolation => "null_violation",
            Self::ConditionViolation => "condition_violation",
            Self::InvalidValue => "invalid_value",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// GUARD ERROR
// ============================================================================

/// A failed guard check.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_guard::prelude::*;
///
/// let retries = 0u32;
/// let err = must!(retries).be_positive().unwrap_err();
///
/// assert_eq!(err.kind(), ErrorKind::ConditionViolation);
/// assert_eq!(err.parameter(), "retries");
/// assert_eq!(err.to_string(), "retries must be greater than 0 (parameter 'retries')");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message} (parameter '{parameter}')")]
pub struct GuardError {
    kind: ErrorKind,
    parameter: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl GuardError {
    /// Creates an error of the given kind.
    pub fn new(
        kind: ErrorKind,
        parameter: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Creates a [`ErrorKind::NullViolation`] error.
    pub fn null_violation(
        parameter: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::NullViolation, parameter, message)
    }

    /// Creates a [`ErrorKind::ConditionViolation`] error.
    pub fn condition_violation(
        parameter: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::ConditionViolation, parameter, message)
    }

    /// Creates a [`ErrorKind::InvalidValue`] error.
    pub fn invalid_value(
        parameter: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::InvalidValue, parameter, message)
    }

    /// Replaces the message, keeping kind and parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The resolved name of the offending argument.
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_null_violation(&self) -> bool {
        self.kind == ErrorKind::NullViolation
    }

    #[must_use]
    pub fn is_condition_violation(&self) -> bool {
        self.kind == ErrorKind::ConditionViolation
    }

    #[must_use]
    pub fn is_invalid_value(&self) -> bool {
        self.kind == ErrorKind::InvalidValue
    }

    /// Converts the error to a JSON object `{kind, parameter, message}`.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind.code(),
            "parameter": self.parameter,
            "message": self.message,
        })
    }
}

/// Result of a guard check or evaluator call.
pub type GuardResult<T> = Result<T, GuardError>;

// ============================================================================
// MESSAGE OVERRIDE
// ============================================================================

/// Extension for replacing the default message of a failed check.
///
/// ```rust,ignore
/// must!(port).be_greater_than(1024).because("ports below 1024 are reserved")?;
/// ```
pub trait CheckExt<T> {
    /// On failure, replaces the error message with `message`. The kind and
    /// parameter name are kept, so `Display` still ends with the parameter.
    fn because(self, message: impl Into<Cow<'static, str>>) -> GuardResult<T>;
}

impl<T> CheckExt<T> for GuardResult<T> {
    #[inline]
    fn because(self, message: impl Into<Cow<'static, str>>) -> GuardResult<T> {
        self.map_err(|error| error.with_message(message))
    }
}

// ============================================================================
// TESTS
// ============================================================================
