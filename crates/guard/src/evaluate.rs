//! Predicate evaluator
//!
//! Stateless functions that turn one condition into either `Ok(())` or a
//! [`GuardError`] of the right kind. Every check method on every contract
//! goes through here, so error construction lives in exactly one place.
//!
//! Each function takes the parameter name and an optional message. When the
//! message is `None` a deterministic default is generated, e.g.
//! `"port must be greater than 1024"`. Defaults are only formatted on the
//! failure path; a passing check allocates nothing.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_guard::evaluate;
//! use nebula_guard::foundation::ParamName;
//!
//! let name = ParamName::from("port");
//! evaluate::check_for_greater_than(&1024, &8080, &name, None)?;
//! evaluate::check_for_between(&1, &65535, &8080, &name, Some("port out of range"))?;
//! ```

use std::fmt::{Debug, Display};

use crate::foundation::{ErrorKind, GuardError, GuardResult, ParamName};
use crate::levels::Nullable;

// ============================================================================
// RAISING
// ============================================================================

/// Returns `Ok(())` when `holds`, otherwise the error built by `raise`.
///
/// This is the seam for callers who want a different error type than
/// [`GuardError`].
#[inline]
pub fn ensure<E>(holds: bool, raise: impl FnOnce() -> E) -> Result<(), E> {
    if holds { Ok(()) } else { Err(raise()) }
}

#[cold]
#[inline(never)]
fn raise(
    kind: ErrorKind,
    name: &ParamName,
    message: Option<&str>,
    default: impl FnOnce(&str) -> String,
) -> GuardError {
    let parameter = name.resolve();
    let message = match message {
        Some(message) => message.to_owned(),
        None => default(&parameter),
    };
    GuardError::new(kind, parameter, message)
}

// ============================================================================
// NULLABILITY
// ============================================================================

/// Fails with [`ErrorKind::NullViolation`] if `value` is absent.
#[inline]
pub fn check_for_not_null<T>(value: &T, name: &ParamName, message: Option<&str>) -> GuardResult<()>
where
    T: Nullable + ?Sized,
{
    ensure(!value.is_null(), || null_violation(name, message))
}

/// Builds the error [`check_for_not_null`] raises, for callers that have
/// already matched the absent case themselves.
#[cold]
pub fn null_violation(name: &ParamName, message: Option<&str>) -> GuardError {
    raise(ErrorKind::NullViolation, name, message, |n| {
        format!("{n} must not be null")
    })
}

/// Fails with [`ErrorKind::ConditionViolation`] if `value` is present.
#[inline]
pub fn check_for_null<T>(value: &T, name: &ParamName, message: Option<&str>) -> GuardResult<()>
where
    T: Nullable + ?Sized,
{
    ensure(value.is_null(), || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must be null")
        })
    })
}

// ============================================================================
// EQUALITY
// ============================================================================

/// Fails unless `actual == expected`.
#[inline]
pub fn check_for_specific_value<T, U>(
    expected: &U,
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: PartialEq<U> + ?Sized,
    U: Debug + ?Sized,
{
    ensure(actual == expected, || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must be {expected:?}")
        })
    })
}

/// Like [`check_for_specific_value`], raising the caller's own error.
///
/// `raise` receives the resolved parameter name.
#[inline]
pub fn check_for_specific_value_or_else<T, U, E>(
    expected: &U,
    actual: &T,
    name: &ParamName,
    raise: impl FnOnce(&str) -> E,
) -> Result<(), E>
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    ensure(actual == expected, || raise(&*name.resolve()))
}

/// Fails if `actual == unexpected`.
#[inline]
pub fn check_for_not_specific_value<T, U>(
    unexpected: &U,
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: PartialEq<U> + ?Sized,
    U: Debug + ?Sized,
{
    ensure(actual != unexpected, || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must not be {unexpected:?}")
        })
    })
}

/// Like [`check_for_not_specific_value`], raising the caller's own error.
#[inline]
pub fn check_for_not_specific_value_or_else<T, U, E>(
    unexpected: &U,
    actual: &T,
    name: &ParamName,
    raise: impl FnOnce(&str) -> E,
) -> Result<(), E>
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    ensure(actual != unexpected, || raise(&*name.resolve()))
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Fails unless `actual` equals one of `candidates`.
///
/// An empty candidate list never matches.
#[inline]
pub fn check_for_any_of<T, U>(
    candidates: &[U],
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: PartialEq<U> + ?Sized,
    U: Debug,
{
    ensure(candidates.iter().any(|c| actual == c), || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must be one of {candidates:?}")
        })
    })
}

/// Fails if `actual` equals any of `candidates`.
///
/// An empty candidate list always passes.
#[inline]
pub fn check_for_not_any_of<T, U>(
    candidates: &[U],
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: PartialEq<U> + ?Sized,
    U: Debug,
{
    ensure(!candidates.iter().any(|c| actual == c), || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must not be one of {candidates:?}")
        })
    })
}

// ============================================================================
// ORDERING
// ============================================================================

/// Fails unless `start <= actual <= end`.
///
/// An inverted range (`start > end`) is a misuse of the guard and fails with
/// [`ErrorKind::InvalidValue`] before `actual` is looked at.
#[inline]
pub fn check_for_between<T, U>(
    start: &U,
    end: &U,
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: PartialOrd<U> + ?Sized,
    U: PartialOrd + Debug,
{
    check_argument(!(start > end), name, format_args!(
        "range start {start:?} must not exceed end {end:?}"
    ))?;

    ensure(actual >= start && actual <= end, || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must be between {start:?} and {end:?}")
        })
    })
}

/// Fails unless `actual > bound`.
#[inline]
pub fn check_for_greater_than<T, U>(
    bound: &U,
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: PartialOrd<U> + ?Sized,
    U: Debug + ?Sized,
{
    ensure(actual > bound, || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must be greater than {bound:?}")
        })
    })
}

/// Fails unless `actual >= bound`.
#[inline]
pub fn check_for_greater_or_equal_to<T, U>(
    bound: &U,
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: PartialOrd<U> + ?Sized,
    U: Debug + ?Sized,
{
    ensure(actual >= bound, || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must be greater than or equal to {bound:?}")
        })
    })
}

/// Fails unless `actual < bound`.
#[inline]
pub fn check_for_less_than<T, U>(
    bound: &U,
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: PartialOrd<U> + ?Sized,
    U: Debug + ?Sized,
{
    ensure(actual < bound, || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must be less than {bound:?}")
        })
    })
}

/// Fails unless `actual <= bound`.
#[inline]
pub fn check_for_less_or_equal_to<T, U>(
    bound: &U,
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: PartialOrd<U> + ?Sized,
    U: Debug + ?Sized,
{
    ensure(actual <= bound, || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} must be less than or equal to {bound:?}")
        })
    })
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Fails unless `predicate(actual)` returns `true`.
#[inline]
pub fn check_generic_condition<T, F>(
    predicate: F,
    actual: &T,
    name: &ParamName,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: ?Sized,
    F: FnOnce(&T) -> bool,
{
    ensure(predicate(actual), || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("Condition for argument {n} was not satisfied")
        })
    })
}

/// Fails unless `holds`; the default message is `"{name} {requirement}"`.
///
/// Leaf contracts use this for their shape-specific predicates, passing
/// `format_args!` so the requirement text is only rendered on failure.
#[inline]
pub fn check_requirement(
    holds: bool,
    name: &ParamName,
    requirement: impl Display,
    message: Option<&str>,
) -> GuardResult<()> {
    ensure(holds, || {
        raise(ErrorKind::ConditionViolation, name, message, |n| {
            format!("{n} {requirement}")
        })
    })
}

/// Fails with [`ErrorKind::InvalidValue`] unless `parses(actual)`.
#[inline]
pub fn check_for_format<T, F>(
    parses: F,
    actual: &T,
    name: &ParamName,
    format: &str,
    message: Option<&str>,
) -> GuardResult<()>
where
    T: ?Sized,
    F: FnOnce(&T) -> bool,
{
    ensure(parses(actual), || {
        raise(ErrorKind::InvalidValue, name, message, |n| {
            format!("{n} must be a valid {format}")
        })
    })
}

/// Fails with [`ErrorKind::InvalidValue`] when a guard is used wrongly,
/// e.g. an inverted range or a zero divisor.
#[inline]
pub fn check_argument(holds: bool, name: &ParamName, problem: impl Display) -> GuardResult<()> {
    ensure(holds, || {
        raise(ErrorKind::InvalidValue, name, None, |_| problem.to_string())
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> ParamName {
        ParamName::from("arg")
    }

    #[test]
    fn test_not_null() {
        assert!(check_for_not_null(&Some(1), &name(), None).is_ok());

        let err = check_for_not_null(&None::<i32>, &name(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullViolation);
        assert_eq!(err.message(), "arg must not be null");
    }

    #[test]
    fn test_null_uses_condition_kind() {
        assert!(check_for_null(&None::<i32>, &name(), None).is_ok());

        let err = check_for_null(&Some(1), &name(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConditionViolation);
        assert_eq!(err.message(), "arg must be null");
    }

    #[test]
    fn test_specific_value() {
        assert!(check_for_specific_value(&5, &5, &name(), None).is_ok());
        let err = check_for_specific_value(&5, &6, &name(), None).unwrap_err();
        assert_eq!(err.message(), "arg must be 5");

        assert!(check_for_not_specific_value(&5, &6, &name(), None).is_ok());
        let err = check_for_not_specific_value("x", "x", &name(), None).unwrap_err();
        assert_eq!(err.message(), "arg must not be \"x\"");
    }

    #[test]
    fn test_specific_value_custom_error() {
        #[derive(Debug, PartialEq)]
        struct Mismatch(String);

        let result = check_for_specific_value_or_else(&1, &2, &name(), |n| Mismatch(n.to_owned()));
        assert_eq!(result, Err(Mismatch("arg".to_owned())));

        let result = check_for_not_specific_value_or_else(&1, &2, &name(), |n| Mismatch(n.to_owned()));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_custom_message_is_verbatim() {
        let err = check_for_specific_value(&5, &6, &name(), Some("must be five")).unwrap_err();
        assert_eq!(err.message(), "must be five");
        assert_eq!(err.parameter(), "arg");
    }

    #[test]
    fn test_any_of_empty_candidates() {
        let empty: [i32; 0] = [];
        assert!(check_for_any_of(&empty, &1, &name(), None).is_err());
        assert!(check_for_not_any_of(&empty, &1, &name(), None).is_ok());
    }

    #[test]
    fn test_any_of() {
        assert!(check_for_any_of(&[1, 2, 3], &2, &name(), None).is_ok());
        let err = check_for_any_of(&[1, 2, 3], &4, &name(), None).unwrap_err();
        assert_eq!(err.message(), "arg must be one of [1, 2, 3]");

        assert!(check_for_not_any_of(&[1, 2, 3], &4, &name(), None).is_ok());
        assert!(check_for_not_any_of(&[1, 2, 3], &3, &name(), None).is_err());
    }

    #[test]
    fn test_between_inclusive() {
        assert!(check_for_between(&1, &10, &1, &name(), None).is_ok());
        assert!(check_for_between(&1, &10, &10, &name(), None).is_ok());
        assert!(check_for_between(&1, &10, &5, &name(), None).is_ok());

        let err = check_for_between(&1, &10, &11, &name(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConditionViolation);
        assert_eq!(err.message(), "arg must be between 1 and 10");
    }

    #[test]
    fn test_between_inverted_range_is_invalid() {
        let err = check_for_between(&10, &1, &5, &name(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.message(), "range start 10 must not exceed end 1");
    }

    #[test]
    fn test_between_single_point_range() {
        assert!(check_for_between(&3, &3, &3, &name(), None).is_ok());
        assert!(check_for_between(&3, &3, &4, &name(), None).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(check_for_greater_than(&10, &42, &name(), None).is_ok());
        assert!(check_for_greater_than(&10, &10, &name(), None).is_err());
        assert!(check_for_greater_or_equal_to(&10, &10, &name(), None).is_ok());
        assert!(check_for_less_than(&10, &9, &name(), None).is_ok());
        assert!(check_for_less_than(&10, &10, &name(), None).is_err());
        assert!(check_for_less_or_equal_to(&10, &10, &name(), None).is_ok());
        assert!(check_for_less_or_equal_to(&10, &11, &name(), None).is_err());
    }

    #[test]
    fn test_ordering_nan_never_passes() {
        assert!(check_for_greater_than(&0.0, &f64::NAN, &name(), None).is_err());
        assert!(check_for_less_or_equal_to(&0.0, &f64::NAN, &name(), None).is_err());
    }

    #[test]
    fn test_generic_condition() {
        assert!(check_generic_condition(|v: &i32| v % 2 == 0, &4, &name(), None).is_ok());

        let err = check_generic_condition(|v: &i32| v % 2 == 0, &3, &name(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConditionViolation);
        assert_eq!(err.message(), "Condition for argument arg was not satisfied");
    }

    #[test]
    fn test_requirement_formats_lazily() {
        let err =
            check_requirement(false, &name(), format_args!("must contain {:?}", "@"), None).unwrap_err();
        assert_eq!(err.message(), "arg must contain \"@\"");
    }

    #[test]
    fn test_format() {
        let parses = |s: &str| s.parse::<u8>().is_ok();
        assert!(check_for_format(parses, "200", &name(), "byte", None).is_ok());

        let err = check_for_format(parses, "300", &name(), "byte", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.message(), "arg must be a valid byte");
    }

    #[test]
    fn test_argument() {
        assert!(check_argument(true, &name(), "unused").is_ok());
        let err = check_argument(false, &name(), "divisor must not be zero").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.message(), "divisor must not be zero");
    }
}
