//! Equatable level: typed equality and caller-chosen errors.

use std::fmt::Debug;

use super::base::{Check, Contract};
use crate::evaluate;
use crate::foundation::Link;

/// Equality checks beyond the base `be`/`not_be`.
///
/// Implemented for every contract. The `_or_else` variants let one call
/// site raise its own error type instead of [`GuardError`]:
///
/// ```rust,ignore
/// must!(mode).be_or_else(Mode::Strict, |name| ConfigError::NotStrict(name.into()))?;
/// ```
///
/// [`GuardError`]: crate::foundation::GuardError
pub trait Equatable: Contract {
    /// Fails unless the value equals `*expected`, compared by reference so
    /// unsized or expensive-to-move expectations work too.
    fn be_equal_to<U>(self, expected: &U) -> Check<Self>
    where
        Self::Value: PartialEq<U>,
        U: Debug + ?Sized,
    {
        evaluate::check_for_specific_value(expected, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    /// Fails if the value equals `*unexpected`.
    fn not_be_equal_to<U>(self, unexpected: &U) -> Check<Self>
    where
        Self::Value: PartialEq<U>,
        U: Debug + ?Sized,
    {
        evaluate::check_for_not_specific_value(unexpected, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    /// Fails with `raise(parameter_name)` unless the value equals `expected`.
    fn be_or_else<U, E, F>(self, expected: U, raise: F) -> Result<Link<Self>, E>
    where
        Self::Value: PartialEq<U>,
        F: FnOnce(&str) -> E,
    {
        evaluate::check_for_specific_value_or_else(&expected, self.value(), self.name(), raise)?;
        Ok(Link::new(self))
    }

    /// Fails with `raise(parameter_name)` if the value equals `unexpected`.
    fn not_be_or_else<U, E, F>(self, unexpected: U, raise: F) -> Result<Link<Self>, E>
    where
        Self::Value: PartialEq<U>,
        F: FnOnce(&str) -> E,
    {
        evaluate::check_for_not_specific_value_or_else(
            &unexpected,
            self.value(),
            self.name(),
            raise,
        )?;
        Ok(Link::new(self))
    }
}

impl<C: Contract> Equatable for C {}
