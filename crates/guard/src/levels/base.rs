//! Base level: what every contract can do.

use std::fmt::Debug;

use crate::evaluate;
use crate::foundation::{GuardError, Link, ParamName};

/// Result of a check method: a [`Link`] back to the same contract, or the
/// error that ended the chain.
pub type Check<C> = Result<Link<C>, GuardError>;

// ============================================================================
// NULLABLE
// ============================================================================

/// Values that can be absent.
///
/// Only contracts over nullable values get `not_be_null`/`be_null`; asking
/// whether an `i32` is null does not compile.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

// ============================================================================
// CONTRACT
// ============================================================================

/// A value under validation together with its parameter name.
///
/// Check methods consume the contract and, when the condition holds, hand
/// it back inside a [`Link`]. Because they return `Check<Self>`, a check
/// declared here keeps the concrete contract type, and the rest of the
/// chain can still reach every method of that contract:
///
/// ```rust,ignore
/// // `not_be` is declared on `Contract`, `be_positive` on `Numeric`.
/// must!(delta).not_be(7)?.and().be_positive()?;
/// ```
pub trait Contract: Sized {
    /// The type of the guarded value.
    type Value;

    fn value(&self) -> &Self::Value;

    fn name(&self) -> &ParamName;

    /// Gives the guarded value back, typically at the end of a chain.
    fn into_value(self) -> Self::Value;

    /// Fails unless `predicate` holds for the value.
    fn satisfy<F>(self, predicate: F) -> Check<Self>
    where
        F: FnOnce(&Self::Value) -> bool,
    {
        evaluate::check_generic_condition(predicate, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    /// Fails with a null violation if the value is absent.
    fn not_be_null(self) -> Check<Self>
    where
        Self::Value: Nullable,
    {
        evaluate::check_for_not_null(self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    /// Fails if the value is present.
    fn be_null(self) -> Check<Self>
    where
        Self::Value: Nullable,
    {
        evaluate::check_for_null(self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    /// Fails unless the value equals `expected`.
    fn be<U>(self, expected: U) -> Check<Self>
    where
        Self::Value: PartialEq<U>,
        U: Debug,
    {
        evaluate::check_for_specific_value(&expected, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    /// Fails if the value equals `unexpected`.
    fn not_be<U>(self, unexpected: U) -> Check<Self>
    where
        Self::Value: PartialEq<U>,
        U: Debug,
    {
        evaluate::check_for_not_specific_value(&unexpected, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    /// Fails unless the value equals one of `candidates`.
    fn be_any_of<U>(self, candidates: &[U]) -> Check<Self>
    where
        Self::Value: PartialEq<U>,
        U: Debug,
    {
        evaluate::check_for_any_of(candidates, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    /// Fails if the value equals any of `candidates`.
    fn not_be_any_of<U>(self, candidates: &[U]) -> Check<Self>
    where
        Self::Value: PartialEq<U>,
        U: Debug,
    {
        evaluate::check_for_not_any_of(candidates, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }
}
