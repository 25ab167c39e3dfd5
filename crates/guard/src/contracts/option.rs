//! Contracts over optional values
//!
//! `Option<T>` is the nullable shape: it gets `not_be_null`/`be_null` from
//! the base level, can be unwrapped into the inner value's own contract,
//! and behaves as a collection when the inner value is a [`Sequence`].

use crate::entry::Must;
use crate::evaluate;
use crate::foundation::{GuardResult, ParamName};
use crate::levels::Collection;

use super::collection::Sequence;

crate::macros::contract! {
    /// Contract over a value that may be absent.
    pub struct OptionContract<T> for Option<T>;
}

impl<T> Must for Option<T> {
    type Contract = OptionContract<T>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        OptionContract::new(self, name)
    }
}

impl<T> OptionContract<T> {
    /// Requires the value to be present and continues with the contract of
    /// the inner value, under the same name.
    ///
    /// ```rust,ignore
    /// fn connect(port: Option<u16>) -> GuardResult<()> {
    ///     must!(port).into_some()?.be_greater_than(1023)?;
    ///     Ok(())
    /// }
    /// ```
    pub fn into_some(self) -> GuardResult<T::Contract>
    where
        T: Must,
    {
        let Self { value, name } = self;
        match value {
            Some(inner) => Ok(inner.must_named(name)),
            None => Err(evaluate::null_violation(&name, None)),
        }
    }
}

impl<V: Sequence> Collection for OptionContract<V> {
    type Item = V::Item;

    #[inline]
    fn items(&self) -> Option<&[V::Item]> {
        self.value.as_ref().map(Sequence::as_items)
    }
}

// ============================================================================
// TESTS
// ============================================================================
