//! Comparable level: ordering checks.

use std::fmt::Debug;

use super::base::{Check, Contract};
use crate::evaluate;
use crate::foundation::Link;

/// Ordering checks for contracts over ordered values.
///
/// Leaf contracts opt in with an empty `impl`. Membership (`be_any_of`,
/// `not_be_any_of`) comes from [`Contract`]; `PartialEq` and `PartialOrd`
/// must agree, so ordering-aware membership is plain equality.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_guard::prelude::*;
///
/// let port = 8080u16;
/// must!(port).be_between(1024, 49151)?;
/// must!(port).be_greater_than(1023)?.and().be_less_or_equal_to(u16::MAX)?;
/// ```
pub trait Comparable: Contract {
    /// Fails unless `start <= value <= end`. An inverted range fails as
    /// an invalid value.
    fn be_between<U>(self, start: U, end: U) -> Check<Self>
    where
        Self::Value: PartialOrd<U>,
        U: PartialOrd + Debug,
    {
        evaluate::check_for_between(&start, &end, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    fn be_greater_than<U>(self, bound: U) -> Check<Self>
    where
        Self::Value: PartialOrd<U>,
        U: Debug,
    {
        evaluate::check_for_greater_than(&bound, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    fn be_greater_or_equal_to<U>(self, bound: U) -> Check<Self>
    where
        Self::Value: PartialOrd<U>,
        U: Debug,
    {
        evaluate::check_for_greater_or_equal_to(&bound, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    fn be_less_than<U>(self, bound: U) -> Check<Self>
    where
        Self::Value: PartialOrd<U>,
        U: Debug,
    {
        evaluate::check_for_less_than(&bound, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    fn be_less_or_equal_to<U>(self, bound: U) -> Check<Self>
    where
        Self::Value: PartialOrd<U>,
        U: Debug,
    {
        evaluate::check_for_less_or_equal_to(&bound, self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }
}
