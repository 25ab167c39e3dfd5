//! Numeric level: sign checks relative to a leaf-supplied zero.

use std::fmt::Debug;

use super::base::Check;
use super::comparable::Comparable;
use crate::evaluate;
use crate::foundation::Link;

/// Sign checks for numeric contracts.
///
/// "Zero" is not expressible generically, so each leaf supplies it.
pub trait Numeric: Comparable {
    fn zero() -> Self::Value;

    /// Fails unless the value is greater than zero.
    fn be_positive(self) -> Check<Self>
    where
        Self::Value: PartialOrd + Debug,
    {
        evaluate::check_for_greater_than(&Self::zero(), self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    /// Fails unless the value is less than zero.
    fn be_negative(self) -> Check<Self>
    where
        Self::Value: PartialOrd + Debug,
    {
        evaluate::check_for_less_than(&Self::zero(), self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    fn be_zero(self) -> Check<Self>
    where
        Self::Value: PartialEq + Debug,
    {
        evaluate::check_for_specific_value(&Self::zero(), self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }

    fn not_be_zero(self) -> Check<Self>
    where
        Self::Value: PartialEq + Debug,
    {
        evaluate::check_for_not_specific_value(&Self::zero(), self.value(), self.name(), None)?;
        Ok(Link::new(self))
    }
}
