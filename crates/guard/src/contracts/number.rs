//! Numeric contracts
//!
//! One generic contract covers every primitive integer, both floats and
//! `Duration`. Each type supplies its own zero through [`Number`].
//! Integers additionally get parity and divisibility checks, floats get
//! finiteness and tolerance checks.

use std::fmt::Debug;
use std::time::Duration;

use crate::entry::Must;
use crate::evaluate;
use crate::foundation::{Link, ParamName};
use crate::levels::{Check, Comparable, Numeric};

mod sealed {
    pub trait SealedNumber {}
}

/// Types guarded by [`NumberContract`].
///
/// Sealed. `Must` is implemented once for every `T: Number`, so an
/// unsuffixed literal such as `must!(42)` already knows its contract type
/// before integer fallback picks `i32`.
pub trait Number: sealed::SealedNumber + Copy + PartialOrd + Debug {
    const ZERO: Self;
}

crate::macros::contract! {
    /// Contract over a number.
    pub struct NumberContract<T> for T;
}

impl<T> Comparable for NumberContract<T> {}

impl<T: Number> Must for T {
    type Contract = NumberContract<T>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        NumberContract::new(self, name)
    }
}

impl<T: Number> Numeric for NumberContract<T> {
    #[inline]
    fn zero() -> T {
        T::ZERO
    }
}

macro_rules! number {
    ($($ty:ty => $zero:expr),+ $(,)?) => {
        $(
            impl sealed::SealedNumber for $ty {}

            impl Number for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

number! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
    Duration => Duration::ZERO,
}

// ============================================================================
// INTEGERS
// ============================================================================

macro_rules! integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl NumberContract<$ty> {
                /// Fails unless the value is divisible by two.
                pub fn be_even(self) -> Check<Self> {
                    evaluate::check_requirement(self.value % 2 == 0, &self.name, "must be even", None)?;
                    Ok(Link::new(self))
                }

                pub fn be_odd(self) -> Check<Self> {
                    evaluate::check_requirement(self.value % 2 != 0, &self.name, "must be odd", None)?;
                    Ok(Link::new(self))
                }

                /// Fails unless the value is a multiple of `divisor`. A zero
                /// divisor fails as an invalid value.
                pub fn be_divisible_by(self, divisor: $ty) -> Check<Self> {
                    evaluate::check_argument(divisor != 0, &self.name, "divisor must not be zero")?;
                    // `MIN % -1` overflows; every value is divisible by -1.
                    evaluate::check_requirement(
                        self.value.checked_rem(divisor).is_none_or(|r| r == 0),
                        &self.name,
                        format_args!("must be divisible by {divisor}"),
                        None,
                    )?;
                    Ok(Link::new(self))
                }
            }
        )+
    };
}

integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ============================================================================
// FLOATS
// ============================================================================

macro_rules! float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl NumberContract<$ty> {
                /// Fails on NaN and on either infinity.
                pub fn be_finite(self) -> Check<Self> {
                    evaluate::check_requirement(self.value.is_finite(), &self.name, "must be finite", None)?;
                    Ok(Link::new(self))
                }

                pub fn not_be_nan(self) -> Check<Self> {
                    evaluate::check_requirement(!self.value.is_nan(), &self.name, "must not be NaN", None)?;
                    Ok(Link::new(self))
                }

                /// Fails unless `|value - expected| <= tolerance`.
                pub fn be_approximately(self, expected: $ty, tolerance: $ty) -> Check<Self> {
                    evaluate::check_argument(
                        tolerance >= 0.0,
                        &self.name,
                        format_args!("tolerance {tolerance} must be a non-negative number"),
                    )?;
                    evaluate::check_requirement(
                        (self.value - expected).abs() <= tolerance,
                        &self.name,
                        format_args!("must be within {tolerance} of {expected}"),
                        None,
                    )?;
                    Ok(Link::new(self))
                }
            }
        )+
    };
}

float!(f32, f64);

// ============================================================================
// TESTS
// ============================================================================
