//! Macros for starting chains and declaring contracts.
//!
//! # Available Macros
//!
//! - [`must!`]: start a chain, naming it after the argument expression
//! - [`impl_must!`]: opt struct-like types into [`ValueContract`](crate::contracts::ValueContract)
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_guard::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
//! struct Priority(u8);
//!
//! nebula_guard::impl_must!(Priority);
//!
//! fn schedule(priority: Priority) -> GuardResult<()> {
//!     must!(priority).be_between(Priority(1), Priority(9))?;
//!     Ok(())
//! }
//! ```

// ============================================================================
// MUST MACRO
// ============================================================================

/// Starts a validation chain named after the argument expression.
///
/// A leading `&` is not part of the name, so `must!(&user.email)` is
/// named `user.email`. A second argument overrides the name.
///
/// ```rust,ignore
/// must!(port).be_greater_than(1023)?;
/// must!(&config.hosts).not_be_empty()?;
/// must!(port, "listen.port").be_greater_than(1023)?;
/// ```
#[macro_export]
macro_rules! must {
    (& $value:expr $(,)?) => {
        $crate::Must::must_named(
            &$value,
            $crate::foundation::ParamName::literal(::core::stringify!($value)),
        )
    };
    ($value:expr $(,)?) => {
        $crate::Must::must_named(
            $value,
            $crate::foundation::ParamName::literal(::core::stringify!($value)),
        )
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::Must::must_as($value, $name)
    };
}

// ============================================================================
// IMPL MUST MACRO
// ============================================================================

/// Implements [`Must`](crate::Must) for struct-like types, guarding them
/// with [`ValueContract`](crate::contracts::ValueContract).
///
/// The contract gets the base checks and, when the type is `PartialOrd`,
/// the ordering checks.
#[macro_export]
macro_rules! impl_must {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Must for $ty {
                type Contract = $crate::contracts::ValueContract<$ty>;

                #[inline]
                fn must_named(self, name: $crate::foundation::ParamName) -> Self::Contract {
                    $crate::contracts::ValueContract::new(self, name)
                }
            }
        )+
    };
}

// ============================================================================
// CONTRACT MACRO
// ============================================================================

/// Declares a leaf contract: the struct holding `(value, name)`, its
/// constructor, and the base [`Contract`](crate::levels::Contract) impl.
macro_rules! contract {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(<$($g:ident),+>)? for $value:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name $(<$($g),+>)? {
            value: $value,
            name: $crate::foundation::ParamName,
        }

        impl $(<$($g),+>)? $name $(<$($g),+>)? {
            /// Starts a contract over `value` named `name`.
            pub fn new(value: $value, name: $crate::foundation::ParamName) -> Self {
                Self { value, name }
            }
        }

        impl $(<$($g),+>)? $crate::levels::Contract for $name $(<$($g),+>)? {
            type Value = $value;

            #[inline]
            fn value(&self) -> &Self::Value {
                &self.value
            }

            #[inline]
            fn name(&self) -> &$crate::foundation::ParamName {
                &self.name
            }

            #[inline]
            fn into_value(self) -> Self::Value {
                self.value
            }
        }
    };
}

pub(crate) use contract;
