//! The contract hierarchy
//!
//! Each level is a trait whose provided check methods return
//! [`Check<Self>`](Check), so a check inherited from a lower level still
//! yields the concrete leaf contract:
//!
//! | level | trait | adds |
//! |---|---|---|
//! | 1 | [`Contract`] | `satisfy`, null checks, `be`, `not_be`, `be_any_of`, `not_be_any_of` |
//! | 2 | [`Equatable`] | by-reference equality, caller-chosen errors |
//! | 3 | [`Comparable`] | `be_between`, `be_greater_than`, `be_less_than`, ... |
//! | 4 | [`Numeric`] | `be_positive`, `be_negative`, `be_zero`, `not_be_zero` |
//! | 5 | [`Collection`] | `be_empty`, `have_count_*`, `contain`, ... |
//!
//! Leaf contracts in [`crate::contracts`] implement `Contract` and opt into
//! the levels that fit their value shape.

mod base;
mod collection;
mod comparable;
mod equatable;
mod numeric;

pub use base::{Check, Contract, Nullable};
pub use collection::Collection;
pub use comparable::Comparable;
pub use equatable::Equatable;
pub use numeric::Numeric;
