//! # nebula-guard
//!
//! Fluent guard clauses for checking arguments at the top of a function.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_guard::prelude::*;
//!
//! fn schedule(name: &str, retries: u32, tags: &[String]) -> GuardResult<()> {
//!     must!(name).not_be_blank()?.and().have_length_between(3, 64)?;
//!     must!(retries).be_less_or_equal_to(10).because("at most ten retries")?;
//!     must!(tags).have_unique_items()?;
//!     Ok(())
//! }
//! ```
//!
//! A chain starts from a value, picks the [contract](contracts) for its
//! shape, and stops at the first failing check with a [`GuardError`]
//! naming the parameter. A passing check returns a [`Link`] whose
//! [`and`](Link::and) continues with the same contract.
//!
//! ## Parameter Names
//!
//! - [`must!`] captures the argument expression at compile time.
//! - [`Must::must_as`] takes the name explicitly.
//! - [`Must::must`] records the call site and, only if a check fails,
//!   reads the identifier in front of `.must(` back from the source file.
//!   See [`NameResolver`](foundation::NameResolver).
//!
//! ## Levels
//!
//! Checks are grouped into traits in [`levels`]: the base [`Contract`],
//! [`Equatable`], [`Comparable`], [`Numeric`] and [`Collection`]. Each leaf
//! contract opts into the levels that fit its value.
//!
//! ## Errors
//!
//! [`GuardError`] carries an [`ErrorKind`] (null violation, condition
//! violation, invalid value), the parameter name and a message.
//! [`CheckExt::because`] replaces the message; [`Equatable::be_or_else`]
//! raises an error type of the caller's choosing.
//!
//! ## Features
//!
//! - `serde` (default): serialize errors, (de)serialize resolver config
//! - `temporal` (default): date and time contracts backed by `chrono`

pub mod contracts;
mod entry;
pub mod evaluate;
pub mod formats;
pub mod foundation;
pub mod levels;
mod macros;
pub mod prelude;

pub use entry::Must;
pub use foundation::{CheckExt, ErrorKind, GuardError, GuardResult, Link, ParamName};
pub use levels::{Check, Collection, Comparable, Contract, Equatable, Numeric};
