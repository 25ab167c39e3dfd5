//! Prelude module for convenient imports.
//!
//! `use nebula_guard::prelude::*;` brings in the `must!` macro, the entry
//! trait, every level trait (their methods are only callable when the
//! trait is in scope) and the error types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_guard::prelude::*;
//!
//! fn rename(flow_id: Uuid, name: Option<String>) -> GuardResult<()> {
//!     must!(flow_id).not_be_nil()?;
//!     must!(name).into_some()?.not_be_blank()?;
//!     Ok(())
//! }
//! ```

// ============================================================================
// ENTRY: Starting a chain
// ============================================================================

pub use crate::Must;
pub use crate::must;

// ============================================================================
// LEVELS: Check methods shared across contracts
// ============================================================================

pub use crate::levels::{Check, Collection, Comparable, Contract, Equatable, Numeric};

// ============================================================================
// FOUNDATION: Errors, chaining, names
// ============================================================================

pub use crate::foundation::{CheckExt, ErrorKind, GuardError, GuardResult, Link, ParamName};

// ============================================================================
// CONTRACTS: Leaf contract types
// ============================================================================

pub use crate::contracts::{
    BoolContract, CharContract, CollectionContract, Number, NumberContract, OptionContract,
    Sequence, StringContract, ValueContract,
};

#[cfg(feature = "temporal")]
pub use crate::contracts::TemporalContract;
