//! Building blocks shared by every contract
//!
//! - **Errors**: [`GuardError`], [`ErrorKind`], the [`CheckExt::because`] override
//! - **Chaining**: [`Link`], the token a passing check returns
//! - **Naming**: [`ParamName`] and the source-text [`NameResolver`] fallback

pub mod error;
pub mod link;
pub mod name;
pub mod resolver;

pub use error::{CheckExt, ErrorKind, GuardError, GuardResult};
pub use link::Link;
pub use name::ParamName;
pub use resolver::{DEFAULT_FALLBACK_NAME, DEFAULT_MARKER, NameResolver, ResolverConfig};
