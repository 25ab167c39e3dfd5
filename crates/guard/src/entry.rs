//! Entry points that start a validation chain.

use std::borrow::Cow;

use crate::foundation::ParamName;
use crate::levels::Contract;

/// Turns a value into the contract for its shape.
///
/// There are three ways to start a chain, differing only in how the
/// parameter name is obtained:
///
/// ```rust,ignore
/// must!(timeout).be_positive()?;              // "timeout", captured by the macro
/// timeout.must_as("request.timeout").be_positive()?;
/// timeout.must().be_positive()?;              // read back from this source line on failure
/// ```
///
/// Implement it for your own types with [`impl_must!`](crate::impl_must).
pub trait Must: Sized {
    type Contract: Contract;

    /// Starts a chain with an already-known name.
    fn must_named(self, name: ParamName) -> Self::Contract;

    /// Starts a chain named after the receiver on the calling source line.
    ///
    /// The name is only looked up if a check fails; see
    /// [`NameResolver`](crate::foundation::NameResolver) for how.
    #[track_caller]
    fn must(self) -> Self::Contract {
        self.must_named(ParamName::caller())
    }

    /// Starts a chain with an explicit name.
    fn must_as(self, name: impl Into<Cow<'static, str>>) -> Self::Contract {
        self.must_named(ParamName::literal(name))
    }
}
