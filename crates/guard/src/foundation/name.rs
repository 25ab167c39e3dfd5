//! Parameter names carried by contracts.

use std::borrow::Cow;
use std::panic::Location;

use super::resolver::NameResolver;

/// How a contract knows the name of the argument it guards.
///
/// A `Literal` comes from the `must!` macro (`stringify!` of the argument
/// expression) or from an explicit `must_as` override. A `CallSite` is
/// recorded by `#[track_caller]` when the chain starts with `.must()`; it is
/// turned into text by the [`NameResolver`] only when a check fails, so the
/// success path never touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamName {
    Literal(Cow<'static, str>),
    CallSite(&'static Location<'static>),
}

impl ParamName {
    pub fn literal(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Literal(name.into())
    }

    /// Records the location of the caller.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::CallSite(Location::caller())
    }

    /// Resolves the name with the shared resolver.
    pub fn resolve(&self) -> Cow<'static, str> {
        self.resolve_with(NameResolver::shared())
    }

    pub fn resolve_with(&self, resolver: &NameResolver) -> Cow<'static, str> {
        match self {
            Self::Literal(name) => name.clone(),
            Self::CallSite(location) => resolver.resolve(location.file(), location.line()),
        }
    }
}

impl From<&'static str> for ParamName {
    fn from(name: &'static str) -> Self {
        Self::Literal(Cow::Borrowed(name))
    }
}

impl From<String> for ParamName {
    fn from(name: String) -> Self {
        Self::Literal(Cow::Owned(name))
    }
}
