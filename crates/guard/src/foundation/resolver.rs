//! Source-text fallback for parameter names
//!
//! When a chain is started with `value.must()` instead of `must!(value)`,
//! the compiler gives us no argument text, only the call site's file and
//! line (via `#[track_caller]`). [`NameResolver`] reads that line back from
//! disk and takes the identifier immediately preceding the entry-point
//! marker (`.must(` by default):
//!
//! ```text
//! let err = retries.must().be_positive();
//!           ^^^^^^^ resolved name
//! ```
//!
//! This is best effort. Only the first marker on a line is considered,
//! multi-line receivers are not followed, and any failure (missing file,
//! line out of range, blank line, no marker, non-identifier receiver)
//! yields the configured fallback name instead of an error.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Text that marks the entry-point call on a source line.
pub const DEFAULT_MARKER: &str = ".must(";

/// Name used when the call site cannot be read back.
pub const DEFAULT_FALLBACK_NAME: &str = "value";

// ============================================================================
// CONFIG
// ============================================================================

/// Configuration for [`NameResolver`].
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_guard::foundation::{NameResolver, ResolverConfig};
///
/// let resolver = NameResolver::new(
///     ResolverConfig::default()
///         .with_source_root("/srv/app")
///         .with_fallback_name("argument"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Substring that locates the entry-point call on a line.
    pub marker: String,
    /// Name returned when resolution fails.
    pub fallback_name: String,
    /// Directory that relative call-site paths are joined onto.
    pub source_root: Option<PathBuf>,
    /// Also try every ancestor of the current directory as a root.
    ///
    /// Call-site paths of workspace members are recorded relative to the
    /// workspace root, while tests and binaries usually run from the member
    /// directory.
    pub search_ancestors: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_owned(),
            fallback_name: DEFAULT_FALLBACK_NAME.to_owned(),
            source_root: None,
            search_ancestors: true,
        }
    }
}

impl ResolverConfig {
    /// Reads overrides from the environment.
    ///
    /// - `NEBULA_GUARD_SOURCE_ROOT` sets [`source_root`](Self::source_root)
    /// - `NEBULA_GUARD_FALLBACK_NAME` sets [`fallback_name`](Self::fallback_name)
    /// - `NEBULA_GUARD_SEARCH_ANCESTORS` (`0`/`false`/`off` disables)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(root) = lookup("NEBULA_GUARD_SOURCE_ROOT").filter(|r| !r.is_empty()) {
            config.source_root = Some(PathBuf::from(root));
        }

        if let Some(name) = lookup("NEBULA_GUARD_FALLBACK_NAME").filter(|n| !n.is_empty()) {
            config.fallback_name = name;
        }

        if let Some(flag) = lookup("NEBULA_GUARD_SEARCH_ANCESTORS") {
            config.search_ancestors = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }

        config
    }

    /// Only the recorded path and the explicit source root are tried.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            search_ancestors: false,
            ..Self::default()
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = Some(root.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_search_ancestors(mut self, enabled: bool) -> Self {
        self.search_ancestors = enabled;
        self
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

static SHARED: LazyLock<NameResolver> =
    LazyLock::new(|| NameResolver::new(ResolverConfig::from_env()));

/// Recovers a parameter name from the source line of a call site.
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    config: ResolverConfig,
}

impl NameResolver {
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The process-wide resolver used by `Must::must()`.
    ///
    /// Built once from [`ResolverConfig::from_env`] and never mutated.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves the identifier preceding the marker on `line` (1-based)
    /// of the file at `path`, or the fallback name.
    pub fn resolve(&self, path: impl AsRef<Path>, line: u32) -> Cow<'static, str> {
        let path = path.as_ref();

        let Some(text) = self.read_line(path, line) else {
            return self.fallback();
        };

        match self.identifier_in(&text) {
            Some(identifier) => {
                tracing::trace!(path = %path.display(), line, identifier, "resolved parameter name");
                Cow::Owned(identifier.to_owned())
            }
            None => {
                tracing::debug!(
                    path = %path.display(),
                    line,
                    marker = %self.config.marker,
                    "no identifier before entry-point marker; using fallback parameter name"
                );
                self.fallback()
            }
        }
    }

    /// Extracts the identifier immediately before the first marker in
    /// `line`, scanning backwards over letters, digits and `_`.
    #[must_use]
    pub fn identifier_in<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.config.marker.is_empty() {
            return None;
        }

        let end = line.find(self.config.marker.as_str())?;
        let head = &line[..end];
        let start = head
            .char_indices()
            .rev()
            .find(|&(_, c)| !is_identifier_char(c))
            .map_or(0, |(index, c)| index + c.len_utf8());

        let identifier = &head[start..];
        (!identifier.is_empty()).then_some(identifier)
    }

    /// The configured fallback name.
    #[must_use]
    pub fn fallback(&self) -> Cow<'static, str> {
        if self.config.fallback_name == DEFAULT_FALLBACK_NAME {
            Cow::Borrowed(DEFAULT_FALLBACK_NAME)
        } else {
            Cow::Owned(self.config.fallback_name.clone())
        }
    }

    fn read_line(&self, path: &Path, line: u32) -> Option<String> {
        if line == 0 {
            return None;
        }

        let Some(located) = self.locate(path) else {
            tracing::debug!(path = %path.display(), "call-site source not found; using fallback parameter name");
            return None;
        };

        let file = match File::open(&located) {
            Ok(file) => file,
            Err(error) => {
                tracing::debug!(path = %located.display(), %error, "call-site source unreadable; using fallback parameter name");
                return None;
            }
        };

        let text = match BufReader::new(file).lines().nth(line as usize - 1) {
            Some(Ok(text)) => text,
            Some(Err(error)) => {
                tracing::debug!(path = %located.display(), line, %error, "failed to read call-site line");
                return None;
            }
            None => {
                tracing::debug!(path = %located.display(), line, "call-site line out of range");
                return None;
            }
        };

        (!text.trim().is_empty()).then_some(text)
    }

    fn locate(&self, path: &Path) -> Option<PathBuf> {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        if path.is_absolute() {
            return None;
        }

        if let Some(root) = &self.config.source_root {
            let candidate = root.join(path);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if self.config.search_ancestors {
            let cwd = std::env::current_dir().ok()?;
            return cwd
                .ancestors()
                .map(|ancestor| ancestor.join(path))
                .find(|candidate| candidate.is_file());
        }

        None
    }
}

#[inline]
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// ============================================================================
// TESTS
// ============================================================================
