//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Sections declare the paths of their validated fields as consts, so
/// diagnostics always name a real `vfdocs.toml` location.
///
/// # Example
///
/// ```ignore
/// impl SiteInfoConfig {
///     pub const F_BASE_URL: FieldPath = FieldPath::new("site.base_url");
/// }
///
/// diag.error(SiteInfoConfig::F_BASE_URL, "must start with '/'");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Re-root this path under a `target.<name>.` prefix.
    ///
    /// Used when a target override is re-validated, so the diagnostic
    /// points at the overriding table instead of the base section.
    /// Leaks the composed string; field paths are few and live for the
    /// whole process anyway.
    pub fn under_target(&self, target: &str) -> Self {
        Self(Box::leak(
            format!("target.{target}.{}", self.0).into_boxed_str(),
        ))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
