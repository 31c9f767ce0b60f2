//! `[[nav]]` configuration for top-level navigation.
//!
//! Entries are an ordered array of tables; order is preserved into the
//! emitted config and determines render order in the generator.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! title = "Getting Started"
//! href = "/"
//!
//! [[nav]]
//! title = "API Reference"
//! href = "/api"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::is_http_url;
use serde::{Deserialize, Serialize};

/// A single top-level navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Link label.
    pub title: String,

    /// Link target: a site route starting with `/`, or an absolute
    /// http(s) URL for external links.
    pub href: String,
}

impl NavEntry {
    pub const F_NAV: FieldPath = FieldPath::new("nav");

    /// True when `href` resolves within the site's own routing scheme.
    pub fn is_internal(&self) -> bool {
        self.href.starts_with('/')
    }
}

/// Validate an ordered list of nav entries.
///
/// # Checks
/// - `title` and `href` must be non-empty
/// - `href` must start with `/` or be a valid absolute http(s) URL
/// - duplicate `href`s are rejected (ambiguous routing)
///
/// `field` is `nav` for the base list, or `target.<name>.nav` for an
/// overriding list.
pub fn validate_nav(entries: &[NavEntry], field: FieldPath, diag: &mut ConfigDiagnostics) {
    for (index, entry) in entries.iter().enumerate() {
        if entry.title.trim().is_empty() {
            diag.error(field, format!("entry {index}: title must not be empty"));
        }

        if entry.href.is_empty() {
            diag.error_with_hint(
                field,
                format!("entry {index} ('{}'): href must not be empty", entry.title),
                "use a site route like \"/api\" or an absolute http(s) URL",
            );
        } else if !entry.is_internal() && !is_http_url(&entry.href) {
            diag.error_with_hint(
                field,
                format!(
                    "entry {index} ('{}'): '{}' must start with '/' or be an absolute http(s) URL",
                    entry.title, entry.href
                ),
                "site routes start with '/', external links with 'https://'",
            );
        }
    }

    // Duplicate hrefs: first occurrence wins the route, the rest are dead
    for (index, entry) in entries.iter().enumerate() {
        if entries[..index].iter().any(|e| e.href == entry.href) {
            diag.error(
                field,
                format!("entry {index}: duplicate href '{}'", entry.href),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, href: &str) -> NavEntry {
        NavEntry {
            title: title.into(),
            href: href.into(),
        }
    }

    fn validate(entries: &[NavEntry]) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        validate_nav(entries, NavEntry::F_NAV, &mut diag);
        diag
    }

    #[test]
    fn test_valid_nav_passes() {
        let nav = [
            entry("Getting Started", "/"),
            entry("API Reference", "/api"),
            entry("AEAT Portal", "https://sede.agenciatributaria.gob.es"),
        ];
        assert!(validate(&nav).is_empty());
    }

    #[test]
    fn test_empty_href_rejected() {
        let diag = validate(&[entry("Broken", "")]);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_relative_href_rejected() {
        let diag = validate(&[entry("Broken", "api")]);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("'api'"));
    }

    #[test]
    fn test_duplicate_href_rejected() {
        let diag = validate(&[entry("One", "/api"), entry("Two", "/api")]);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate"));
    }

    #[test]
    fn test_is_internal() {
        assert!(entry("Home", "/").is_internal());
        assert!(!entry("AEAT", "https://aeat.es").is_internal());
    }
}
