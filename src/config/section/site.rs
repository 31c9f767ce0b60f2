//! `[site]` section configuration.
//!
//! Basic site metadata: title, description, and the URL or path the
//! generated site is served under.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "AEAT VERI*FACTU API"
//! description = "Complete technical documentation for AEAT VERI*FACTU SOAP webservice"
//! base_url = "/verifactu-docs"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::{is_http_origin, is_http_url, is_site_path};
use serde::{Deserialize, Serialize};

/// Site metadata, injected verbatim into the generator's config object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title shown in the header and browser tab.
    pub title: String,

    /// Human-readable site summary.
    pub description: String,

    /// Path or origin the site is served under.
    /// Either root-relative (e.g. "/verifactu-docs") or a full
    /// http(s) origin URL (e.g. "https://docs.example.es").
    pub base_url: String,
}

impl SiteInfoConfig {
    pub const F_TITLE: FieldPath = FieldPath::new("site.title");
    pub const F_BASE_URL: FieldPath = FieldPath::new("site.base_url");

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must be non-empty
    /// - `base_url` must be a root-relative path or an absolute http(s) URL
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::F_TITLE,
                "site title must not be empty",
                "set a display title, e.g.: \"AEAT VERI*FACTU API\"",
            );
        }

        Self::validate_base_url(&self.base_url, Self::F_BASE_URL, diag);
    }

    /// Shared base_url rule, also applied to target overrides.
    ///
    /// Accepts a root-relative path or a bare http(s) origin; an origin
    /// with a path, query or fragment is rejected so the serving root
    /// has exactly one spelling.
    pub fn validate_base_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if value.is_empty() {
            diag.error_with_hint(
                field,
                "base_url must not be empty",
                "use a root-relative path like \"/verifactu-docs\" or a full origin URL",
            );
            return;
        }

        if is_site_path(value) {
            return;
        }

        if !is_http_url(value) {
            diag.error_with_hint(
                field,
                format!("'{value}' is neither a root-relative path nor an absolute http(s) URL"),
                "use format like \"/verifactu-docs\" or \"https://docs.example.es\"",
            );
        } else if !is_http_origin(value) {
            diag.error_with_hint(
                field,
                format!("'{value}' must be a bare origin, without path, query or fragment"),
                "keep the origin here and move the path into a root-relative value like \"/verifactu-docs\"",
            );
        }
    }
}
