//! `[target.<name>]` configuration for deployment targets.
//!
//! The documented site historically carried two drifted copies of its
//! configuration (local path vs. deployed origin). Targets replace
//! that: one base config plus named override blocks, selected
//! explicitly at build time. An override replaces the whole field it
//! names; there is no per-entry merging.
//!
//! # Example
//!
//! ```toml
//! [target.local]
//! base_url = "/verifactu-docs"
//!
//! [target.production]
//! base_url = "https://docs.example.es"
//! ```

use crate::config::section::features::FeaturesConfig;
use crate::config::section::nav::{self, NavEntry};
use crate::config::section::site::SiteInfoConfig;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Per-target overrides of the base configuration.
///
/// Only fields the observed variants actually diverged in are
/// overridable; everything else has exactly one source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Override of `site.base_url` for this target.
    pub base_url: Option<String>,

    /// Override of the whole `nav` list for this target.
    pub nav: Option<Vec<NavEntry>>,

    /// Override of the `features` block for this target.
    pub features: Option<FeaturesConfig>,
}

impl TargetConfig {
    pub const F_TARGET: FieldPath = FieldPath::new("target");

    /// True when the override block changes nothing.
    pub fn is_empty(&self) -> bool {
        self.base_url.is_none() && self.nav.is_none() && self.features.is_none()
    }

    /// Validate a target name and the fields it overrides.
    ///
    /// Overriding fields are checked under their `target.<name>.` path
    /// so diagnostics point at the overriding table.
    pub fn validate(&self, name: &str, diag: &mut ConfigDiagnostics) {
        if !is_valid_target_name(name) {
            diag.error_with_hint(
                Self::F_TARGET,
                format!("invalid target name '{name}'"),
                "use lowercase letters, digits and '-', e.g. 'local' or 'production'",
            );
            return;
        }

        if self.is_empty() {
            diag.warn(
                Self::F_TARGET.under_target(name),
                "target overrides nothing and can be removed".to_string(),
            );
        }

        if let Some(base_url) = &self.base_url {
            SiteInfoConfig::validate_base_url(
                base_url,
                FieldPath::new("site.base_url").under_target(name),
                diag,
            );
        }

        if let Some(entries) = &self.nav {
            nav::validate_nav(entries, NavEntry::F_NAV.under_target(name), diag);
        }
    }
}

/// Target names: non-empty, lowercase alphanumeric and `-`.
fn is_valid_target_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
