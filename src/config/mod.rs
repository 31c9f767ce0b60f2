//! Site configuration management for `vfdocs.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── nav        # [[nav]]
//! │   ├── theme      # [theme]
//! │   ├── api        # [api]
//! │   ├── features   # [features]
//! │   └── target     # [target.<name>]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig + ResolvedConfig (this file)
//! ```
//!
//! The config file is read exactly once per invocation. The loaded
//! value is immutable and passed by reference into commands; resolution
//! against a deployment target produces a fresh [`ResolvedConfig`].

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    ApiConfig, AuthConfig, AuthScheme, FeaturesConfig, LogoConfig, NavEntry, SiteInfoConfig,
    TargetConfig, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Default config filename, searched upward from the current directory.
pub const CONFIG_FILENAME: &str = "vfdocs.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vfdocs.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Unknown TOML fields collected during load (internal use only)
    #[serde(skip)]
    pub ignored_fields: Vec<String>,

    /// Site metadata (title, description, base_url)
    pub site: SiteInfoConfig,

    /// Ordered top-level navigation
    pub nav: Vec<NavEntry>,

    /// Theme settings (primary color, logos)
    pub theme: ThemeConfig,

    /// Documented upstream API (SOAP endpoint, auth scheme)
    pub api: ApiConfig,

    /// Optional generator feature toggles
    pub features: Option<FeaturesConfig>,

    /// Named deployment targets with explicit overrides
    pub target: BTreeMap<String, TargetConfig>,
}

impl SiteConfig {
    /// Load configuration from the given path, or search upward from
    /// the current directory when the default filename is used.
    pub fn load(config_arg: &Path) -> Result<Self> {
        let config_path = match find_config_file(config_arg) {
            Some(path) => path,
            None => {
                return Err(ConfigError::Validation(format!(
                    "config file '{}' not found. Run 'vfdocs init' to create one.",
                    config_arg.display()
                ))
                .into());
            }
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        config.ignored_fields = ignored;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (vfdocs.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the full configuration, collecting every problem.
    ///
    /// Returns the diagnostics for the caller to render or promote;
    /// `check` wants warnings too, `emit`/`query` only gate on errors.
    pub fn validate_diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        section::nav::validate_nav(&self.nav, NavEntry::F_NAV, &mut diag);
        self.theme.validate(&mut diag);
        self.api.validate(&mut diag);

        for (name, target) in &self.target {
            target.validate(name, &mut diag);
        }

        diag
    }

    /// Validate and fail on the first rendering of collected errors.
    pub fn validate(&self) -> Result<()> {
        self.validate_diagnostics()
            .into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    // ========================================================================
    // target resolution
    // ========================================================================

    /// Names of all defined targets, in deterministic order.
    pub fn target_names(&self) -> Vec<&str> {
        self.target.keys().map(String::as_str).collect()
    }

    /// Resolve the effective configuration for a deployment target.
    ///
    /// Selection rules (never guess between variants):
    /// - explicit name: must exist
    /// - no name, no targets defined: base config alone
    /// - no name, exactly one target: that target (nothing to guess)
    /// - no name, several targets: error, the caller must choose
    pub fn resolve(&self, target: Option<&str>) -> Result<ResolvedConfig, ConfigError> {
        let selected = match target {
            Some(name) => match self.target.get_key_value(name) {
                Some((name, overrides)) => Some((name.clone(), overrides)),
                None => {
                    return Err(ConfigError::UnknownTarget(
                        name.to_string(),
                        self.target_names().join(", "),
                    ));
                }
            },
            None => match self.target.len() {
                0 => None,
                1 => {
                    let (name, overrides) = self.target.iter().next().unwrap();
                    Some((name.clone(), overrides))
                }
                _ => {
                    return Err(ConfigError::TargetRequired(self.target_names().join(", ")));
                }
            },
        };

        let mut resolved = ResolvedConfig {
            target: None,
            site: self.site.clone(),
            nav: self.nav.clone(),
            theme: self.theme.clone(),
            api: self.api.clone(),
            features: self.features,
        };

        if let Some((name, overrides)) = selected {
            if let Some(base_url) = &overrides.base_url {
                resolved.site.base_url = base_url.clone();
            }
            if let Some(nav) = &overrides.nav {
                resolved.nav = nav.clone();
            }
            if let Some(features) = overrides.features {
                resolved.features = Some(features);
            }
            resolved.target = Some(name);
        }

        Ok(resolved)
    }
}

// ============================================================================
// resolved configuration
// ============================================================================

/// Effective configuration for one deployment target.
///
/// A plain read-only value: base config with the selected target's
/// overrides applied. This is what gets emitted for the generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Selected target name, if any target was applied.
    pub target: Option<String>,
    pub site: SiteInfoConfig,
    pub nav: Vec<NavEntry>,
    pub theme: ThemeConfig,
    pub api: ApiConfig,
    pub features: Option<FeaturesConfig>,
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A fully valid config matching the documented site, with local and
/// production targets reproducing the two historical variants.
#[cfg(test)]
pub fn test_fixture_toml() -> &'static str {
    r#"
[site]
title = "AEAT VERI*FACTU API"
description = "Complete technical documentation for AEAT VERI*FACTU SOAP webservice"
base_url = "/verifactu-docs"

[[nav]]
title = "Getting Started"
href = "/"

[[nav]]
title = "API Reference"
href = "/api"

[theme]
primary_color = "blue"

[theme.logo]
light = "/logo-light.svg"
dark = "/logo-dark.svg"

[api]
base_url = "https://prewww1.aeat.es/wlpl/TIKE-CONT/ws/SistemaFacturacion/VerifactuSOAP"

[api.auth]
type = "mutual-tls"
description = "Mutual TLS authentication with FNMT certificate required"

[features]
search = true
navigation = true
dark_mode = true

[target.local]
base_url = "/verifactu-docs"

[target.production]
base_url = "https://verifactu-docs.example.es"

[[target.production.nav]]
title = "Getting Started"
href = "/"

[[target.production.nav]]
title = "API Reference"
href = "/api"

[[target.production.nav]]
title = "Certificates"
href = "/certificates"

[[target.production.nav]]
title = "Examples"
href = "/examples"
"#
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_fixture_parses_and_validates() {
        let config = test_parse_config(test_fixture_toml());
        assert_eq!(config.site.title, "AEAT VERI*FACTU API");
        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.target_names(), vec!["local", "production"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_resolve_local_keeps_base_nav() {
        let config = test_parse_config(test_fixture_toml());
        let resolved = config.resolve(Some("local")).unwrap();
        assert_eq!(resolved.target.as_deref(), Some("local"));
        assert_eq!(resolved.site.base_url, "/verifactu-docs");
        assert_eq!(resolved.nav.len(), 2);
        // Unoverridden sections come from the base
        assert_eq!(resolved.theme.primary_color, "blue");
    }

    #[test]
    fn test_resolve_production_overrides() {
        let config = test_parse_config(test_fixture_toml());
        let resolved = config.resolve(Some("production")).unwrap();
        assert_eq!(resolved.site.base_url, "https://verifactu-docs.example.es");
        assert_eq!(resolved.nav.len(), 4);
        assert_eq!(resolved.nav[2].href, "/certificates");
    }

    #[test]
    fn test_resolve_unknown_target() {
        let config = test_parse_config(test_fixture_toml());
        let err = config.resolve(Some("staging")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTarget(..)));
        assert!(format!("{err}").contains("local, production"));
    }

    #[test]
    fn test_resolve_requires_choice_between_targets() {
        let config = test_parse_config(test_fixture_toml());
        let err = config.resolve(None).unwrap_err();
        assert!(matches!(err, ConfigError::TargetRequired(..)));
    }

    #[test]
    fn test_resolve_without_targets_uses_base() {
        let config = test_parse_config(
            "[site]\ntitle = \"Docs\"\nbase_url = \"/docs\"\n[api]\nbase_url = \"https://example.es/ws\"",
        );
        let resolved = config.resolve(None).unwrap();
        assert_eq!(resolved.target, None);
        assert_eq!(resolved.site.base_url, "/docs");
        assert!(resolved.features.is_none());
    }

    #[test]
    fn test_resolve_single_target_is_implicit() {
        let config = test_parse_config(
            "[site]\ntitle = \"Docs\"\nbase_url = \"/docs\"\n[target.local]\nbase_url = \"/local\"",
        );
        let resolved = config.resolve(None).unwrap();
        assert_eq!(resolved.target.as_deref(), Some("local"));
        assert_eq!(resolved.site.base_url, "/local");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let config = test_parse_config(test_fixture_toml());
        let first = config.resolve(Some("production")).unwrap();
        let second = config.resolve(Some("production")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_collects_across_sections() {
        let config = test_parse_config(
            r#"
[site]
title = ""
base_url = "no-slash"

[[nav]]
title = "Broken"
href = "api"

[api]
base_url = "http://plain.example.es/ws"
"#,
        );
        let diag = config.validate_diagnostics();
        // empty title, bad base_url, bad href, non-https api
        assert_eq!(diag.len(), 4);
    }
}
