//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! primary_color = "blue"
//!
//! [theme.logo]
//! light = "/logo-light.svg"
//! dark = "/logo-dark.svg"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary accent color, passed through to the generator
    /// (a named color or any CSS color value it accepts).
    pub primary_color: String,

    /// Logo assets per color scheme.
    pub logo: LogoConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: "blue".into(),
            logo: LogoConfig::default(),
        }
    }
}

/// Logo asset paths, served by the site itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Logo shown on light backgrounds.
    pub light: String,

    /// Logo shown on dark backgrounds.
    pub dark: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            light: "/logo-light.svg".into(),
            dark: "/logo-dark.svg".into(),
        }
    }
}

impl ThemeConfig {
    pub const F_PRIMARY_COLOR: FieldPath = FieldPath::new("theme.primary_color");
    pub const F_LOGO_LIGHT: FieldPath = FieldPath::new("theme.logo.light");
    pub const F_LOGO_DARK: FieldPath = FieldPath::new("theme.logo.dark");

    /// Validate theme settings.
    ///
    /// # Checks
    /// - `primary_color` must be non-empty
    /// - both logo paths must be non-empty and distinct
    ///
    /// Whether the logo assets actually exist is the generator's
    /// business; only the declared paths are checked here.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.primary_color.trim().is_empty() {
            diag.error(Self::F_PRIMARY_COLOR, "primary color must not be empty");
        }

        if self.logo.light.is_empty() {
            diag.error(Self::F_LOGO_LIGHT, "logo path must not be empty");
        }
        if self.logo.dark.is_empty() {
            diag.error(Self::F_LOGO_DARK, "logo path must not be empty");
        }

        if !self.logo.light.is_empty() && self.logo.light == self.logo.dark {
            diag.error_with_hint(
                Self::F_LOGO_DARK,
                "light and dark logos must be distinct assets",
                "point dark mode at its own file, e.g. \"/logo-dark.svg\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(theme: &ThemeConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        diag
    }

    #[test]
    fn test_default_theme_passes() {
        assert!(validate(&ThemeConfig::default()).is_empty());
    }

    #[test]
    fn test_same_logo_for_both_schemes_rejected() {
        let theme = ThemeConfig {
            primary_color: "blue".into(),
            logo: LogoConfig {
                light: "/logo.svg".into(),
                dark: "/logo.svg".into(),
            },
        };
        let diag = validate(&theme);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, ThemeConfig::F_LOGO_DARK);
    }

    #[test]
    fn test_empty_logo_paths_rejected() {
        let theme = ThemeConfig {
            primary_color: "blue".into(),
            logo: LogoConfig {
                light: String::new(),
                dark: String::new(),
            },
        };
        // Both empty paths are errors; equality check is skipped for
        // empty values so it does not double-report
        assert_eq!(validate(&theme).len(), 2);
    }

    #[test]
    fn test_empty_primary_color_rejected() {
        let theme = ThemeConfig {
            primary_color: String::new(),
            logo: LogoConfig::default(),
        };
        assert_eq!(validate(&theme).len(), 1);
    }
}
