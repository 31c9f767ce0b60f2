//! Init command implementation.
//!
//! Creates a commented starter `vfdocs.toml` seeded with the documented
//! site's values. Existing config files are never overwritten.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::CONFIG_FILENAME;
use crate::log;

/// Generate vfdocs.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# vfdocs configuration file (v{version})
# One base configuration, per-deployment overrides under [target.<name>].

[site]
title = "AEAT VERI*FACTU API"
description = "Complete technical documentation for AEAT VERI*FACTU SOAP webservice"
# Root-relative path or full origin URL the site is served under.
base_url = "/verifactu-docs"

# Top-level navigation, rendered in order.
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

# The documented upstream service. Display-only: no requests are made.
[api]
base_url = "https://prewww1.aeat.es/wlpl/TIKE-CONT/ws/SistemaFacturacion/VerifactuSOAP"

[api.auth]
type = "mutual-tls"
description = "Mutual TLS authentication with FNMT certificate required"

# Optional generator toggles. Remove the section to use generator defaults.
[features]
search = true
navigation = true
dark_mode = true

# Deployment targets. Select one with --target; overrides replace the
# whole field they name.
[target.local]
base_url = "/verifactu-docs"

[target.production]
base_url = "https://verifactu-docs.example.es"
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Write the starter config into `dir` (default: current directory).
pub fn init_site(dir: Option<&Path>) -> Result<()> {
    let root = dir.unwrap_or(Path::new("."));
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    }

    let path = root.join(CONFIG_FILENAME);
    if path.exists() {
        anyhow::bail!(
            "config file '{}' already exists, refusing to overwrite",
            path.display()
        );
    }

    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "created {}", path.display());
    log!("init"; "edit the [target.*] blocks, then run 'vfdocs check'");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config() {
        let temp = TempDir::new().unwrap();
        init_site(Some(temp.path())).unwrap();

        let config_path = temp.path().join(CONFIG_FILENAME);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[target.local]"));
    }

    #[test]
    fn test_init_creates_missing_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs/site");
        init_site(Some(&nested)).unwrap();
        assert!(nested.join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "custom content").unwrap();

        assert!(init_site(Some(temp.path())).is_err());
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "custom content");
    }

    #[test]
    fn test_template_parses_and_validates() {
        let content = generate_config_template();
        let (config, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {ignored:?}");
        assert!(config.validate().is_ok());
        assert_eq!(config.target_names(), vec!["local", "production"]);
    }
}
