//! Emit command implementation.
//!
//! Resolves one deployment target and writes the generator-facing
//! configuration object as JSON. Key names and order follow the
//! external tool's contract (camelCase, `title` first), which is why
//! the object is assembled by hand instead of deriving `Serialize`
//! with renames: the TOML side stays snake_case and the JSON side
//! stays byte-stable.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

use crate::cli::EmitArgs;
use crate::config::{ResolvedConfig, SiteConfig};
use crate::{debug, log};

/// Execute emit command
pub fn run_emit(args: &EmitArgs, config: &SiteConfig) -> Result<()> {
    // An invalid config never reaches the generator
    config.validate()?;

    let resolved = config.resolve(args.target.as_deref())?;
    debug!(
        "emit";
        "resolved target '{}'",
        resolved.target.as_deref().unwrap_or("(base)")
    );

    let object = generator_json(&resolved);
    let formatted = if args.pretty {
        serde_json::to_string_pretty(&object)?
    } else {
        serde_json::to_string(&object)?
    };

    match &args.output {
        Some(output_path) => {
            let output_path = expand_output_path(output_path);
            let mut file = fs::File::create(&output_path)
                .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
            writeln!(file, "{formatted}")?;
            log!("emit"; "wrote generator config to {}", output_path.display());
        }
        None => println!("{formatted}"),
    }

    Ok(())
}

/// Tilde-expand a user-supplied output path.
fn expand_output_path(path: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    PathBuf::from(expanded)
}

// ============================================================================
// Generator object assembly
// ============================================================================

/// Build the generator configuration object from a resolved config.
///
/// Shape:
/// ```json
/// { "title", "description", "baseUrl",
///   "nav": [{"title","href"}, ...],
///   "theme": {"primaryColor", "logo": {"light","dark"}},
///   "api": {"baseUrl", "auth": {"type","description"}},
///   "features": {"search","navigation","darkMode"} }
/// ```
///
/// `features` is omitted entirely when the section is absent.
pub fn generator_json(resolved: &ResolvedConfig) -> JsonValue {
    let mut obj = Map::new();

    obj.insert("title".into(), JsonValue::String(resolved.site.title.clone()));
    obj.insert(
        "description".into(),
        JsonValue::String(resolved.site.description.clone()),
    );
    obj.insert(
        "baseUrl".into(),
        JsonValue::String(resolved.site.base_url.clone()),
    );

    let nav: Vec<JsonValue> = resolved
        .nav
        .iter()
        .map(|entry| {
            let mut item = Map::new();
            item.insert("title".into(), JsonValue::String(entry.title.clone()));
            item.insert("href".into(), JsonValue::String(entry.href.clone()));
            JsonValue::Object(item)
        })
        .collect();
    obj.insert("nav".into(), JsonValue::Array(nav));

    let mut logo = Map::new();
    logo.insert(
        "light".into(),
        JsonValue::String(resolved.theme.logo.light.clone()),
    );
    logo.insert(
        "dark".into(),
        JsonValue::String(resolved.theme.logo.dark.clone()),
    );
    let mut theme = Map::new();
    theme.insert(
        "primaryColor".into(),
        JsonValue::String(resolved.theme.primary_color.clone()),
    );
    theme.insert("logo".into(), JsonValue::Object(logo));
    obj.insert("theme".into(), JsonValue::Object(theme));

    let mut auth = Map::new();
    auth.insert(
        "type".into(),
        JsonValue::String(resolved.api.auth.scheme.as_str().into()),
    );
    auth.insert(
        "description".into(),
        JsonValue::String(resolved.api.auth.description.clone()),
    );
    let mut api = Map::new();
    api.insert(
        "baseUrl".into(),
        JsonValue::String(resolved.api.base_url.clone()),
    );
    api.insert("auth".into(), JsonValue::Object(auth));
    obj.insert("api".into(), JsonValue::Object(api));

    if let Some(toggles) = resolved.features {
        let mut features = Map::new();
        features.insert("search".into(), JsonValue::Bool(toggles.search));
        features.insert("navigation".into(), JsonValue::Bool(toggles.navigation));
        features.insert("darkMode".into(), JsonValue::Bool(toggles.dark_mode));
        obj.insert("features".into(), JsonValue::Object(features));
    }

    JsonValue::Object(obj)
}
