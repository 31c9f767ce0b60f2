//! Query command implementation.
//!
//! Looks up a single value in the emitted generator object by dot
//! path, for shell scripting around the external tool:
//!
//! ```text
//! vfdocs query api.auth.type --target production
//! vfdocs query nav.1.href
//! ```
//!
//! String results print bare (no quotes); everything else prints as
//! JSON. Missing paths exit non-zero.

use anyhow::{Result, bail};
use serde_json::Value as JsonValue;

use crate::cli::QueryArgs;
use crate::cli::emit::generator_json;
use crate::config::SiteConfig;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    config.validate()?;

    let resolved = config.resolve(args.target.as_deref())?;
    let object = generator_json(&resolved);

    let value = match &args.path {
        Some(path) => match lookup(&object, path) {
            Some(value) => value,
            None => bail!("no value at '{path}' in the resolved configuration"),
        },
        None => &object,
    };

    // Bare strings for scripting; JSON for structured values
    match value {
        JsonValue::String(s) if !args.pretty => println!("{s}"),
        other => {
            let formatted = if args.pretty {
                serde_json::to_string_pretty(other)?
            } else {
                serde_json::to_string(other)?
            };
            println!("{formatted}");
        }
    }

    Ok(())
}

/// Walk a dot path through objects and arrays.
///
/// Numeric segments index arrays (`nav.1.href`); everything else is an
/// object key lookup.
fn lookup<'a>(root: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            JsonValue::Object(map) => map.get(segment)?,
            JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
