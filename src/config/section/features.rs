//! `[features]` section configuration.
//!
//! Optional generator feature toggles. The section is optional as a
//! whole: when absent it is also absent from the emitted config, which
//! lets the generator apply its own defaults.
//!
//! # Example
//!
//! ```toml
//! [features]
//! search = true
//! navigation = true
//! dark_mode = true
//! ```

use serde::{Deserialize, Serialize};

/// Generator feature toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Enable full-text search UI.
    pub search: bool,

    /// Enable the sidebar navigation tree.
    pub navigation: bool,

    /// Enable the dark mode toggle.
    pub dark_mode: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            search: true,
            navigation: true,
            dark_mode: true,
        }
    }
}
