//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vfdocs.toml`:
//!
//! | Module     | TOML Section      | Purpose                            |
//! |------------|-------------------|------------------------------------|
//! | `site`     | `[site]`          | Title, description, base_url       |
//! | `nav`      | `[[nav]]`         | Ordered top-level navigation       |
//! | `theme`    | `[theme]`         | Primary color, light/dark logos    |
//! | `api`      | `[api]`           | Documented SOAP endpoint and auth  |
//! | `features` | `[features]`      | Optional generator toggles         |
//! | `target`   | `[target.<name>]` | Per-deployment overrides           |

pub mod api;
pub mod features;
pub mod nav;
pub mod site;
pub mod target;
pub mod theme;

// Re-export section configs
pub use api::{ApiConfig, AuthConfig, AuthScheme};
pub use features::FeaturesConfig;
pub use nav::NavEntry;
pub use site::SiteInfoConfig;
pub use target::TargetConfig;
pub use theme::{LogoConfig, ThemeConfig};
