//! `[api]` section configuration for the documented upstream service.
//!
//! Declares where the real VERI*FACTU SOAP endpoint lives and how it
//! authenticates. Nothing here talks to the service; the values are
//! passed through to the generator for display in the API reference.
//!
//! # Example
//!
//! ```toml
//! [api]
//! base_url = "https://prewww1.aeat.es/wlpl/TIKE-CONT/ws/SistemaFacturacion/VerifactuSOAP"
//!
//! [api.auth]
//! type = "mutual-tls"
//! description = "Mutual TLS authentication with FNMT certificate required"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Upstream API connection info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute https URL of the documented SOAP endpoint.
    pub base_url: String,

    /// Authentication scheme of the real service.
    pub auth: AuthConfig,
}

/// Authentication declaration for the documented service.
///
/// `scheme` must match what the service actually enforces; nothing here
/// can verify that, so a mismatch silently documents the wrong thing.
/// The closed enum at least rules out typos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Scheme identifier, from the supported closed set.
    #[serde(rename = "type")]
    pub scheme: AuthScheme,

    /// Human-readable explanation shown in the docs.
    pub description: String,
}

/// Supported authentication schemes.
///
/// Unknown values fail TOML deserialization, so membership in the set
/// is guaranteed at parse time and needs no validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthScheme {
    /// Both sides present certificates; the client certificate is
    /// issued by FNMT.
    #[default]
    MutualTls,
}

impl AuthScheme {
    /// Wire identifier as the generator expects it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MutualTls => "mutual-tls",
        }
    }
}

impl ApiConfig {
    pub const F_BASE_URL: FieldPath = FieldPath::new("api.base_url");

    /// Validate API connection info.
    ///
    /// # Checks
    /// - `base_url` must be a valid absolute URL
    /// - the scheme must be `https` (the AEAT endpoints are TLS-only,
    ///   and mutual-TLS auth is meaningless over plain http)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.base_url) {
            Ok(parsed) => {
                if parsed.scheme() != "https" {
                    diag.error_with_hint(
                        Self::F_BASE_URL,
                        format!("scheme '{}' not supported, must be https", parsed.scheme()),
                        "use format like https://prewww1.aeat.es/...",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::F_BASE_URL,
                        "URL must have a valid host",
                        "use format like https://prewww1.aeat.es/...",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::F_BASE_URL,
                    format!("invalid URL: {e}"),
                    "use format like https://prewww1.aeat.es/...",
                );
            }
        }
    }
}
