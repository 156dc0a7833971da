//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client
//! core. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the goals client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// API client settings (base URI, timeout).
    pub api: ApiConfig,

    /// Local development server settings.
    pub dev_server: DevServerConfig,
}

/// API client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin a relative `base_uri` is joined onto. A browser resolves
    /// `/api` against the page origin; a native client needs it spelled out.
    pub origin: String,

    /// Base URI for all API requests. Either an absolute URL (used verbatim)
    /// or an absolute path joined onto `origin`.
    pub base_uri: String,

    /// Total request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8081".to_string(),
            base_uri: "/api".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Development server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DevServerConfig {
    /// Port the dev server binds on the loopback interface.
    pub port: u16,

    /// Request timeout in milliseconds, applied to every inbound request.
    pub request_timeout_ms: u64,

    /// Forwarding rule for backend API traffic.
    pub proxy: ProxyRuleConfig,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            request_timeout_ms: 10_000,
            proxy: ProxyRuleConfig::default(),
        }
    }
}

/// A single path-prefix forwarding rule.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyRuleConfig {
    /// Path prefix that selects this rule (e.g. "/api").
    pub path_prefix: String,

    /// Upstream target URL (e.g. "http://localhost:8080").
    pub target: String,

    /// Rewrite the Host header to the target authority when forwarding,
    /// so the upstream sees itself as the request origin.
    pub change_origin: bool,
}

impl Default for ProxyRuleConfig {
    fn default() -> Self {
        Self {
            path_prefix: "/api".to_string(),
            target: "http://localhost:8080".to_string(),
            change_origin: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_contract() {
        let config = ClientConfig::default();

        assert_eq!(config.api.base_uri, "/api");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.dev_server.port, 8081);
        assert_eq!(config.dev_server.proxy.path_prefix, "/api");
        assert_eq!(config.dev_server.proxy.target, "http://localhost:8080");
        assert!(config.dev_server.proxy.change_origin);
    }

    #[test]
    fn minimal_toml_fills_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [api]
            base_uri = "https://goals.example.com/api"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_uri, "https://goals.example.com/api");
        // Everything not mentioned keeps its default.
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.dev_server.port, 8081);
    }
}
