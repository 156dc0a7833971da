//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check URI shapes (origins parse, prefixes are absolute paths)
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a loaded configuration, collecting every violation.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_http_url(&config.api.origin) {
        errors.push(ValidationError {
            field: "api.origin",
            message: format!("not an http(s) URL: {:?}", config.api.origin),
        });
    }
    if !config.api.base_uri.starts_with('/') && !is_http_url(&config.api.base_uri) {
        errors.push(ValidationError {
            field: "api.base_uri",
            message: format!(
                "must be an absolute path or an http(s) URL: {:?}",
                config.api.base_uri
            ),
        });
    }
    if config.api.timeout_ms == 0 {
        errors.push(ValidationError {
            field: "api.timeout_ms",
            message: "must be greater than zero".to_string(),
        });
    }

    if !config.dev_server.proxy.path_prefix.starts_with('/') {
        errors.push(ValidationError {
            field: "dev_server.proxy.path_prefix",
            message: format!(
                "must be an absolute path: {:?}",
                config.dev_server.proxy.path_prefix
            ),
        });
    }
    if !is_http_url(&config.dev_server.proxy.target) {
        errors.push(ValidationError {
            field: "dev_server.proxy.target",
            message: format!(
                "not an http(s) URL: {:?}",
                config.dev_server.proxy.target
            ),
        });
    }
    if config.dev_server.request_timeout_ms == 0 {
        errors.push(ValidationError {
            field: "dev_server.request_timeout_ms",
            message: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(value: &str) -> bool {
    matches!(Url::parse(value), Ok(url) if url.scheme() == "http" || url.scheme() == "https")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ClientConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let mut config = ClientConfig::default();
        config.api.origin = "not a url".to_string();
        config.api.timeout_ms = 0;
        config.dev_server.proxy.path_prefix = "api".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["api.origin", "api.timeout_ms", "dev_server.proxy.path_prefix"]
        );
    }

    #[test]
    fn absolute_base_uri_is_accepted() {
        let mut config = ClientConfig::default();
        config.api.base_uri = "https://goals.example.com/api".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
