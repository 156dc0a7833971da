//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! goals.toml (optional)
//!     → loader.rs (parse & deserialize)
//!     → env_overrides (VITE_API_BASE_URI)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → passed explicitly to ApiClient / DevServer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so running without a config file works
//! - Validation separates syntactic (serde) from semantic checks
//! - No global singleton: the handle is constructed once in main and
//!   injected into every consumer

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{config_from_env, load_config, ConfigError};
pub use schema::ApiConfig;
pub use schema::ClientConfig;
pub use schema::DevServerConfig;
pub use schema::ProxyRuleConfig;
