//! Client-side core of the goals application.

pub mod api;
pub mod config;
pub mod dev;
pub mod routing;

pub use api::{ApiClient, RequestError};
pub use config::ClientConfig;
pub use dev::DevServer;
pub use routing::{goals_routes, ResolvedRoute, RouteTable, View};
