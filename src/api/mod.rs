//! Backend API access subsystem.
//!
//! # Data Flow
//! ```text
//! caller (view layer, CLI)
//!     → client.rs (shared handle: base URI join, timeout, send)
//!     → error.rs (failure normalization: attach server body as `pretty`)
//!     → goals.rs (typed endpoints and wire DTOs)
//! ```
//!
//! # Design Decisions
//! - One handle per process, constructed from config and injected
//! - Failures pass through a single normalization step; nothing is
//!   retried, cached, or suppressed at this layer
//! - Successful responses are decoded and returned unmodified

pub mod client;
pub mod error;
pub mod goals;

pub use client::ApiClient;
pub use error::RequestError;
pub use goals::{GoalRequest, GoalResponse, Page, SearchResult, TaskRequest, TaskResponse};
