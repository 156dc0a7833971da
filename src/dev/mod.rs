//! Local development server subsystem.
//!
//! # Data Flow
//! ```text
//! browser request
//!     → server.rs (Axum setup, timeout + trace layers)
//!     → /api/** : forward to the backend target (Host rewrite, request ID)
//!     → other paths : resolve through the route table, answer the
//!       resolved view descriptor
//! ```
//!
//! Development-only: the server binds the loopback interface and is not part
//! of production builds.

pub mod server;

pub use server::DevServer;
