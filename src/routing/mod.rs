//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! URL path ("/goals/42")
//!     → router.rs (ordered first-match scan, one redirect hop)
//!     → matcher.rs (segment comparison, :param binding)
//!     → Return: ResolvedRoute (view + params) or explicit no-match
//!
//! Table Construction (at startup):
//!     Vec<RouteEntry>
//!     → Check invariants (unique names, absolute patterns)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime
//! - No regex in the match path (segment comparison only)
//! - Deterministic: same input always resolves the same route
//! - First match wins (declaration order carries meaning for this
//!   table, see table.rs)
//! - History-style navigation: resolution operates on real URL paths,
//!   never on a fragment

pub mod matcher;
pub mod router;
pub mod table;

pub use router::{ResolvedRoute, RouteTable, TableError};
pub use table::{goals_routes, RouteEntry, View};
