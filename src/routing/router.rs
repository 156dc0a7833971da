//! Route lookup.
//!
//! # Responsibilities
//! - Hold the validated, ordered route entries
//! - Resolve a path to the first matching entry
//! - Follow redirect entries exactly one hop
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan; n is tiny and order carries meaning
//! - Explicit no-match (`None`) rather than a silent default view

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::routing::matcher::match_pattern;
use crate::routing::table::{RouteEntry, View};

/// Error raised when a route table violates its invariants.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    #[error("route pattern must start with '/': {0:?}")]
    RelativePattern(String),
}

/// The outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    /// View the path resolved to.
    pub view: View,

    /// Unique symbolic name of the matched entry.
    pub name: &'static str,

    /// Parameters bound from `:segments` in the pattern.
    pub params: BTreeMap<String, String>,

    /// Parameters propagated to the view as input props. Empty unless the
    /// matched entry opted in via `props_from_params`.
    pub props: BTreeMap<String, String>,
}

/// An ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table from ordered entries, checking invariants.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, TableError> {
        let mut names = HashSet::new();
        for entry in &entries {
            if !entry.pattern().starts_with('/') {
                return Err(TableError::RelativePattern(entry.pattern().to_string()));
            }
            if let Some(name) = entry.name() {
                if !names.insert(name) {
                    return Err(TableError::DuplicateName(name.to_string()));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Resolve a path to the first matching entry, in declaration order.
    ///
    /// A redirect entry replaces the path and re-resolves once; a redirect
    /// reached on the second pass is not followed.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        self.resolve_inner(path, true)
    }

    fn resolve_inner(&self, path: &str, follow_redirect: bool) -> Option<ResolvedRoute> {
        for entry in &self.entries {
            match entry {
                RouteEntry::Redirect { from, to } => {
                    if match_pattern(from, path).is_some() {
                        if follow_redirect {
                            return self.resolve_inner(to, false);
                        }
                        tracing::debug!(path = %path, target = %to, "redirect chain not followed");
                        return None;
                    }
                }
                RouteEntry::Static { path: pattern, view, name } => {
                    if match_pattern(pattern, path).is_some() {
                        return Some(ResolvedRoute {
                            view: *view,
                            name: *name,
                            params: BTreeMap::new(),
                            props: BTreeMap::new(),
                        });
                    }
                }
                RouteEntry::Param {
                    pattern,
                    view,
                    name,
                    props_from_params,
                } => {
                    if let Some(params) = match_pattern(pattern, path) {
                        let props = if *props_from_params {
                            params.clone()
                        } else {
                            BTreeMap::new()
                        };
                        return Some(ResolvedRoute {
                            view: *view,
                            name: *name,
                            params,
                            props,
                        });
                    }
                }
            }
        }
        None
    }
}
