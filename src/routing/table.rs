//! Route table definitions.
//!
//! # Responsibilities
//! - Define the view identifiers the application can resolve to
//! - Define the tagged route-entry variants
//! - Declare the application's route table in its literal source order

use serde::Serialize;

/// View identifiers the route table resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    GoalList,
    GoalDetail,
    GoalForm,
}

/// A single rule in the route table.
///
/// Entries are evaluated in declaration order; the first match wins.
#[derive(Debug, Clone)]
pub enum RouteEntry {
    /// A fixed path mapped to a view.
    Static {
        path: &'static str,
        view: View,
        name: &'static str,
    },

    /// A pattern with `:param` segments mapped to a view. When
    /// `props_from_params` is set, the bound parameters are handed to the
    /// view as input props; otherwise they are only reported as params.
    Param {
        pattern: &'static str,
        view: View,
        name: &'static str,
        props_from_params: bool,
    },

    /// Replaces the input path and re-resolves once.
    Redirect {
        from: &'static str,
        to: &'static str,
    },
}

impl RouteEntry {
    /// The entry's unique symbolic name. Redirects are unnamed.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            RouteEntry::Static { name, .. } | RouteEntry::Param { name, .. } => Some(*name),
            RouteEntry::Redirect { .. } => None,
        }
    }

    /// The pattern this entry is matched against.
    pub fn pattern(&self) -> &'static str {
        match self {
            RouteEntry::Static { path, .. } => *path,
            RouteEntry::Param { pattern, .. } => *pattern,
            RouteEntry::Redirect { from, .. } => *from,
        }
    }
}

/// The application route table, in its literal source order.
///
/// `/goals/new` is declared after `/goals/:id` and is therefore shadowed: a
/// first-match scan resolves it to GoalDetail with id="new". Kept as-is to
/// match the deployed table.
/// TODO: reorder the two entries once existing deep links to /goals/new have
/// been audited.
pub fn goals_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::Redirect {
            from: "/",
            to: "/goals",
        },
        RouteEntry::Static {
            path: "/goals",
            view: View::GoalList,
            name: "GoalList",
        },
        RouteEntry::Param {
            pattern: "/goals/:id",
            view: View::GoalDetail,
            name: "GoalDetail",
            props_from_params: true,
        },
        RouteEntry::Static {
            path: "/goals/new",
            view: View::GoalForm,
            name: "GoalCreate",
        },
        RouteEntry::Param {
            pattern: "/goals/:id/edit",
            view: View::GoalForm,
            name: "GoalEdit",
            props_from_params: true,
        },
    ]
}
