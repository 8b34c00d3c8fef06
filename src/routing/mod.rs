//! Routing module
//!
//! Provides the immutable route table and path pattern matching:
//! - Exact templates with named `{id}` wildcard segments
//! - An exact-end root pattern
//! - A prefix pattern for the static asset route

mod pattern;
mod router;

pub use pattern::{PathParams, PatternError, RoutePattern};
pub use router::{app_routes, RouteAction, Router, RouterError};
