//! Route table module
//!
//! Maps (HTTP method, path pattern) pairs to an enumerated handler action.
//! The table is built once at startup and stays immutable for the lifetime
//! of the server.

use hyper::Method;
use thiserror::Error;

use super::pattern::{PathParams, PatternError, RoutePattern};

/// Errors building the route table.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("duplicate route {method} {pattern}")]
    DuplicateRoute { method: Method, pattern: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// The closed set of handlers a route can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    Home,
    SnippetView,
    SnippetCreate,
    SnippetCreatePost,
    StaticAssets,
}

#[derive(Debug)]
struct Route {
    method: Method,
    pattern: RoutePattern,
    action: RouteAction,
}

/// Immutable route table.
///
/// Registered patterns are pairwise disjoint, so for any (method, path)
/// pair at most one route matches and registration order is irrelevant
/// to correctness.
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Duplicate (method, pattern) pairs are rejected.
    pub fn register(
        &mut self,
        method: Method,
        pattern: RoutePattern,
        action: RouteAction,
    ) -> Result<(), RouterError> {
        let duplicate = self
            .routes
            .iter()
            .any(|route| route.method == method && route.pattern == pattern);
        if duplicate {
            return Err(RouterError::DuplicateRoute {
                method,
                pattern: pattern.as_str().to_string(),
            });
        }
        self.routes.push(Route {
            method,
            pattern,
            action,
        });
        Ok(())
    }

    /// Find the route matching a request, extracting path captures.
    /// HEAD requests match GET routes.
    pub fn match_route(&self, method: &Method, path: &str) -> Option<(RouteAction, PathParams)> {
        let lookup = if *method == Method::HEAD {
            &Method::GET
        } else {
            method
        };
        self.routes.iter().find_map(|route| {
            if route.method != *lookup {
                return None;
            }
            route
                .pattern
                .matches(path)
                .map(|params| (route.action, params))
        })
    }
}

/// Build the application's fixed route table.
pub fn app_routes() -> Result<Router, RouterError> {
    let mut router = Router::new();
    router.register(Method::GET, RoutePattern::parse("/")?, RouteAction::Home)?;
    router.register(
        Method::GET,
        RoutePattern::parse("/snippet/view/{id}")?,
        RouteAction::SnippetView,
    )?;
    router.register(
        Method::GET,
        RoutePattern::parse("/snippet/create")?,
        RouteAction::SnippetCreate,
    )?;
    router.register(
        Method::POST,
        RoutePattern::parse("/snippet/create")?,
        RouteAction::SnippetCreatePost,
    )?;
    router.register(
        Method::GET,
        RoutePattern::prefix("/static/")?,
        RouteAction::StaticAssets,
    )?;
    Ok(router)
}
