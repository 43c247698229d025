//! Exact-path route table.
//!
//! Built once at startup from the declared route list and read-only
//! afterwards, so connection tasks share it behind `Arc` without locking.

use crate::error::ServerError;
use rustc_hash::FxHashMap;

/// Boxed error a handler may return; the dispatcher maps it to a 500.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A handler produces the response body for its positionally bound arguments.
pub type Handler = fn(&[String]) -> Result<String, HandlerError>;

/// One handler input sourced from the query string. The default must be a
/// defined string; a handler never sees an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default_value: &'static str,
}

impl ParamSpec {
    pub const fn new(name: &'static str, default_value: &'static str) -> Self {
        ParamSpec {
            name,
            default_value,
        }
    }
}

/// An exact URL path bound to a handler and its parameter declarations.
/// `name` identifies the handler in failure logs.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub name: &'static str,
    pub handler: Handler,
    pub params: Vec<ParamSpec>,
}

impl Route {
    pub fn new(path: &str, name: &'static str, handler: Handler, params: Vec<ParamSpec>) -> Self {
        Route {
            path: path.to_string(),
            name,
            handler,
            params,
        }
    }
}

/// Path → route table.
///
/// `register` keeps plain insert semantics: a duplicate path replaces the
/// earlier route. `from_routes`, the startup path, instead refuses duplicate
/// declarations outright, so a conflicting handler list never serves traffic.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    routes: FxHashMap<String, Route>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            routes: FxHashMap::default(),
        }
    }

    /// Build the startup registry from the declared route list. Fails on the
    /// first duplicate path.
    pub fn from_routes(declared: Vec<Route>) -> Result<Self, ServerError> {
        let mut registry = Registry::new();
        for route in declared {
            if registry.routes.contains_key(&route.path) {
                return Err(ServerError::DuplicateRoute(route.path));
            }
            registry.register(route);
        }
        Ok(registry)
    }

    /// Insert a route. A route already registered under the same path is
    /// replaced (last registration wins).
    pub fn register(&mut self, route: Route) {
        self.routes.insert(route.path.clone(), route);
    }

    /// Exact-path lookup; no prefix or pattern matching.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.get(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
