use crate::routing::route::Route;
use crate::{Result, SiteError};

/// Ordered, immutable list of routes plus the fallback for unmatched paths.
///
/// Tables are built once at startup. Optional routes are added with
/// [`RouteTable::with_route_if`], which returns a new table rather than
/// mutating a shared one.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    not_found: Route,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>, not_found: Route) -> Result<Self> {
        let mut table = Self {
            routes: Vec::with_capacity(routes.len()),
            not_found,
        };
        for route in routes {
            table = table.with_route(route)?;
        }
        Ok(table)
    }

    /// Append `route`, rejecting a path that is already present.
    pub fn with_route(mut self, route: Route) -> Result<Self> {
        if self.contains(route.path) {
            return Err(SiteError::DuplicateRoute(route.path.to_string()));
        }
        self.routes.push(route);
        Ok(self)
    }

    pub fn with_route_if(self, condition: bool, route: Route) -> Result<Self> {
        if condition {
            self.with_route(route)
        } else {
            Ok(self)
        }
    }

    /// Route whose path is exactly `path`, or the not-found route.
    pub fn resolve(&self, path: &str) -> &Route {
        match self.routes.iter().find(|route| route.path == path) {
            Some(route) => route,
            None => {
                log::debug!("no route for {:?}, using {}", path, self.not_found.path);
                &self.not_found
            }
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.iter().any(|route| route.path == path)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn not_found(&self) -> &Route {
        &self.not_found
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
