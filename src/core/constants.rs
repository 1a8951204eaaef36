//! Site-wide constants shared by routing, activation and the browser glue.
//! Keeping them in a single place makes it easier to rename the site or move the container.

/// Name shown in the document title, alone or after a route title.
pub const SITE_NAME: &str = "ScholarChart";

/// Separator between a route title and the site name.
pub const TITLE_SEPARATOR: &str = " - ";

/// Element id of the container every route renders into.
pub const ROUTE_CONTAINER_ID: &str = "route-container";

/// Path and title of the fallback returned for unmatched paths.
pub const NOT_FOUND_PATH: &str = "/404";
pub const NOT_FOUND_TITLE: &str = "404 Not Found";

/// Development-only animation demo.
pub const DEV_PATH: &str = "/dev";

/// Compile-time variable consulted by `Environment::detect`.
pub const ENV_VAR: &str = "SCHOLARCHART_ENV";
