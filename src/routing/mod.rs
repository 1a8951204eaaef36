pub mod route;
pub mod table;

pub use route::{RenderContext, RenderFn, Route};
pub use table::RouteTable;

use crate::content;
use crate::core::config::Environment;
use crate::Result;

/// The ScholarChart route table. `/dev` is only registered in development.
pub fn site_routes(environment: Environment) -> Result<RouteTable> {
    RouteTable::new(
        vec![content::HOME, content::SQL_SERVER_TRANSACTION_ISOLATION_LEVELS],
        content::NOT_FOUND,
    )?
    .with_route_if(environment.is_development(), content::DEV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_routes() {
        let table = site_routes(Environment::Production).unwrap();
        let paths: Vec<&str> = table.routes().iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/", "/sql-server-transaction-isolation-levels"]);
        assert_eq!(table.resolve("/dev").title, Some("404 Not Found"));
    }

    #[test]
    fn test_development_routes_include_dev() {
        let table = site_routes(Environment::Development).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.resolve("/dev").title, Some("Dev"));
        assert_eq!(table.resolve("/").title, None);
    }
}
