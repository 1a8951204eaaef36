//! Pages served by the site
//!
//! Static pages are pre-authored markup under `pages/`; each one replaces the
//! container's contents wholesale. The development demo is built node by node
//! so it can animate the paragraph it creates.

pub mod dev;

use crate::core::constants::{DEV_PATH, NOT_FOUND_PATH, NOT_FOUND_TITLE};
use crate::routing::route::{RenderContext, Route};
use crate::Result;

pub mod markup {
    pub const HOME: &str = include_str!("pages/home.html");
    pub const SQL_SERVER_TRANSACTION_ISOLATION_LEVELS: &str =
        include_str!("pages/sql_server_transaction_isolation_levels.html");
    pub const NOT_FOUND: &str = include_str!("pages/not_found.html");
}

pub const HOME: Route = Route::new("/", None, render_home);

pub const SQL_SERVER_TRANSACTION_ISOLATION_LEVELS: Route = Route::new(
    "/sql-server-transaction-isolation-levels",
    Some("SQL Server Transaction Isolation Levels"),
    render_sql_server_transaction_isolation_levels,
);

pub const DEV: Route = Route::new(DEV_PATH, Some("Dev"), dev::render);

pub const NOT_FOUND: Route = Route::new(NOT_FOUND_PATH, Some(NOT_FOUND_TITLE), render_not_found);

fn render_home(context: &mut RenderContext<'_>) -> Result<()> {
    context.surface.set_content(markup::HOME)
}

fn render_sql_server_transaction_isolation_levels(context: &mut RenderContext<'_>) -> Result<()> {
    context
        .surface
        .set_content(markup::SQL_SERVER_TRANSACTION_ISOLATION_LEVELS)
}

fn render_not_found(context: &mut RenderContext<'_>) -> Result<()> {
    context.surface.set_content(markup::NOT_FOUND)
}
