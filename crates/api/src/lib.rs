//! Disney fan site web server library.
//!
//! Exposes the building blocks (config, state, error handling, the
//! per-session character store, HTML views, routes) so integration tests and
//! the binary entrypoint can both access them.

pub mod background;
pub mod config;
pub mod cookies;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;
