//! HTTP surface: `/state`, `/unlock`, `/lock`, `/seeds`, `/sign`, `/v2/sign`,
//! `/blind/sign`. HTTP Basic auth guards every route.

pub mod auth;
pub mod controller;
pub mod routes;
pub mod schema;

pub use routes::vault_routes;
