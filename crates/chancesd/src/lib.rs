//! ChancesAre daemon library.
//!
//! Exposes the router so integration tests can drive it without binding a
//! socket; `main.rs` is a thin wrapper around [`server::run`].

pub mod config;
pub mod docs;
pub mod routes;
pub mod server;
