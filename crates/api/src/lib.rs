//! Gearshelf catalog API server library.
//!
//! Exposes configuration, state, error mapping, extractors, handlers and the
//! router so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
