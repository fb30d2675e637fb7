//! Mode routing
//!
//! - Server mode (HTTP server, the default)
//! - Schema mode (create tables and indexes, then exit)

#[cfg(feature = "server")]
pub mod server;

pub mod schema;

#[cfg(feature = "server")]
pub use server::{AppSettings, build_app, run_server};

pub use schema::run_init_schema;
