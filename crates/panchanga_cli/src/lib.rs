//! Service layer for the `panchanga` binary: query-string parsing and the
//! synchronous HTTP endpoint. Kept as a library so the endpoint can be
//! exercised end-to-end in integration tests.

pub mod query;
pub mod server;

pub use query::{AstroQuery, QueryError, parse_astro_query};
pub use server::{AstroServer, ServeError, serve};
