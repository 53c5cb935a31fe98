//! Database layer for OncoForms Server
//!
//! Owns the process-wide PostgreSQL connection pool and the parameterized
//! statement execution path used by every request handler.
//!
//! The pool is created lazily at startup: an unreachable database is logged
//! and each statement that needs a connection fails on its own, so the
//! process keeps serving requests and recovers as soon as connectivity
//! returns.

pub mod connection;
pub mod error;
pub mod query;

pub use connection::{DatabaseConfig, DatabasePool};
pub use error::{DatabaseError, DatabaseResult};
pub use query::QueryExecutor;
