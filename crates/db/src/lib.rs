//! Content store for the décor backend.
//!
//! Owns the three-table schema (masterpieces, packages, admins), the
//! dual-engine connection pool (SQLite locally, Postgres in production),
//! and the repository layer the API service persists through.
//!
//! Callers always write SQL with positional `?` placeholders; the
//! [`Database`] handle rewrites them to `$1`, `$2`, ... when the Postgres
//! engine is active. See [`database`] for the full store contract.

pub mod database;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod types;

pub use database::{Database, SqlValue};
pub use types::DbId;
