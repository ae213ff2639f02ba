//! Shared database-facing type aliases.

/// Surrogate key type used by every table.
///
/// SQLite rowids and Postgres `BIGSERIAL` columns both map to `i64`.
pub type DbId = i64;
