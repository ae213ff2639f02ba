//! The dual-engine store handle.
//!
//! [`Database`] wraps either a SQLite pool (local development) or a
//! Postgres pool (production), selected by the connection string scheme.
//! It exposes a small query surface -- `fetch_all`, `fetch_optional`,
//! `execute`, `insert` -- with one placeholder convention: callers write
//! `?` and the Postgres arm rewrites the query text to numbered `$N`
//! placeholders before executing. The rewrite is structural over the SQL
//! text only; parameter values are always bound, never spliced, so a `?`
//! inside a bound value can never be touched.

use std::str::FromStr;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{FromRow, PgPool, SqlitePool};

use crate::types::DbId;

/// Maximum pooled connections per engine.
const MAX_CONNECTIONS: u32 = 5;

/// A positional query parameter.
///
/// The schema only stores text and surrogate keys, so two variants cover
/// every query in the repository layer.
#[derive(Debug, Clone)]
pub enum SqlValue {
    Text(String),
    Int(i64),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        SqlValue::Text(value.into())
    }

    pub fn int(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

/// The process-wide store handle, constructed once at startup and passed
/// explicitly to the request-handling layer.
///
/// Cheaply cloneable: both pool types are reference-counted internally.
#[derive(Debug, Clone)]
pub enum Database {
    Sqlite(SqlitePool),
    Postgres(PgPool),
}

impl Database {
    /// Connect to the engine selected by the connection string scheme.
    ///
    /// `postgres://` (or `postgresql://`) URLs open a Postgres pool;
    /// anything else is treated as a SQLite database path, created on
    /// first use.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            let pool = PgPoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .connect(url)
                .await?;
            Ok(Database::Postgres(pool))
        } else {
            let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .connect_with(options)
                .await?;
            Ok(Database::Sqlite(pool))
        }
    }

    /// Engine name for startup logging.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Database::Sqlite(_) => "sqlite",
            Database::Postgres(_) => "postgres",
        }
    }

    /// Liveness probe: runs `SELECT 1` against the active pool.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        match self {
            Database::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            Database::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }

    /// Run a query and map every row into `T`.
    pub async fn fetch_all<T>(&self, query: &str, params: &[SqlValue]) -> Result<Vec<T>, sqlx::Error>
    where
        T: Send + Unpin + for<'r> FromRow<'r, SqliteRow> + for<'r> FromRow<'r, PgRow>,
    {
        match self {
            Database::Sqlite(pool) => {
                let mut q = sqlx::query_as::<_, T>(query);
                for param in params {
                    q = match param {
                        SqlValue::Text(v) => q.bind(v.as_str()),
                        SqlValue::Int(v) => q.bind(*v),
                    };
                }
                q.fetch_all(pool).await
            }
            Database::Postgres(pool) => {
                let rewritten = numbered_placeholders(query);
                let mut q = sqlx::query_as::<_, T>(&rewritten);
                for param in params {
                    q = match param {
                        SqlValue::Text(v) => q.bind(v.as_str()),
                        SqlValue::Int(v) => q.bind(*v),
                    };
                }
                q.fetch_all(pool).await
            }
        }
    }

    /// Run a query and map the first row into `T`, if any.
    pub async fn fetch_optional<T>(
        &self,
        query: &str,
        params: &[SqlValue],
    ) -> Result<Option<T>, sqlx::Error>
    where
        T: Send + Unpin + for<'r> FromRow<'r, SqliteRow> + for<'r> FromRow<'r, PgRow>,
    {
        match self {
            Database::Sqlite(pool) => {
                let mut q = sqlx::query_as::<_, T>(query);
                for param in params {
                    q = match param {
                        SqlValue::Text(v) => q.bind(v.as_str()),
                        SqlValue::Int(v) => q.bind(*v),
                    };
                }
                q.fetch_optional(pool).await
            }
            Database::Postgres(pool) => {
                let rewritten = numbered_placeholders(query);
                let mut q = sqlx::query_as::<_, T>(&rewritten);
                for param in params {
                    q = match param {
                        SqlValue::Text(v) => q.bind(v.as_str()),
                        SqlValue::Int(v) => q.bind(*v),
                    };
                }
                q.fetch_optional(pool).await
            }
        }
    }

    /// Run a statement with side effects and return the affected row count.
    ///
    /// Engine errors (malformed SQL, constraint violations) propagate as
    /// [`sqlx::Error`] carrying the underlying diagnostic.
    pub async fn execute(&self, query: &str, params: &[SqlValue]) -> Result<u64, sqlx::Error> {
        match self {
            Database::Sqlite(pool) => {
                let mut q = sqlx::query(query);
                for param in params {
                    q = match param {
                        SqlValue::Text(v) => q.bind(v.as_str()),
                        SqlValue::Int(v) => q.bind(*v),
                    };
                }
                Ok(q.execute(pool).await?.rows_affected())
            }
            Database::Postgres(pool) => {
                let rewritten = numbered_placeholders(query);
                let mut q = sqlx::query(&rewritten);
                for param in params {
                    q = match param {
                        SqlValue::Text(v) => q.bind(v.as_str()),
                        SqlValue::Int(v) => q.bind(*v),
                    };
                }
                Ok(q.execute(pool).await?.rows_affected())
            }
        }
    }

    /// Run an `INSERT` and return the newly assigned surrogate key.
    ///
    /// SQLite reports the key through its auto-increment cursor; Postgres
    /// needs a `RETURNING id` clause, which this method appends itself so
    /// callers see one contract across engines.
    pub async fn insert(&self, query: &str, params: &[SqlValue]) -> Result<DbId, sqlx::Error> {
        match self {
            Database::Sqlite(pool) => {
                let mut q = sqlx::query(query);
                for param in params {
                    q = match param {
                        SqlValue::Text(v) => q.bind(v.as_str()),
                        SqlValue::Int(v) => q.bind(*v),
                    };
                }
                let result = q.execute(pool).await?;
                Ok(result.last_insert_rowid())
            }
            Database::Postgres(pool) => {
                let rewritten = format!("{} RETURNING id", numbered_placeholders(query));
                let mut q = sqlx::query_scalar::<_, DbId>(&rewritten);
                for param in params {
                    q = match param {
                        SqlValue::Text(v) => q.bind(v.as_str()),
                        SqlValue::Int(v) => q.bind(*v),
                    };
                }
                q.fetch_one(pool).await
            }
        }
    }
}

/// Rewrite `?` placeholders to `$1`, `$2`, ... left to right.
///
/// Single-quoted string literals in the SQL text are skipped, so a literal
/// `?` inside one is left alone. Doubled quotes (`''`) toggle the literal
/// state twice, which nets out correctly.
fn numbered_placeholders(query: &str) -> String {
    let mut out = String::with_capacity(query.len() + 8);
    let mut index = 0u32;
    let mut in_literal = false;

    for ch in query.chars() {
        match ch {
            '\'' => {
                in_literal = !in_literal;
                out.push(ch);
            }
            '?' if !in_literal => {
                index += 1;
                out.push('$');
                out.push_str(&index.to_string());
            }
            _ => out.push(ch),
        }
    }

    out
}
