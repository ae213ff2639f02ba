//! Schema initialization and default admin seeding.
//!
//! Table creation runs on every process start as separate best-effort
//! `CREATE TABLE IF NOT EXISTS` statements (not one transaction). The two
//! engines share an identical schema apart from surrogate-key syntax:
//! SQLite uses `INTEGER PRIMARY KEY AUTOINCREMENT`, Postgres `BIGSERIAL`.

use crate::database::Database;
use crate::repositories::AdminRepo;

/// Username of the administrator account seeded at first startup.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Plaintext password of the seeded administrator account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const SQLITE_SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS masterpieces (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT '',
        image_url TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS packages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL DEFAULT '',
        price TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        features TEXT NOT NULL DEFAULT '',
        image_url TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS admins (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )",
];

const POSTGRES_SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS masterpieces (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT '',
        image_url TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS packages (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL DEFAULT '',
        price TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        features TEXT NOT NULL DEFAULT '',
        image_url TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS admins (
        id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )",
];

impl Database {
    /// Idempotently create the three tables and seed the default admin.
    ///
    /// Safe to call on every process start. A failure here means the
    /// process cannot serve traffic; `main` treats it as fatal.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        let statements = match self {
            Database::Sqlite(_) => SQLITE_SCHEMA,
            Database::Postgres(_) => POSTGRES_SCHEMA,
        };

        for statement in statements {
            self.execute(statement, &[]).await?;
        }

        seed_default_admin(self).await
    }
}

/// Insert the fixed default admin credential if no such row exists yet.
///
/// The existence check keeps the common restart path read-only; the
/// insert itself is conflict-guarded, so two processes racing through
/// first startup cannot fail or double-seed.
async fn seed_default_admin(db: &Database) -> Result<(), sqlx::Error> {
    if AdminRepo::find_by_username(db, DEFAULT_ADMIN_USERNAME)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let inserted = AdminRepo::create(db, DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD).await?;
    if inserted > 0 {
        tracing::info!(username = DEFAULT_ADMIN_USERNAME, "Seeded default admin account");
    }

    Ok(())
}
