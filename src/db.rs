//! Database connection helpers.
//!
//! Wraps the Diesel r2d2 pool used for the clinic's SQLite database and
//! applies the embedded schema migrations.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{error, info};

use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::unicode_lower_utils;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pragmas executed on every connection handed out by the pool, which also
/// registers the `unicode_lower` SQL function the name filters rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlitePragmas {
    /// Write-ahead logging lets readers proceed while a write is in flight.
    pub wal: bool,
    /// SQLite leaves foreign keys unchecked unless asked per connection.
    pub foreign_keys: bool,
    pub busy_timeout: Duration,
}

impl Default for SqlitePragmas {
    fn default() -> Self {
        Self {
            wal: true,
            foreign_keys: true,
            busy_timeout: Duration::from_secs(30),
        }
    }
}

impl SqlitePragmas {
    fn statements(&self) -> String {
        let mut sql = format!("PRAGMA busy_timeout = {};", self.busy_timeout.as_millis());
        if self.wal {
            sql.push_str(" PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        if self.foreign_keys {
            sql.push_str(" PRAGMA foreign_keys = ON;");
        }
        sql
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&self.statements())
            .and_then(|()| unicode_lower_utils::register_impl(conn, |x: String| x.to_lowercase()))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a Diesel connection pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas::default()))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
}

/// Retrieve a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| error!("Failed to get connection from pool: {e}"))
}

/// Apply every migration that has not yet run against the pool's database.
pub fn run_migrations(pool: &DbPool) -> RepositoryResult<usize> {
    let mut conn = get_connection(pool)?;
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Failed to run database migrations: {e}");
        RepositoryError::DatabaseError(format!("Migration error: {e}"))
    })?;
    for version in &applied {
        info!("Applied migration {version}");
    }
    Ok(applied.len())
}
