//! SQLite connection pooling and embedded migrations.

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Pool of SQLite connections shared by all request handlers.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
/// A connection checked out of [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Applies per-connection pragmas when the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a connection pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;
    Ok(pool)
}

/// Apply every migration that has not been run yet.
pub fn run_migrations(conn: &mut SqliteConnection) -> RepositoryResult<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| RepositoryError::Migration(e.to_string()))?;
    Ok(())
}
