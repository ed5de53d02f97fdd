/// Database connection management
///
/// The desk talks to SQLite through a pool capped at a single connection,
/// which is opened once at startup and closed once at exit.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// One writer, one reader, same connection
const MAX_CONNECTIONS: u32 = 1;

/// Database wrapper around the connection pool
#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(Database)` - Connected, schema initialized
    /// * `Err(DeskError)` - If the directory, connection, or schema step fails
    ///
    /// # Examples
    /// ```no_run
    /// use airport_desk_lib::db::Database;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::new("airport_management.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .disable_statement_logging();

        let pool = single_connection()
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path,
        };

        db.initialize_schema().await?;
        tracing::info!(path = %db.path().display(), "database ready");

        Ok(db)
    }

    /// Empty in-memory desk database with the schema applied
    #[cfg(test)]
    pub async fn new_test() -> Result<Self> {
        use std::str::FromStr;

        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // A second connection would see a different, empty in-memory database
        let pool = single_connection()
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path: PathBuf::from(":memory:"),
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    /// Create the three tables if they aren't there yet
    ///
    /// Never alters an existing table.
    async fn initialize_schema(&self) -> Result<()> {
        let schema = include_str!("../../database/schema.sql");

        // sqlx runs one statement per query, so split on the terminators
        for statement in schema.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed).execute(self.pool.as_ref()).await?;
            }
        }

        Ok(())
    }

    /// The pool the query methods in `queries.rs` run against
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Close the connection; every query after this fails with `PoolClosed`
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Row counts for every table
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let flight_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Flights")
            .fetch_one(self.pool.as_ref())
            .await?;

        let passenger_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Passengers")
            .fetch_one(self.pool.as_ref())
            .await?;

        let booking_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Bookings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(DatabaseStats {
            total_flights: flight_count.0,
            total_passengers: passenger_count.0,
            total_bookings: booking_count.0,
        })
    }
}

// Opened once, never reaped or recycled, closed only by `close()`
fn single_connection() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .min_connections(MAX_CONNECTIONS)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
}

/// Row counts for the three tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseStats {
    pub total_flights: i64,
    pub total_passengers: i64,
    pub total_bookings: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = Database::new_test().await;
        assert!(db.is_ok());
    }

    #[tokio::test]
    async fn test_database_stats() {
        let db = Database::new_test().await.unwrap();
        let stats = db.stats().await.unwrap();

        assert_eq!(stats.total_flights, 0);
        assert_eq!(stats.total_passengers, 0);
        assert_eq!(stats.total_bookings, 0);
    }

    #[tokio::test]
    async fn test_schema_initialization_is_idempotent() {
        let db = Database::new_test().await.unwrap();

        // Running it again must not complain about existing tables
        db.initialize_schema().await.unwrap();

        for table in ["Flights", "Passengers", "Bookings"] {
            let result: std::result::Result<(i64,), sqlx::Error> =
                sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
                    .fetch_one(db.pool())
                    .await;
            assert!(result.is_ok(), "missing table {}", table);
        }
    }

    #[tokio::test]
    async fn test_file_database_keeps_its_connection() {
        let dir = tempfile::TempDir::new().unwrap();
        let db = Database::new(dir.path().join("desk.db")).await.unwrap();

        let options = db.pool().options();
        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
        assert!(db.path().ends_with("desk.db"));
    }

    #[tokio::test]
    async fn test_foreign_keys_enabled() {
        let db = Database::new_test().await.unwrap();

        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(db.pool())
            .await
            .unwrap();

        assert_eq!(enabled, 1);
    }
}
