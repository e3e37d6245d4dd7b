use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::backend::config::StorageConfig;
use crate::backend::storage::error::{PersistenceError, PersistenceResult};

/// Lifecycle of the database handle. Moves to `Ready` once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Uninitialized,
    Ready,
}

/// DbConnection lazily opens the SQLite database on first use
#[derive(Clone)]
pub struct DbConnection {
    config: StorageConfig,
    pool: Arc<OnceCell<SqlitePool>>,
}

impl DbConnection {
    /// Create an unopened connection for the configured database file
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            pool: Arc::new(OnceCell::new()),
        }
    }

    pub fn state(&self) -> ConnectionState {
        if self.pool.initialized() {
            ConnectionState::Ready
        } else {
            ConnectionState::Uninitialized
        }
    }

    /// Get the pool, opening the database and creating the schema on first call.
    /// A failed open leaves the connection uninitialized so the next call retries.
    pub async fn pool(&self) -> PersistenceResult<&SqlitePool> {
        self.pool.get_or_try_init(|| Self::connect(&self.config)).await
    }

    async fn connect(config: &StorageConfig) -> PersistenceResult<SqlitePool> {
        tokio::fs::create_dir_all(&config.data_dir)
            .await
            .map_err(|source| PersistenceError::DataDirectory {
                path: config.data_dir.display().to_string(),
                source,
            })?;

        let options = SqliteConnectOptions::new()
            .filename(config.database_path())
            .create_if_missing(true);

        // Single connection: writes to the one record never interleave
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(PersistenceError::Open)?;

        Self::setup_schema(&pool).await.map_err(PersistenceError::Open)?;

        info!("🗄️ Opened snapshot store at {}", config.database_path().display());
        Ok(pool)
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS milk (
                id TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
