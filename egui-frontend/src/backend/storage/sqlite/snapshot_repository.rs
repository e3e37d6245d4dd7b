use async_trait::async_trait;
use log::debug;
use shared::Snapshot;
use sqlx::Row;

use crate::backend::storage::error::{PersistenceError, PersistenceResult};
use crate::backend::storage::sqlite::connection::DbConnection;
use crate::backend::storage::traits::SnapshotStorage;

/// Repository storing whole snapshots as JSON rows in the `milk` table
#[derive(Clone)]
pub struct SnapshotRepository {
    db: DbConnection,
}

impl SnapshotRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DbConnection {
        &self.db
    }
}

#[async_trait]
impl SnapshotStorage for SnapshotRepository {
    async fn open(&self) -> PersistenceResult<()> {
        self.db.pool().await.map(|_| ())
    }

    async fn get_snapshot(&self, id: &str) -> PersistenceResult<Option<Snapshot>> {
        let pool = self.db.pool().await?;

        let row = sqlx::query(
            r#"
            SELECT data
            FROM milk
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        match row {
            Some(r) => {
                let data: String = r.try_get("data")?;
                let snapshot = serde_json::from_str(&data).map_err(PersistenceError::Decode)?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    async fn put_snapshot(&self, snapshot: &Snapshot) -> PersistenceResult<()> {
        let pool = self.db.pool().await?;
        let data = serde_json::to_string(snapshot).map_err(PersistenceError::Encode)?;

        sqlx::query(
            r#"
            INSERT INTO milk (id, data, updated_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(id) DO UPDATE SET
                data = excluded.data,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(&snapshot.id)
        .bind(&data)
        .execute(pool)
        .await?;

        debug!("💾 Wrote snapshot '{}' ({} bytes)", snapshot.id, data.len());
        Ok(())
    }
}
