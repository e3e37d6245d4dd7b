//! # Storage Traits
//!
//! Abstraction between the persistence bridge and the concrete key-value
//! backend, so the bridge and its tests do not depend on SQLite details.

use async_trait::async_trait;
use shared::Snapshot;

use super::error::PersistenceResult;

/// Key-value storage for whole snapshots
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Open the store and create its schema if needed. Idempotent.
    async fn open(&self) -> PersistenceResult<()>;

    /// Fetch the snapshot stored under `id`, if any
    async fn get_snapshot(&self, id: &str) -> PersistenceResult<Option<Snapshot>>;

    /// Overwrite the record keyed by `snapshot.id` with the full snapshot
    async fn put_snapshot(&self, snapshot: &Snapshot) -> PersistenceResult<()>;
}
