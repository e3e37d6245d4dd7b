//! # Persistence Bridge
//!
//! Loads the single saved snapshot at startup and writes the current one back.
//!
//! ## Policy:
//! - `load()` reports failures; `load_or_default()` is the startup path that
//!   turns any failure or missing record into the default snapshot
//! - `save()` overwrites the whole record under the fixed key
//! - The store is opened on first use and stays open for the process lifetime

use log::{info, warn};
use shared::{Snapshot, SNAPSHOT_ID};
use std::sync::Arc;

use crate::backend::storage::{PersistenceResult, SnapshotStorage};

#[derive(Clone)]
pub struct PersistenceBridge {
    storage: Arc<dyn SnapshotStorage>,
}

impl PersistenceBridge {
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        Self { storage }
    }

    /// Fetch the saved snapshot, normalized to 31 ordered days.
    /// `Ok(None)` means nothing has been saved yet.
    pub async fn load(&self) -> PersistenceResult<Option<Snapshot>> {
        self.storage.open().await?;
        let snapshot = self.storage.get_snapshot(SNAPSHOT_ID).await?;
        Ok(snapshot.map(Snapshot::normalized))
    }

    /// Startup load: failures and a missing record both mean "use defaults"
    pub async fn load_or_default(&self) -> Snapshot {
        match self.load().await {
            Ok(Some(snapshot)) => {
                info!("📊 Loaded saved snapshot '{}'", snapshot.id);
                snapshot
            }
            Ok(None) => {
                info!("📊 No saved snapshot yet, starting with an empty month");
                Snapshot::default()
            }
            Err(e) => {
                warn!("❌ Failed to load saved snapshot, starting with an empty month: {}", e);
                Snapshot::default()
            }
        }
    }

    /// Overwrite the stored snapshot with `snapshot`
    pub async fn save(&self, snapshot: &Snapshot) -> PersistenceResult<()> {
        self.storage.open().await?;
        if snapshot.id == SNAPSHOT_ID {
            self.storage.put_snapshot(snapshot).await
        } else {
            let mut keyed = snapshot.clone();
            keyed.id = SNAPSHOT_ID.to_string();
            self.storage.put_snapshot(&keyed).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::StorageConfig;
    use crate::backend::storage::{DbConnection, SnapshotRepository};
    use shared::MilkSource;
    use tempfile::TempDir;

    fn setup_test() -> (PersistenceBridge, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = SnapshotRepository::new(DbConnection::new(StorageConfig::in_directory(temp_dir.path())));
        (PersistenceBridge::new(Arc::new(repo)), temp_dir)
    }

    fn unopenable_bridge(temp_dir: &TempDir) -> PersistenceBridge {
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let repo = SnapshotRepository::new(DbConnection::new(StorageConfig::in_directory(blocker)));
        PersistenceBridge::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_load_without_saved_data() {
        let (bridge, _temp_dir) = setup_test();

        assert_eq!(bridge.load().await.expect("Load should succeed"), None);
        assert_eq!(bridge.load_or_default().await, Snapshot::default());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let (bridge, _temp_dir) = setup_test();

        let mut snapshot = Snapshot::default();
        snapshot.prices.set_price(MilkSource::Cow, "48".to_string());
        snapshot.prices.set_price(MilkSource::Buffalo, "abc".to_string());
        snapshot.entries[0].set_quantity(MilkSource::Cow, "1.5".to_string());
        snapshot.entries[30].set_quantity(MilkSource::Buffalo, "".to_string());
        snapshot.entries[12].set_quantity(MilkSource::Buffalo, "2".to_string());

        bridge.save(&snapshot).await.expect("Save should succeed");

        assert_eq!(bridge.load().await.unwrap(), Some(snapshot.clone()));
        assert_eq!(bridge.load_or_default().await, snapshot);
    }

    #[tokio::test]
    async fn test_save_always_uses_fixed_key() {
        let (bridge, _temp_dir) = setup_test();

        let mut snapshot = Snapshot::default();
        snapshot.id = "other".to_string();
        snapshot.prices.set_price(MilkSource::Cow, "3".to_string());
        bridge.save(&snapshot).await.unwrap();

        let loaded = bridge.load().await.unwrap().expect("Snapshot should be stored");
        assert_eq!(loaded.id, SNAPSHOT_ID);
        assert_eq!(loaded.prices.price_a, "3");
    }

    #[tokio::test]
    async fn test_open_failure_is_reported_and_load_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let bridge = unopenable_bridge(&temp_dir);

        assert!(bridge.load().await.is_err());
        assert!(bridge.save(&Snapshot::default()).await.is_err());
        assert_eq!(bridge.load_or_default().await, Snapshot::default());
    }
}
