//! # Backend Module
//!
//! Everything below the UI: configuration, the embedded snapshot store, and
//! the domain logic. The UI talks to the `Backend` facade only.
//!
//! ## Threading:
//! The UI thread never waits on the database. The backend owns a small tokio
//! runtime; loads resolve through a oneshot channel the UI polls each frame,
//! and saves go through the save queue.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use shared::Snapshot;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;

use config::StorageConfig;
use domain::{PersistenceBridge, SaveQueue};
use storage::{DbConnection, SnapshotRepository};

pub struct Backend {
    runtime: Runtime,
    config: StorageConfig,
    persistence: PersistenceBridge,
    save_queue: SaveQueue,
}

impl Backend {
    /// Create the backend with configuration resolved from the environment
    pub fn new() -> Result<Self> {
        Self::with_config(StorageConfig::from_env()?)
    }

    pub fn with_config(config: StorageConfig) -> Result<Self> {
        info!("🚀 Starting backend, database at {}", config.database_path().display());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("milk-tracker-io")
            .enable_all()
            .build()?;

        let repository = SnapshotRepository::new(DbConnection::new(config.clone()));
        let persistence = PersistenceBridge::new(Arc::new(repository));
        let (save_queue, _worker) = SaveQueue::start(runtime.handle(), persistence.clone());

        Ok(Self {
            runtime,
            config,
            persistence,
            save_queue,
        })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Start the startup load. The receiver yields the saved snapshot, or the
    /// default one if nothing could be loaded; `on_loaded` runs once it is sent.
    pub fn load_snapshot_in_background<F>(&self, on_loaded: F) -> oneshot::Receiver<Snapshot>
    where
        F: FnOnce() + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let persistence = self.persistence.clone();

        self.runtime.spawn(async move {
            let snapshot = persistence.load_or_default().await;
            if sender.send(snapshot).is_ok() {
                on_loaded();
            }
        });

        receiver
    }

    pub fn load_snapshot_blocking(&self) -> Snapshot {
        self.runtime.block_on(self.persistence.load_or_default())
    }

    /// Queue the snapshot for writing and return immediately
    pub fn save_snapshot(&self, snapshot: Snapshot) {
        self.save_queue.submit(snapshot);
    }

    /// Block until all queued snapshots have been written
    pub fn flush_blocking(&self) {
        self.runtime.block_on(self.save_queue.flush());
    }
}

impl Drop for Backend {
    // Must not be dropped from inside an async context
    fn drop(&mut self) {
        info!("💾 Flushing pending saves before shutdown");
        self.flush_blocking();
    }
}
