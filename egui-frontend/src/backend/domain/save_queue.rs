//! # Save Queue
//!
//! A single background writer for snapshots. Submitting never blocks the UI;
//! writes happen one at a time in submission order, and snapshots that pile
//! up behind an in-flight write are collapsed to the newest one. The stored
//! record therefore always ends up as the last snapshot submitted.

use log::{error, info, warn};
use shared::Snapshot;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::persistence_bridge::PersistenceBridge;

enum SaveCommand {
    Save(Snapshot),
    Flush(oneshot::Sender<()>),
}

#[derive(Clone)]
pub struct SaveQueue {
    sender: mpsc::UnboundedSender<SaveCommand>,
}

impl SaveQueue {
    /// Spawn the writer task on `handle`
    pub fn start(handle: &Handle, bridge: PersistenceBridge) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let worker = handle.spawn(Self::run(receiver, bridge));
        (Self { sender }, worker)
    }

    /// Queue a snapshot for writing. Fire-and-forget.
    pub fn submit(&self, snapshot: Snapshot) {
        if self.sender.send(SaveCommand::Save(snapshot)).is_err() {
            warn!("⚠️ Save queue is closed, dropping snapshot");
        }
    }

    /// Wait until every snapshot submitted before this call has been written
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.sender.send(SaveCommand::Flush(ack)).is_err() {
            return;
        }
        let _ = done.await;
    }

    async fn run(mut receiver: mpsc::UnboundedReceiver<SaveCommand>, bridge: PersistenceBridge) {
        let mut acks = Vec::new();

        while let Some(command) = receiver.recv().await {
            let mut latest = match command {
                SaveCommand::Save(snapshot) => snapshot,
                SaveCommand::Flush(ack) => {
                    let _ = ack.send(());
                    continue;
                }
            };

            // Collapse queued saves; stop at a flush so it is acked after this write
            while let Ok(next) = receiver.try_recv() {
                match next {
                    SaveCommand::Save(snapshot) => latest = snapshot,
                    SaveCommand::Flush(ack) => {
                        acks.push(ack);
                        break;
                    }
                }
            }

            match bridge.save(&latest).await {
                Ok(()) => info!("💾 Saved snapshot"),
                Err(e) => error!("❌ Failed to save snapshot: {}", e),
            }

            for ack in acks.drain(..) {
                let _ = ack.send(());
            }
        }

        info!("💾 Save queue stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::StorageConfig;
    use crate::backend::storage::{DbConnection, SnapshotRepository};
    use shared::MilkSource;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn setup_test() -> (PersistenceBridge, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = SnapshotRepository::new(DbConnection::new(StorageConfig::in_directory(temp_dir.path())));
        (PersistenceBridge::new(Arc::new(repo)), temp_dir)
    }

    #[tokio::test]
    async fn test_last_submitted_snapshot_wins() {
        let (bridge, _temp_dir) = setup_test();
        let (queue, _worker) = SaveQueue::start(&Handle::current(), bridge.clone());

        let mut snapshot = Snapshot::default();
        for value in 1..=50 {
            snapshot.prices.set_price(MilkSource::Cow, value.to_string());
            queue.submit(snapshot.clone());
        }
        queue.flush().await;

        let stored = bridge.load().await.unwrap().expect("Snapshot should be stored");
        assert_eq!(stored.prices.price_a, "50");
    }

    #[tokio::test]
    async fn test_flush_on_empty_queue_returns() {
        let (bridge, _temp_dir) = setup_test();
        let (queue, _worker) = SaveQueue::start(&Handle::current(), bridge.clone());

        queue.flush().await;

        assert_eq!(bridge.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_writes_do_not_stop_the_queue() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let repo = SnapshotRepository::new(DbConnection::new(StorageConfig::in_directory(&blocker)));
        let (queue, worker) = SaveQueue::start(&Handle::current(), PersistenceBridge::new(Arc::new(repo)));

        queue.submit(Snapshot::default());
        queue.flush().await;
        queue.submit(Snapshot::default());
        queue.flush().await;

        assert!(!worker.is_finished());
    }

    #[tokio::test]
    async fn test_queue_stops_when_all_senders_drop() {
        let (bridge, _temp_dir) = setup_test();
        let (queue, worker) = SaveQueue::start(&Handle::current(), bridge.clone());

        let mut snapshot = Snapshot::default();
        snapshot.entries[14].set_quantity(MilkSource::Buffalo, "2".to_string());
        queue.submit(snapshot.clone());
        drop(queue);

        worker.await.expect("Writer task should finish cleanly");
        assert_eq!(bridge.load().await.unwrap(), Some(snapshot));
    }
}
