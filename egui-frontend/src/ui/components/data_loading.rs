//! # Data Loading Module
//!
//! The bridge between the UI and the backend.
//!
//! ## Key Functions:
//! - `poll_initial_load()` - pick up the startup load once it resolves
//! - `apply_loaded_snapshot()` - patch loaded values into the form
//! - `persist_changes()` - hand the current snapshot to the save queue
//!
//! ## Data Flow:
//! 1. The form renders empty and read-only immediately
//! 2. The background load resolves and its snapshot replaces the form
//! 3. Every frame with an edit submits the full snapshot for saving

use log::{debug, info, warn};
use shared::Snapshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::ui::app_state::MilkTrackerApp;

impl MilkTrackerApp {
    /// Check whether the startup load has finished
    pub fn poll_initial_load(&mut self) {
        let Some(receiver) = self.pending_load.as_mut() else {
            return;
        };

        match receiver.try_recv() {
            Ok(snapshot) => {
                self.pending_load = None;
                self.apply_loaded_snapshot(snapshot);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                warn!("⚠️ Startup load ended without a result, keeping the empty form");
                self.pending_load = None;
                self.ui.finish_loading();
            }
        }
    }

    /// Install the loaded snapshot. Stored values replace whatever the form holds.
    pub fn apply_loaded_snapshot(&mut self, snapshot: Snapshot) {
        info!("📊 Applying loaded snapshot to the form");
        self.store.replace(snapshot);
        self.ui.finish_loading();
    }

    /// Save the current state in the background.
    /// Nothing is saved until the startup load has been applied.
    pub fn persist_changes(&self) {
        if self.ui.loading {
            debug!("⏳ Startup load still pending, not saving");
            return;
        }
        self.backend.save_snapshot(self.store.snapshot());
    }
}
