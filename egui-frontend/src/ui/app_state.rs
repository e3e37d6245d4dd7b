//! # App State Module
//!
//! The central application struct and its initialization.
//!
//! ## Key Types:
//! - `MilkTrackerApp` - owns the backend, the record store and UI state
//!
//! ## State Management:
//! The record store is the single source of truth for the form. The backend
//! is only asked to load once at startup and to save after each edit.

use log::info;
use shared::Snapshot;
use tokio::sync::oneshot;

use crate::backend::domain::RecordStore;
use crate::backend::Backend;
use crate::ui::components::styling::setup_milk_tracker_style;
use crate::ui::state::UIState;

/// Main application struct for the egui milk tracker
pub struct MilkTrackerApp {
    pub backend: Backend,

    /// Prices and the 31 day entries being edited
    pub store: RecordStore,

    pub ui: UIState,

    /// Startup load still waiting to be applied
    pub pending_load: Option<oneshot::Receiver<Snapshot>>,
}

impl MilkTrackerApp {
    /// Create the app, connect the backend and start loading saved data
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing MilkTrackerApp");

        setup_milk_tracker_style(&cc.egui_ctx);

        let backend = Backend::new()?;
        Ok(Self::with_backend(backend, cc.egui_ctx.clone()))
    }

    /// Build the app around an existing backend. The form starts empty and the
    /// saved snapshot is patched in when the background load resolves.
    pub fn with_backend(backend: Backend, ctx: egui::Context) -> Self {
        let pending_load = backend.load_snapshot_in_background(move || ctx.request_repaint());

        Self {
            backend,
            store: RecordStore::new(),
            ui: UIState::new(),
            pending_load: Some(pending_load),
        }
    }
}
