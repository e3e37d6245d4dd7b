//! # Domain Module
//!
//! Form state, derived totals, and the persistence policy around them.

pub mod persistence_bridge;
pub mod record_store;
pub mod save_queue;
pub mod totals;

pub use persistence_bridge::PersistenceBridge;
pub use record_store::RecordStore;
pub use save_queue::SaveQueue;
