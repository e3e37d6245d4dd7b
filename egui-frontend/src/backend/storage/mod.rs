//! # Storage Module
//!
//! Persistence backends for the milk tracker. The domain layer only sees the
//! `SnapshotStorage` trait; SQLite is the one implementation.

pub mod error;
pub mod sqlite;
pub mod traits;

pub use error::{PersistenceError, PersistenceResult};
pub use sqlite::{ConnectionState, DbConnection, SnapshotRepository};
pub use traits::SnapshotStorage;
