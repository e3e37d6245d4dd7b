//! # SQLite Storage Module
//!
//! The embedded SQLite database used as a key-value store for snapshots.
//!
//! ## Components
//!
//! - **connection.rs** - lazily opened connection pool and schema setup
//! - **snapshot_repository.rs** - get/put of whole snapshots by key

pub mod connection;
pub mod snapshot_repository;

pub use connection::{ConnectionState, DbConnection};
pub use snapshot_repository::SnapshotRepository;
