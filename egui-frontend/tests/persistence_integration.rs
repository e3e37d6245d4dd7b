//! Integration tests for the save/load cycle through the `Backend` facade.
//!
//! Each test uses its own temporary data directory. A "restart" is modeled by
//! dropping the backend (which flushes pending saves) and opening a new one on
//! the same directory.

use milk_tracker_egui::backend::config::StorageConfig;
use milk_tracker_egui::backend::domain::RecordStore;
use milk_tracker_egui::backend::Backend;
use shared::{MilkSource, Snapshot, DAYS_IN_MONTH};
use tempfile::TempDir;

fn start_backend(temp_dir: &TempDir) -> Backend {
    Backend::with_config(StorageConfig::in_directory(temp_dir.path())).expect("Backend should start")
}

#[test]
fn test_first_start_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let backend = start_backend(&temp_dir);

    let snapshot = backend.load_snapshot_blocking();

    assert_eq!(snapshot, Snapshot::default());
    assert!(backend.config().database_path().exists());
}

#[test]
fn test_state_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    let mut store = RecordStore::new();
    store.set_price(MilkSource::Cow, "10");
    store.set_price(MilkSource::Buffalo, "5");
    store.set_quantity(0, MilkSource::Cow, "2");
    store.set_quantity(0, MilkSource::Buffalo, "3");

    {
        let backend = start_backend(&temp_dir);
        backend.save_snapshot(store.snapshot());
    }

    let backend = start_backend(&temp_dir);
    let reloaded = RecordStore::from_snapshot(backend.load_snapshot_blocking());

    assert_eq!(reloaded.snapshot(), store.snapshot());
    assert_eq!(reloaded.day_total(0), 35.0);
    let totals = reloaded.totals();
    assert_eq!(totals.total_a, 20.0);
    assert_eq!(totals.total_b, 15.0);
    assert_eq!(totals.grand_total, 35.0);
}

#[test]
fn test_day_fifteen_update_reloads_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let backend = start_backend(&temp_dir);

    let mut store = RecordStore::from_snapshot(backend.load_snapshot_blocking());
    for index in 0..DAYS_IN_MONTH {
        store.set_quantity(index, MilkSource::Cow, format!("{}", index + 1));
    }
    backend.save_snapshot(store.snapshot());
    let before = store.snapshot();

    store.set_quantity(14, MilkSource::Buffalo, "4.5");
    backend.save_snapshot(store.snapshot());
    backend.flush_blocking();

    let reloaded = backend.load_snapshot_blocking();

    assert_eq!(reloaded.entries.len(), DAYS_IN_MONTH);
    assert_eq!(reloaded.entries[14].day, 15);
    assert_eq!(reloaded.entries[14].quantity_b, "4.5");
    assert_eq!(reloaded.entries[14].quantity_a, "15");
    for (index, (after, original)) in reloaded.entries.iter().zip(before.entries.iter()).enumerate() {
        if index != 14 {
            assert_eq!(after, original, "day {} should be unchanged", index + 1);
        }
    }
}

#[test]
fn test_rapid_saves_keep_last_state() {
    let temp_dir = TempDir::new().unwrap();
    let backend = start_backend(&temp_dir);

    let mut store = RecordStore::new();
    for keystroke in ["1", "12", "12.", "12.5"] {
        store.set_price(MilkSource::Buffalo, keystroke);
        backend.save_snapshot(store.snapshot());
    }
    backend.flush_blocking();

    let reloaded = backend.load_snapshot_blocking();
    assert_eq!(reloaded.prices.price_b, "12.5");
}

#[test]
fn test_unusable_data_directory_degrades_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let backend = Backend::with_config(StorageConfig::in_directory(&blocker)).expect("Backend should start");

    let mut snapshot = Snapshot::default();
    snapshot.prices.set_price(MilkSource::Cow, "10".to_string());
    backend.save_snapshot(snapshot);
    backend.flush_blocking();

    assert_eq!(backend.load_snapshot_blocking(), Snapshot::default());
}
