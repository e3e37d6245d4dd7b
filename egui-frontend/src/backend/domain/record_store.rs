//! # Record Store
//!
//! The application's form state: two prices and the 31 day entries.
//!
//! All inputs are accepted as-is. Text that is not a number is kept so the
//! user sees what they typed; it simply counts as zero in the totals.

use log::{debug, warn};
use shared::{DayEntry, MilkSource, MonthlyTotals, PriceSettings, Snapshot, DAYS_IN_MONTH};

use super::totals;

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    snapshot: Snapshot,
}

impl RecordStore {
    /// Create a store with empty prices and 31 empty days
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a loaded snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: snapshot.normalized(),
        }
    }

    pub fn prices(&self) -> &PriceSettings {
        &self.snapshot.prices
    }

    pub fn entries(&self) -> &[DayEntry] {
        &self.snapshot.entries
    }

    /// Replace the price text for a source
    pub fn set_price(&mut self, source: MilkSource, text: impl Into<String>) {
        let text = text.into();
        debug!("✏️ {} price set to {:?}", source, text);
        self.snapshot.prices.set_price(source, text);
    }

    /// Replace a quantity by 0-based day index.
    /// Returns false and changes nothing if the index is outside the month.
    pub fn set_quantity(&mut self, day_index: usize, source: MilkSource, text: impl Into<String>) -> bool {
        let Some(entry) = self.snapshot.entries.get_mut(day_index) else {
            warn!(
                "⚠️ Ignoring {} quantity for day index {} (month has {} days)",
                source, day_index, DAYS_IN_MONTH
            );
            return false;
        };

        let text = text.into();
        debug!("✏️ Day {} {} quantity set to {:?}", entry.day, source, text);
        entry.set_quantity(source, text);
        true
    }

    /// Install a snapshot wholesale, dropping the current values
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot.normalized();
    }

    /// Current state as a value ready to be saved
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    pub fn day_total(&self, day_index: usize) -> f64 {
        self.snapshot
            .entries
            .get(day_index)
            .map(|entry| totals::day_total(entry, &self.snapshot.prices))
            .unwrap_or(0.0)
    }

    pub fn totals(&self) -> MonthlyTotals {
        totals::monthly_totals(&self.snapshot)
    }
}
