//! Derived totals. Recomputed from the current state on every read; nothing
//! here is cached or maintained incrementally.

use shared::{to_number, DayEntry, MilkSource, MonthlyTotals, PriceSettings, Snapshot};

/// Amount owed for one source on one day: quantity times price
pub fn source_amount(entry: &DayEntry, prices: &PriceSettings, source: MilkSource) -> f64 {
    to_number(entry.quantity(source)) * to_number(prices.price(source))
}

/// Combined amount for a single day row
pub fn day_total(entry: &DayEntry, prices: &PriceSettings) -> f64 {
    source_amount(entry, prices, MilkSource::Cow) + source_amount(entry, prices, MilkSource::Buffalo)
}

/// Sum the per-day products for each source over the whole month
pub fn monthly_totals(snapshot: &Snapshot) -> MonthlyTotals {
    let sum_for = |source: MilkSource| -> f64 {
        snapshot
            .entries
            .iter()
            .fold(0.0, |total, entry| total + source_amount(entry, &snapshot.prices, source))
    };

    let total_a = sum_for(MilkSource::Cow);
    let total_b = sum_for(MilkSource::Buffalo);

    MonthlyTotals {
        total_a,
        total_b,
        grand_total: total_a + total_b,
    }
}
