use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of day rows in the tracked month. The record never grows or shrinks.
pub const DAYS_IN_MONTH: usize = 31;

/// Key of the single persisted snapshot
pub const SNAPSHOT_ID: &str = "month-data";

/// The two milk sources tracked side by side.
///
/// `Cow` addresses the "A" fields (`priceA`, `quantityA`) and `Buffalo`
/// addresses the "B" fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilkSource {
    Cow,
    Buffalo,
}

impl MilkSource {
    pub const ALL: [MilkSource; 2] = [MilkSource::Cow, MilkSource::Buffalo];

    /// Human-readable label used in the UI
    pub fn label(&self) -> &'static str {
        match self {
            MilkSource::Cow => "Cow",
            MilkSource::Buffalo => "Buffalo",
        }
    }
}

impl fmt::Display for MilkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One day's quantities in liters, kept as the raw text the user typed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    /// Day of month, 1..=31. Fixed once created.
    #[serde(default, deserialize_with = "lenient_day")]
    pub day: u32,
    /// Cow milk quantity text
    #[serde(default, deserialize_with = "lenient_text")]
    pub quantity_a: String,
    /// Buffalo milk quantity text
    #[serde(default, deserialize_with = "lenient_text")]
    pub quantity_b: String,
}

impl DayEntry {
    /// Create an empty entry for the given day
    pub fn new(day: u32) -> Self {
        Self {
            day,
            quantity_a: String::new(),
            quantity_b: String::new(),
        }
    }

    pub fn quantity(&self, source: MilkSource) -> &str {
        match source {
            MilkSource::Cow => &self.quantity_a,
            MilkSource::Buffalo => &self.quantity_b,
        }
    }

    pub fn set_quantity(&mut self, source: MilkSource, text: String) {
        match source {
            MilkSource::Cow => self.quantity_a = text,
            MilkSource::Buffalo => self.quantity_b = text,
        }
    }
}

/// Per-liter prices for both sources, kept as raw text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSettings {
    #[serde(default, deserialize_with = "lenient_text")]
    pub price_a: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub price_b: String,
}

impl PriceSettings {
    pub fn price(&self, source: MilkSource) -> &str {
        match source {
            MilkSource::Cow => &self.price_a,
            MilkSource::Buffalo => &self.price_b,
        }
    }

    pub fn set_price(&mut self, source: MilkSource, text: String) {
        match source {
            MilkSource::Cow => self.price_a = text,
            MilkSource::Buffalo => self.price_b = text,
        }
    }
}

/// The full persisted unit: prices plus the 31 day entries.
///
/// Serialized layout:
/// `{ "id": "month-data", "priceA": "..", "priceB": "..", "entries": [{ "day", "quantityA", "quantityB" }, ..] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "default_snapshot_id")]
    pub id: String,
    #[serde(flatten)]
    pub prices: PriceSettings,
    #[serde(default = "default_entries", deserialize_with = "lenient_entries")]
    pub entries: Vec<DayEntry>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            id: default_snapshot_id(),
            prices: PriceSettings::default(),
            entries: default_entries(),
        }
    }
}

impl Snapshot {
    /// True when the entries are exactly days 1..=31 in order
    pub fn has_valid_entries(&self) -> bool {
        self.entries.len() == DAYS_IN_MONTH
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(index, entry)| entry.day as usize == index + 1)
    }

    /// Rebuild the entry list as days 1..=31, keeping the quantities of
    /// stored entries whose day is in range. The first entry for a day wins.
    pub fn normalized(self) -> Self {
        if self.has_valid_entries() {
            return Self {
                id: default_snapshot_id(),
                ..self
            };
        }

        let prices = self.prices;
        let mut entries = default_entries();
        let mut seen = [false; DAYS_IN_MONTH];
        for entry in self.entries {
            let day = entry.day as usize;
            if (1..=DAYS_IN_MONTH).contains(&day) && !seen[day - 1] {
                seen[day - 1] = true;
                entries[day - 1].quantity_a = entry.quantity_a;
                entries[day - 1].quantity_b = entry.quantity_b;
            }
        }

        Self {
            id: default_snapshot_id(),
            prices,
            entries,
        }
    }
}

/// Monthly totals per source and combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub total_a: f64,
    pub total_b: f64,
    pub grand_total: f64,
}

impl MonthlyTotals {
    pub fn total(&self, source: MilkSource) -> f64 {
        match source {
            MilkSource::Cow => self.total_a,
            MilkSource::Buffalo => self.total_b,
        }
    }
}

/// Coerce user text to a number. Empty, non-numeric and non-finite text is 0.
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn default_snapshot_id() -> String {
    SNAPSHOT_ID.to_string()
}

fn default_entries() -> Vec<DayEntry> {
    (1..=DAYS_IN_MONTH as u32).map(DayEntry::new).collect()
}

/// Accepts a string, a JSON number or null for a text field
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// Accepts a whole, non-negative day as a JSON number or numeric text
fn lenient_day<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DayValue {
        Number(serde_json::Number),
        Text(String),
    }

    let day = match Option::<DayValue>::deserialize(deserializer)? {
        None => return Ok(0),
        Some(DayValue::Number(number)) => number.as_u64().or_else(|| number.as_f64().and_then(whole_day)),
        Some(DayValue::Text(text)) => text.trim().parse::<f64>().ok().and_then(whole_day),
    };

    day.and_then(|day| u32::try_from(day).ok())
        .ok_or_else(|| serde::de::Error::custom("day must be a whole non-negative number"))
}

fn whole_day(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as u64)
}

/// Decodes the entry list one entry at a time. Entries that cannot be read
/// are skipped so the rest of the month survives.
fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<DayEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(items)) => items,
        Some(_) => {
            warn!("⚠️ Stored entries are not a list, using empty days");
            return Ok(default_entries());
        }
        None => return Ok(default_entries()),
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match serde_json::from_value::<DayEntry>(item) {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!("⚠️ Skipping unreadable stored entry #{}: {}", position, error);
                None
            }
        })
        .collect())
}
