//! # UI Components Module
//!
//! ## Module Organization:
//! - `data_loading` - Startup load and save hand-off to the backend
//! - `styling` - Global style, card frame and color constants
//! - `header` - Page title and loading indicator
//! - `price_panel` - Per-liter price inputs
//! - `entries_table` - The 31 day rows with per-row totals
//! - `summary_panel` - Monthly totals

pub mod data_loading;
pub mod entries_table;
pub mod header;
pub mod price_panel;
pub mod styling;
pub mod summary_panel;

pub use entries_table::render_entries_table;
pub use header::APP_TITLE;
pub use styling::setup_milk_tracker_style;
pub use summary_panel::{format_amount, render_summary_panel};
