//! # UI State Module
//!
//! General UI state that is not part of the saved record.
//!
//! Persistence failures are only logged; nothing here displays them.

/// General UI state for loading indicators
#[derive(Debug, Default)]
pub struct UIState {
    /// Whether the startup load is still in flight
    pub loading: bool,
}

impl UIState {
    /// Create new UI state with default values
    pub fn new() -> Self {
        Self {
            loading: true, // Start with loading=true until saved data arrives
        }
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}
