//! UI-only state, kept apart from the record store.

pub mod ui_state;

pub use ui_state::UIState;
