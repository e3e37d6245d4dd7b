//! # UI Module
//!
//! The egui side of the milk tracker: the application struct, its state,
//! and the components that render the form.

pub mod app_implementation;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::MilkTrackerApp;
pub use components::*;
