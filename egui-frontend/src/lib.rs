//! Monthly milk tracker: record daily cow and buffalo milk quantities for a
//! 31-day month, price them per liter, and keep the record in a local SQLite
//! file between sessions.

pub mod backend;
pub mod ui;
