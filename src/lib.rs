/// airport-desk library
///
/// Flights, passengers and bookings kept in SQLite, driven from a terminal menu.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod error;

// Re-exports for convenience
pub use config::Config;
pub use self::core::{Desk, Outcome, Request};
pub use db::Database;
pub use error::{DeskError, Result};
