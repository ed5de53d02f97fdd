/// Database module for airport-desk
///
/// Handles all database operations using SQLite and sqlx.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::{Database, DatabaseStats};
pub use models::*;
