/// Error types for airport-desk
///
/// Rejections (duplicate numbers, unknown ids, bad input) and real failures
/// (database, terminal, config) share one enum; `is_rejection` tells them apart.

use thiserror::Error;

/// Everything a desk operation or startup step can fail with
#[derive(Error, Debug)]
pub enum DeskError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (terminal, file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Flight number already taken
    #[error("Flight number already exists: {0}")]
    DuplicateFlightNumber(String),

    /// Passport number already registered
    #[error("Passport number already exists: {0}")]
    DuplicatePassport(String),

    /// No flight matches the given id or number
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    /// No passenger with the given id
    #[error("Passenger not found: {0}")]
    PassengerNotFound(i64),

    /// Text that should have been a numeric id
    #[error("Invalid ID: {0}")]
    InvalidId(String),
}

/// Result type alias for airport-desk operations
pub type Result<T> = std::result::Result<T, DeskError>;

impl DeskError {
    /// The line printed under the menu for this error
    pub fn user_message(&self) -> String {
        match self {
            DeskError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            DeskError::Io(e) => {
                format!("Terminal or file system error. Details: {}", e)
            }
            DeskError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            DeskError::DuplicateFlightNumber(_) => "Error: Flight number already exists.".to_string(),
            DeskError::DuplicatePassport(_) => "Error: Passport number already exists.".to_string(),
            DeskError::FlightNotFound(_) => "Flight not found.".to_string(),
            DeskError::PassengerNotFound(id) => format!("Passenger {} not found.", id),
            DeskError::InvalidId(raw) => {
                format!("Invalid ID: '{}'. Please enter a number.", raw)
            }
        }
    }

    /// Expected refusals (duplicates, unknown ids, bad input) as opposed to failures
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DeskError::DuplicateFlightNumber(_)
                | DeskError::DuplicatePassport(_)
                | DeskError::FlightNotFound(_)
                | DeskError::PassengerNotFound(_)
                | DeskError::InvalidId(_)
        )
    }

    /// True when the underlying database error is a UNIQUE constraint failure
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
    }
}
