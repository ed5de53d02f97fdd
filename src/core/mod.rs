/// Core functionality modules
///
/// Requests, their outcomes, and the desk that turns one into the other.

pub mod desk;
pub mod outcome;
pub mod request;

pub use desk::Desk;
pub use outcome::Outcome;
pub use request::{MenuChoice, Request};
