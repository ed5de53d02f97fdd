/// Requests the desk can execute, and the menu entries that produce them

use crate::db::{NewBooking, NewFlight, NewPassenger};
use std::fmt;

/// One desk operation with all of its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    AddFlight(NewFlight),
    AddPassenger(NewPassenger),
    BookFlight(NewBooking),
    ViewFlights,
    ViewPassengers,
    ViewBookings,
    SearchFlight { flight_number: String },
    DeleteFlight { flight_id: i64 },
}

impl Request {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Request::AddFlight(_) => "add_flight",
            Request::AddPassenger(_) => "add_passenger",
            Request::BookFlight(_) => "book_flight",
            Request::ViewFlights => "view_flights",
            Request::ViewPassengers => "view_passengers",
            Request::ViewBookings => "view_bookings",
            Request::SearchFlight { .. } => "search_flight",
            Request::DeleteFlight { .. } => "delete_flight",
        }
    }
}

/// Numbered entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddFlight,
    AddPassenger,
    BookFlight,
    ViewFlights,
    ViewPassengers,
    ViewBookings,
    SearchFlight,
    DeleteFlight,
    Exit,
}

impl MenuChoice {
    /// Menu order
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddFlight,
        MenuChoice::AddPassenger,
        MenuChoice::BookFlight,
        MenuChoice::ViewFlights,
        MenuChoice::ViewPassengers,
        MenuChoice::ViewBookings,
        MenuChoice::SearchFlight,
        MenuChoice::DeleteFlight,
        MenuChoice::Exit,
    ];

    /// Parse what the user typed at "Enter your choice"
    ///
    /// Surrounding whitespace is ignored; only the bare digits 1-9 match,
    /// so "+1" or "01" are not choices.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.number().to_string() == trimmed)
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddFlight => "Add Flight",
            MenuChoice::AddPassenger => "Add Passenger",
            MenuChoice::BookFlight => "Book Flight",
            MenuChoice::ViewFlights => "View Flights",
            MenuChoice::ViewPassengers => "View Passengers",
            MenuChoice::ViewBookings => "View Bookings",
            MenuChoice::SearchFlight => "Search Flight",
            MenuChoice::DeleteFlight => "Delete Flight",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
