/// Results of a successful desk operation and how they look on screen

use crate::db::{BookingDetail, Flight, Passenger};
use std::fmt;

/// What a request produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    FlightAdded { flight_id: i64 },
    PassengerAdded { passenger_id: i64 },
    FlightBooked { booking_id: i64, booking_date: String },
    Flights(Vec<Flight>),
    Passengers(Vec<Passenger>),
    Bookings(Vec<BookingDetail>),
    FlightFound(Flight),
    FlightDeleted { flight_id: i64, bookings_removed: u64 },
}

pub fn format_flight(flight: &Flight) -> String {
    format!(
        "ID: {}, Number: {}, From: {} To: {}, Departure: {}, Arrival: {}",
        flight.id,
        flight.flight_number,
        flight.origin,
        flight.destination,
        flight.departure_time,
        flight.arrival_time
    )
}

pub fn format_passenger(passenger: &Passenger) -> String {
    format!(
        "ID: {}, Name: {}, Passport: {}, Nationality: {}",
        passenger.id, passenger.name, passenger.passport_number, passenger.nationality
    )
}

pub fn format_booking(booking: &BookingDetail) -> String {
    format!(
        "Booking ID: {}, Flight: {}, Passenger: {}, Date: {}",
        booking.booking_id, booking.flight_number, booking.passenger_name, booking.booking_date
    )
}

// Header plus one line per row, or the "none" line for an empty table
fn write_listing<T>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    empty: &str,
    rows: &[T],
    line: fn(&T) -> String,
) -> fmt::Result {
    if rows.is_empty() {
        return write!(f, "{}", empty);
    }

    write!(f, "\n--- {} ---", title)?;
    for row in rows {
        write!(f, "\n{}", line(row))?;
    }
    Ok(())
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::FlightAdded { flight_id } => {
                write!(f, "Flight added successfully! (ID: {})", flight_id)
            }
            Outcome::PassengerAdded { passenger_id } => {
                write!(f, "Passenger added successfully! (ID: {})", passenger_id)
            }
            Outcome::FlightBooked {
                booking_id,
                booking_date,
            } => write!(
                f,
                "Flight booked successfully! (Booking ID: {}, Date: {})",
                booking_id, booking_date
            ),
            Outcome::Flights(flights) => write_listing(
                f,
                "Flights",
                "No flights available.",
                flights,
                format_flight,
            ),
            Outcome::Passengers(passengers) => write_listing(
                f,
                "Passengers",
                "No passengers available.",
                passengers,
                format_passenger,
            ),
            Outcome::Bookings(bookings) => write_listing(
                f,
                "Bookings",
                "No bookings available.",
                bookings,
                format_booking,
            ),
            Outcome::FlightFound(flight) => {
                write!(f, "\nFlight found - {}", format_flight(flight))
            }
            Outcome::FlightDeleted {
                bookings_removed: 0,
                ..
            } => write!(f, "Flight deleted successfully!"),
            Outcome::FlightDeleted {
                bookings_removed, ..
            } => write!(
                f,
                "Flight deleted successfully! ({} booking(s) removed)",
                bookings_removed
            ),
        }
    }
}
