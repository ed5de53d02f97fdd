/// Data models for database entities
///
/// Row structs map to the Flights / Passengers / Bookings tables via sqlx.
/// The `New*` structs are the inputs for inserts.

use sqlx::FromRow;

/// A scheduled flight
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Flight {
    #[sqlx(rename = "flight_id")]
    pub id: i64,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String, // free text, "YYYY-MM-DD HH:MM" by convention
    pub arrival_time: String,
}

/// A registered passenger
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Passenger {
    #[sqlx(rename = "passenger_id")]
    pub id: i64,
    pub name: String,
    pub passport_number: String,
    pub nationality: String,
}

/// A booking row as stored
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Booking {
    #[sqlx(rename = "booking_id")]
    pub id: i64,
    pub flight_id: Option<i64>,
    pub passenger_id: Option<i64>,
    pub booking_date: String, // "%Y-%m-%d %H:%M:%S", local time
}

/// A booking joined with its flight and passenger, for listing
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookingDetail {
    pub booking_id: i64,
    pub flight_number: String,
    pub passenger_name: String,
    pub booking_date: String,
}

/// Input for adding a flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
}

/// Input for registering a passenger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPassenger {
    pub name: String,
    pub passport_number: String,
    pub nationality: String,
}

/// Input for booking a passenger onto a flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBooking {
    pub flight_id: i64,
    pub passenger_id: i64,
}

/// Format used for `booking_date`
pub const BOOKING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Booking {
    /// Parse the stored booking date back into a timestamp
    pub fn booked_at(&self) -> Option<chrono::NaiveDateTime> {
        chrono::NaiveDateTime::parse_from_str(&self.booking_date, BOOKING_DATE_FORMAT).ok()
    }
}
