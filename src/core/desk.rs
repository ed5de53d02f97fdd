// The desk: executes one request against the database and reports what happened.
//
// Duplicates and unknown ids come back as DeskError rejections; the caller
// decides how to show them.

use crate::core::{Outcome, Request};
use crate::db::{Database, NewBooking, NewFlight, NewPassenger, BOOKING_DATE_FORMAT};
use crate::error::{DeskError, Result};
use chrono::Local;
use std::sync::Arc;

pub struct Desk {
    db: Arc<Database>,
}

impl Desk {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Run a single request to completion
    pub async fn execute(&self, request: Request) -> Result<Outcome> {
        tracing::debug!(request = request.name(), "executing");

        match request {
            Request::AddFlight(flight) => self.add_flight(&flight).await,
            Request::AddPassenger(passenger) => self.add_passenger(&passenger).await,
            Request::BookFlight(booking) => self.book_flight(booking).await,
            Request::ViewFlights => Ok(Outcome::Flights(self.db.list_flights().await?)),
            Request::ViewPassengers => Ok(Outcome::Passengers(self.db.list_passengers().await?)),
            Request::ViewBookings => Ok(Outcome::Bookings(self.db.list_bookings().await?)),
            Request::SearchFlight { flight_number } => self.search_flight(&flight_number).await,
            Request::DeleteFlight { flight_id } => self.delete_flight(flight_id).await,
        }
    }

    pub async fn add_flight(&self, flight: &NewFlight) -> Result<Outcome> {
        let flight_id = self.db.insert_flight(flight).await?;
        tracing::info!(flight_id, flight_number = %flight.flight_number, "flight added");

        Ok(Outcome::FlightAdded { flight_id })
    }

    pub async fn add_passenger(&self, passenger: &NewPassenger) -> Result<Outcome> {
        let passenger_id = self.db.insert_passenger(passenger).await?;
        tracing::info!(passenger_id, "passenger added");

        Ok(Outcome::PassengerAdded { passenger_id })
    }

    // Both ends of the booking have to exist; nothing is written otherwise.
    pub async fn book_flight(&self, booking: NewBooking) -> Result<Outcome> {
        if self.db.get_flight(booking.flight_id).await?.is_none() {
            return Err(DeskError::FlightNotFound(booking.flight_id.to_string()));
        }

        if self.db.get_passenger(booking.passenger_id).await?.is_none() {
            return Err(DeskError::PassengerNotFound(booking.passenger_id));
        }

        let booking_date = Local::now().format(BOOKING_DATE_FORMAT).to_string();
        let booking_id = self.db.insert_booking(booking, &booking_date).await?;
        tracing::info!(
            booking_id,
            flight_id = booking.flight_id,
            passenger_id = booking.passenger_id,
            "flight booked"
        );

        Ok(Outcome::FlightBooked {
            booking_id,
            booking_date,
        })
    }

    pub async fn search_flight(&self, flight_number: &str) -> Result<Outcome> {
        match self.db.find_flight_by_number(flight_number).await? {
            Some(flight) => Ok(Outcome::FlightFound(flight)),
            None => Err(DeskError::FlightNotFound(flight_number.to_string())),
        }
    }

    pub async fn delete_flight(&self, flight_id: i64) -> Result<Outcome> {
        match self.db.delete_flight(flight_id).await? {
            Some(bookings_removed) => {
                tracing::info!(flight_id, bookings_removed, "flight deleted");
                Ok(Outcome::FlightDeleted {
                    flight_id,
                    bookings_removed,
                })
            }
            None => Err(DeskError::FlightNotFound(flight_id.to_string())),
        }
    }
}
