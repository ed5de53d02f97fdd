/// SQL query functions for database operations
///
/// One method per desk operation. Every statement is parameterized.

use crate::db::models::*;
use crate::db::Database;
use crate::error::{DeskError, Result};
use sqlx::Row;

impl Database {
    /// Insert a flight
    ///
    /// # Returns
    /// * `Ok(i64)` - The new flight_id
    /// * `Err(DeskError::DuplicateFlightNumber)` - If the number is already taken
    pub async fn insert_flight(&self, flight: &NewFlight) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Flights (flight_number, origin, destination, departure_time, arrival_time)
            VALUES (?, ?, ?, ?, ?)
            RETURNING flight_id
            "#,
        )
        .bind(&flight.flight_number)
        .bind(&flight.origin)
        .bind(&flight.destination)
        .bind(&flight.departure_time)
        .bind(&flight.arrival_time)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            if DeskError::is_unique_violation(&e) {
                DeskError::DuplicateFlightNumber(flight.flight_number.clone())
            } else {
                DeskError::Database(e)
            }
        })?;

        Ok(result.get(0))
    }

    /// All flights, oldest id first
    pub async fn list_flights(&self) -> Result<Vec<Flight>> {
        let flights = sqlx::query_as::<_, Flight>("SELECT * FROM Flights ORDER BY flight_id")
            .fetch_all(self.pool())
            .await?;

        Ok(flights)
    }

    /// Look a flight up by its number
    pub async fn find_flight_by_number(&self, flight_number: &str) -> Result<Option<Flight>> {
        let flight = sqlx::query_as::<_, Flight>("SELECT * FROM Flights WHERE flight_number = ?")
            .bind(flight_number)
            .fetch_optional(self.pool())
            .await?;

        Ok(flight)
    }

    /// Get flight by ID
    pub async fn get_flight(&self, id: i64) -> Result<Option<Flight>> {
        let flight = sqlx::query_as::<_, Flight>("SELECT * FROM Flights WHERE flight_id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(flight)
    }

    /// Delete a flight together with its bookings
    ///
    /// # Returns
    /// * `Ok(Some(n))` - Flight removed, along with `n` bookings that pointed at it
    /// * `Ok(None)` - No such flight; nothing was touched
    pub async fn delete_flight(&self, id: i64) -> Result<Option<u64>> {
        let mut tx = self.pool().begin().await?;

        let bookings = sqlx::query("DELETE FROM Bookings WHERE flight_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let flights = sqlx::query("DELETE FROM Flights WHERE flight_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if flights != 1 {
            // Dropping the transaction would roll back too, but be explicit
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(bookings))
    }

    /// Insert a passenger
    ///
    /// # Returns
    /// * `Ok(i64)` - The new passenger_id
    /// * `Err(DeskError::DuplicatePassport)` - If the passport is already registered
    pub async fn insert_passenger(&self, passenger: &NewPassenger) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Passengers (name, passport_number, nationality)
            VALUES (?, ?, ?)
            RETURNING passenger_id
            "#,
        )
        .bind(&passenger.name)
        .bind(&passenger.passport_number)
        .bind(&passenger.nationality)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            if DeskError::is_unique_violation(&e) {
                DeskError::DuplicatePassport(passenger.passport_number.clone())
            } else {
                DeskError::Database(e)
            }
        })?;

        Ok(result.get(0))
    }

    /// All passengers, oldest id first
    pub async fn list_passengers(&self) -> Result<Vec<Passenger>> {
        let passengers =
            sqlx::query_as::<_, Passenger>("SELECT * FROM Passengers ORDER BY passenger_id")
                .fetch_all(self.pool())
                .await?;

        Ok(passengers)
    }

    /// Get passenger by ID
    pub async fn get_passenger(&self, id: i64) -> Result<Option<Passenger>> {
        let passenger =
            sqlx::query_as::<_, Passenger>("SELECT * FROM Passengers WHERE passenger_id = ?")
                .bind(id)
                .fetch_optional(self.pool())
                .await?;

        Ok(passenger)
    }

    /// Insert a booking row
    ///
    /// Does not check the references itself; with foreign keys on, SQLite
    /// rejects ids that don't exist.
    pub async fn insert_booking(&self, booking: NewBooking, booking_date: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Bookings (flight_id, passenger_id, booking_date)
            VALUES (?, ?, ?)
            RETURNING booking_id
            "#,
        )
        .bind(booking.flight_id)
        .bind(booking.passenger_id)
        .bind(booking_date)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get booking by ID
    pub async fn get_booking(&self, id: i64) -> Result<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM Bookings WHERE booking_id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(booking)
    }

    /// Bookings joined with flight number and passenger name
    pub async fn list_bookings(&self) -> Result<Vec<BookingDetail>> {
        let bookings = sqlx::query_as::<_, BookingDetail>(
            r#"
            SELECT b.booking_id, f.flight_number, p.name AS passenger_name, b.booking_date
            FROM Bookings b
            JOIN Flights f ON b.flight_id = f.flight_id
            JOIN Passengers p ON b.passenger_id = p.passenger_id
            ORDER BY b.booking_id
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(bookings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(number: &str) -> NewFlight {
        NewFlight {
            flight_number: number.to_string(),
            origin: "JFK".to_string(),
            destination: "LHR".to_string(),
            departure_time: "2025-12-01 08:00".to_string(),
            arrival_time: "2025-12-01 20:00".to_string(),
        }
    }

    fn passenger(passport: &str) -> NewPassenger {
        NewPassenger {
            name: "Ada Lovelace".to_string(),
            passport_number: passport.to_string(),
            nationality: "British".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_flight() {
        let db = Database::new_test().await.unwrap();

        let id = db.insert_flight(&flight("BA117")).await.unwrap();
        assert!(id > 0);

        let stored = db.get_flight(id).await.unwrap().unwrap();
        assert_eq!(stored.flight_number, "BA117");
        assert_eq!(stored.origin, "JFK");
        assert_eq!(stored.arrival_time, "2025-12-01 20:00");
    }

    #[tokio::test]
    async fn test_duplicate_flight_number() {
        let db = Database::new_test().await.unwrap();

        db.insert_flight(&flight("BA117")).await.unwrap();

        let mut other = flight("BA117");
        other.origin = "SFO".to_string();
        match db.insert_flight(&other).await {
            Err(DeskError::DuplicateFlightNumber(number)) => assert_eq!(number, "BA117"),
            other => panic!("Expected DuplicateFlightNumber, got {:?}", other),
        }

        let flights = db.list_flights().await.unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].origin, "JFK");
    }

    #[tokio::test]
    async fn test_find_flight_by_number() {
        let db = Database::new_test().await.unwrap();
        db.insert_flight(&flight("LH400")).await.unwrap();

        assert!(db.find_flight_by_number("LH400").await.unwrap().is_some());
        assert!(db.find_flight_by_number("lh400").await.unwrap().is_none());
        assert!(db.find_flight_by_number("XX999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_passport() {
        let db = Database::new_test().await.unwrap();

        db.insert_passenger(&passenger("X123456")).await.unwrap();

        let result = db.insert_passenger(&passenger("X123456")).await;
        assert!(matches!(result, Err(DeskError::DuplicatePassport(_))));

        assert_eq!(db.list_passengers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_booking_with_unknown_ids_rejected_by_sqlite() {
        let db = Database::new_test().await.unwrap();

        let result = db
            .insert_booking(
                NewBooking {
                    flight_id: 42,
                    passenger_id: 42,
                },
                "2025-11-25 10:00:00",
            )
            .await;

        assert!(matches!(result, Err(DeskError::Database(_))));
        assert_eq!(db.stats().await.unwrap().total_bookings, 0);
    }

    #[tokio::test]
    async fn test_list_bookings_joins_names() {
        let db = Database::new_test().await.unwrap();

        let flight_id = db.insert_flight(&flight("AF22")).await.unwrap();
        let passenger_id = db.insert_passenger(&passenger("P0001")).await.unwrap();
        db.insert_booking(
            NewBooking {
                flight_id,
                passenger_id,
            },
            "2025-11-25 10:00:00",
        )
        .await
        .unwrap();

        let bookings = db.list_bookings().await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].flight_number, "AF22");
        assert_eq!(bookings[0].passenger_name, "Ada Lovelace");
        assert_eq!(bookings[0].booking_date, "2025-11-25 10:00:00");
    }

    #[tokio::test]
    async fn test_delete_flight_removes_its_bookings() {
        let db = Database::new_test().await.unwrap();

        let doomed = db.insert_flight(&flight("DL1")).await.unwrap();
        let kept = db.insert_flight(&flight("DL2")).await.unwrap();
        let passenger_id = db.insert_passenger(&passenger("P0002")).await.unwrap();

        for flight_id in [doomed, doomed, kept] {
            db.insert_booking(
                NewBooking {
                    flight_id,
                    passenger_id,
                },
                "2025-11-25 10:00:00",
            )
            .await
            .unwrap();
        }

        let removed = db.delete_flight(doomed).await.unwrap();
        assert_eq!(removed, Some(2));

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.total_flights, 1);
        assert_eq!(stats.total_bookings, 1);
        assert!(db.get_flight(kept).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_flight() {
        let db = Database::new_test().await.unwrap();
        db.insert_flight(&flight("QF1")).await.unwrap();

        let removed = db.delete_flight(999).await.unwrap();
        assert_eq!(removed, None);
        assert_eq!(db.stats().await.unwrap().total_flights, 1);
    }
}
