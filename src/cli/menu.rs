// Interactive main menu
//
// One state: show the menu, read a choice, run it, come back. "9" or end of
// input leaves the loop. Nothing a user types can take the loop down; only a
// broken terminal does.

use crate::cli::Prompter;
use crate::core::{Desk, MenuChoice, Outcome, Request};
use crate::db::{NewBooking, NewFlight, NewPassenger};
use crate::error::Result;
use std::io::{BufRead, Write};

const TITLE: &str = "\n--- Airport Management System ---";

enum Step {
    Execute(Request),
    Exit,
}

pub struct Menu<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
        }
    }

    /// Loop until the user exits or input runs out
    pub async fn run(&mut self, desk: &Desk) -> Result<()> {
        loop {
            self.show()?;

            let Some(raw) = self.prompter.ask("Enter your choice: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&raw) else {
                self.prompter.say("Invalid choice. Please try again.")?;
                continue;
            };

            match self.read_request(choice) {
                Ok(Step::Execute(request)) => {
                    let result = desk.execute(request).await;
                    self.report(result)?;
                }
                Ok(Step::Exit) => break,
                Err(e) if e.is_rejection() => {
                    tracing::warn!(error = %e, "bad input");
                    self.prompter.say(&e.user_message())?;
                }
                Err(e) => return Err(e),
            }
        }

        self.prompter.say("Exiting program.")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn show(&mut self) -> Result<()> {
        self.prompter.say(TITLE)?;
        for choice in MenuChoice::ALL {
            self.prompter.say(&choice.to_string())?;
        }
        Ok(())
    }

    // Gather the arguments for a choice. End of input midway means exit.
    fn read_request(&mut self, choice: MenuChoice) -> Result<Step> {
        let request = match choice {
            MenuChoice::AddFlight => self.read_new_flight()?.map(Request::AddFlight),
            MenuChoice::AddPassenger => self.read_new_passenger()?.map(Request::AddPassenger),
            MenuChoice::BookFlight => self.read_new_booking()?.map(Request::BookFlight),
            MenuChoice::ViewFlights => Some(Request::ViewFlights),
            MenuChoice::ViewPassengers => Some(Request::ViewPassengers),
            MenuChoice::ViewBookings => Some(Request::ViewBookings),
            MenuChoice::SearchFlight => self
                .prompter
                .ask("Enter flight number to search: ")?
                .map(|flight_number| Request::SearchFlight { flight_number }),
            MenuChoice::DeleteFlight => self
                .prompter
                .ask_id("Enter flight ID to delete: ")?
                .map(|flight_id| Request::DeleteFlight { flight_id }),
            MenuChoice::Exit => None,
        };

        Ok(request.map_or(Step::Exit, Step::Execute))
    }

    fn read_new_flight(&mut self) -> Result<Option<NewFlight>> {
        let Some(flight_number) = self.prompter.ask("Enter flight number: ")? else {
            return Ok(None);
        };
        let Some(origin) = self.prompter.ask("Enter origin: ")? else {
            return Ok(None);
        };
        let Some(destination) = self.prompter.ask("Enter destination: ")? else {
            return Ok(None);
        };
        let Some(departure_time) = self
            .prompter
            .ask("Enter departure time (YYYY-MM-DD HH:MM): ")?
        else {
            return Ok(None);
        };
        let Some(arrival_time) = self
            .prompter
            .ask("Enter arrival time (YYYY-MM-DD HH:MM): ")?
        else {
            return Ok(None);
        };

        Ok(Some(NewFlight {
            flight_number,
            origin,
            destination,
            departure_time,
            arrival_time,
        }))
    }

    fn read_new_passenger(&mut self) -> Result<Option<NewPassenger>> {
        let Some(name) = self.prompter.ask("Enter passenger name: ")? else {
            return Ok(None);
        };
        let Some(passport_number) = self.prompter.ask("Enter passport number: ")? else {
            return Ok(None);
        };
        let Some(nationality) = self.prompter.ask("Enter nationality: ")? else {
            return Ok(None);
        };

        Ok(Some(NewPassenger {
            name,
            passport_number,
            nationality,
        }))
    }

    fn read_new_booking(&mut self) -> Result<Option<NewBooking>> {
        let Some(flight_id) = self.prompter.ask_id("Enter flight ID: ")? else {
            return Ok(None);
        };
        let Some(passenger_id) = self.prompter.ask_id("Enter passenger ID: ")? else {
            return Ok(None);
        };

        Ok(Some(NewBooking {
            flight_id,
            passenger_id,
        }))
    }

    // Operation failures are reported and swallowed; only terminal errors escape.
    fn report(&mut self, result: Result<Outcome>) -> Result<()> {
        match result {
            Ok(outcome) => self.prompter.say(&outcome.to_string()),
            Err(e) if e.is_rejection() => {
                tracing::warn!(error = %e, "request rejected");
                self.prompter.say(&e.user_message())
            }
            Err(e) => {
                tracing::error!(error = %e, "request failed");
                self.prompter.say(&e.user_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use std::io::Cursor;
    use std::sync::Arc;

    async fn run_script(desk: &Desk, script: &str) -> String {
        let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::new());
        menu.run(desk).await.unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    async fn desk() -> Desk {
        Desk::new(Arc::new(Database::new_test().await.unwrap()))
    }

    #[tokio::test]
    async fn test_database_failure_is_reported_and_loop_continues() {
        let desk = desk().await;
        desk.database().close().await;

        let output = run_script(&desk, "4\n9\n").await;

        assert!(output.contains("Database error occurred."));
        assert!(output.trim_end().ends_with("Exiting program."));
    }

    #[tokio::test]
    async fn test_plus_sign_is_not_a_choice() {
        let desk = desk().await;
        let output = run_script(&desk, "+1\n9\n").await;

        assert!(output.contains("Invalid choice. Please try again."));
        assert!(!output.contains("Enter flight number: "));
    }

    #[tokio::test]
    async fn test_exit_choice() {
        let desk = desk().await;
        let output = run_script(&desk, "9\n").await;

        assert!(output.contains("--- Airport Management System ---"));
        assert!(output.contains("8. Delete Flight"));
        assert!(output.trim_end().ends_with("Exiting program."));
    }

    #[tokio::test]
    async fn test_eof_exits_cleanly() {
        let desk = desk().await;
        let output = run_script(&desk, "").await;

        assert!(output.trim_end().ends_with("Exiting program."));
    }

    #[tokio::test]
    async fn test_invalid_choice_reprompts() {
        let desk = desk().await;
        let output = run_script(&desk, "42\nfoo\n9\n").await;

        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(output.matches("Enter your choice: ").count(), 3);
    }

    #[tokio::test]
    async fn test_add_flight_through_prompts() {
        let desk = desk().await;
        let script = "1\nUA900\nSFO\nFRA\n2025-12-01 15:00\n2025-12-02 11:00\n4\n9\n";
        let output = run_script(&desk, script).await;

        assert!(output.contains("Flight added successfully! (ID: 1)"));
        assert!(output.contains(
            "ID: 1, Number: UA900, From: SFO To: FRA, Departure: 2025-12-01 15:00, Arrival: 2025-12-02 11:00"
        ));
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_reported_and_loop_continues() {
        let desk = desk().await;
        let output = run_script(&desk, "8\nabc\n9\n").await;

        assert!(output.contains("Invalid ID: 'abc'. Please enter a number."));
        assert!(output.trim_end().ends_with("Exiting program."));
    }

    #[tokio::test]
    async fn test_eof_midway_through_prompts() {
        let desk = desk().await;
        let output = run_script(&desk, "2\nAlan Turing\n").await;

        assert!(output.trim_end().ends_with("Exiting program."));
        assert_eq!(desk.database().stats().await.unwrap().total_passengers, 0);
    }
}
