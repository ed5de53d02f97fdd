/// Line-oriented prompting over any reader/writer pair
///
/// Generic so the menu can be driven from a script in tests.

use crate::error::{DeskError, Result};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a label and read one line
    ///
    /// Returns `None` at end of input. The line terminator is stripped,
    /// everything else is kept as typed.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(answer))
    }

    /// Ask for a numeric id
    ///
    /// `Ok(None)` at end of input, `Err(DeskError::InvalidId)` if it isn't an integer.
    pub fn ask_id(&mut self, label: &str) -> Result<Option<i64>> {
        match self.ask(label)? {
            None => Ok(None),
            Some(raw) => parse_id(&raw).map(Some),
        }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DeskError::InvalidId(raw.trim().to_string()))
}
