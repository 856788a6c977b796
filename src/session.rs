use std::{error::Error, io::{BufRead, Write}};

use tracing::{debug, instrument};

use crate::{parse::{parse_coefficients, parse_point}, polynomial::evaluate};

pub const COEFFICIENTS_PROMPT: &str = "Give coefficients in descending order of power (separated by a space): ";
pub const POINT_PROMPT: &str = "evaluate at x = ";

/// Interactive session asking for coefficients and evaluation point, then printing polynomial value.
/// Answers given up front are used as they are and their prompts are skipped.
pub struct Session<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Session { reader, writer }
    }

    /// Runs single evaluation. Coefficients are validated before the point is requested.
    /// # Example
    /// ```
    /// use std::io::Cursor;
    /// use horner::Session;
    ///
    /// let mut output = Vec::new();
    /// let mut session = Session::new(Cursor::new("2\n"), &mut output);
    /// let value = session.run(Some("1 0 -1"), None).unwrap();
    ///
    /// assert_eq!(3.0, value);
    /// assert!(String::from_utf8(output).unwrap().ends_with("Value of polynomial is 3\n"));
    /// ```
    #[instrument(name = "Session::run", level = "debug", skip_all)]
    pub fn run(&mut self, coefficients: Option<&str>, point: Option<&str>) -> Result<f64, Box<dyn Error>> {
        let coefficients = match coefficients {
            Some(line) => parse_coefficients(line)?,
            None => parse_coefficients(&self.prompt(COEFFICIENTS_PROMPT)?)?,
        };
        debug!(degree = coefficients.len() - 1, "parsed coefficients");

        let x = match point {
            Some(line) => parse_point(line)?,
            None => parse_point(&self.prompt(POINT_PROMPT)?)?,
        };
        debug!(x, "parsed evaluation point");

        let value = evaluate(&coefficients, x)?;
        writeln!(self.writer, "Value of polynomial is {}", value)?;
        Ok(value)
    }

    fn prompt(&mut self, message: &str) -> Result<String, Box<dyn Error>> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line)
    }
}
