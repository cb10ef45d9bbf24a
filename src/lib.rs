mod consts;
mod divisor;
mod prelude;
mod report;
mod step;
mod types;
mod walk;

pub use consts::*;
pub use divisor::{DivisorError, divisor_days};
pub use report::{Report, ReportError};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use walk::{Days, Direction, StepError, step_distance};

use crate::prelude::*;
use std::str::FromStr;

/// A single day of the proleptic Gregorian calendar.
/// The components are validated against each other on construction, so
/// `day` never exceeds the length of `month` in `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// The earliest representable date, 0001-01-01
    pub const MIN: Self = Self {
        year:  Year::MIN,
        month: Month::JANUARY,
        day:   Day::FIRST,
    };

    /// Creates a date from raw components, validating each against the others.
    ///
    /// # Errors
    /// Returns the `ParseError` variant naming the first component out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let day_typed = Day::new(day, year, month)?;
        Ok(Self::from_parts(year_typed, month_typed, day_typed))
    }

    // Callers guarantee `day` fits in `month` of `year`.
    pub(crate) const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the components as a plain (year, month, day) tuple
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

/// Reports whether `text` is a valid `YYYY-MM-DD` calendar date.
/// Never panics; every malformed or out-of-range input yields `false`.
pub fn is_valid_date(text: &str) -> bool {
    text.parse::<CalendarDate>().is_ok()
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if s.len() != DATE_TEXT_LEN {
            return Err(ParseError::InvalidFormat(format!(
                "Expected {DATE_TEXT_LEN} bytes (YYYY-MM-DD), found {}",
                s.len()
            )));
        }

        let separator_count = s.matches(DATE_SEPARATOR).count();
        if separator_count != SEPARATOR_POSITIONS.len() {
            return Err(ParseError::InvalidFormat(format!(
                "Expected {} {DATE_SEPARATOR} separators, found {separator_count}",
                SEPARATOR_POSITIONS.len()
            )));
        }

        // Separators must sit between the fields, not merely be present.
        let bytes = s.as_bytes();
        for pos in SEPARATOR_POSITIONS {
            if bytes[pos] != DATE_SEPARATOR as u8 {
                return Err(ParseError::InvalidFormat(format!(
                    "Misplaced {DATE_SEPARATOR} separator in {s}"
                )));
            }
        }

        let [first, second] = SEPARATOR_POSITIONS;
        let year = Self::parse_field::<u16>(&s[..first])?;
        let month = Self::parse_field::<u8>(&s[first + 1..second])?;
        let day = Self::parse_field::<u8>(&s[second + 1..])?;

        Self::new(year, month, day)
    }
}

impl CalendarDate {
    /// Parses a fixed-width numeric field; signs and whitespace are rejected.
    fn parse_field<T: FromStr>(s: &str) -> Result<T, ParseError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
