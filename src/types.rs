use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use crate::ParseError;
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// The first representable year
    pub const MIN: Self = Self(NonZeroU16::MIN);

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a 29th of February
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0.get() as i32)
    }

    /// The following year, or `None` past `MAX_YEAR`
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get().checked_add(1)?).ok()
    }

    /// The preceding year, or `None` before `MIN_YEAR`
    pub fn pred(self) -> Option<Self> {
        if self.get() <= MIN_YEAR {
            return None;
        }
        Self::new(self.get() - 1).ok()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// The first month of the year
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days this month has in `year`
    #[inline]
    pub const fn length_in(self, year: Year) -> u8 {
        month_length(self.get(), year.get() as i32)
    }

    /// The following month within the same year, `None` after December
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }

    /// The preceding month within the same year, `None` before January
    pub fn pred(self) -> Option<Self> {
        Self::new(self.get() - 1).ok()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// The first day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the month is out of range, or
    /// `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let max_day = days_in_month(month, i32::from(year))?;
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > max_day {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// The last day of `month` in `year`
    pub fn last_of(year: Year, month: Month) -> Option<Self> {
        NonZeroU8::new(month.length_in(year)).map(Self)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// Helper functions

/// Gregorian leap-year rule, defined for every integer year.
pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` if `month` is outside `1..=12`.
pub fn days_in_month(month: u8, year: i32) -> Result<u8, ParseError> {
    let month = Month::new(month)?;
    Ok(month_length(month.get(), year))
}

// Callers guarantee `month` is in 1..=12.
const fn month_length(month: u8, year: i32) -> u8 {
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
