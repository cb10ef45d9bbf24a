use std::fmt;

use serde::Serialize;

use crate::{CalendarDate, DivisorError, StepError, divisor_days, step_distance};

/// The dates one divided-year before and after a start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub start:        CalendarDate,
    pub divisor:      i64,
    pub divisor_days: i64,
    pub past:         CalendarDate,
    pub future:       CalendarDate,
}

/// Error type for building a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Divisor(#[from] DivisorError),

    #[error(transparent)]
    Step(#[from] StepError),
}

impl Report {
    /// Divides the year by `divisor` and walks that many days both ways from `start`.
    ///
    /// # Errors
    /// Returns `ReportError::Divisor` for a zero divisor, or
    /// `ReportError::Step` if either walk leaves the supported range.
    pub fn compute(start: CalendarDate, divisor: i64) -> Result<Self, ReportError> {
        let divisor_days = divisor_days(divisor)?;
        tracing::debug!(divisor, divisor_days, "divided year");

        let past = step_distance(start, -divisor_days)?;
        let future = step_distance(start, divisor_days)?;
        tracing::debug!(%start, %past, %future, "walked");

        Ok(Self {
            start,
            divisor,
            divisor_days,
            past,
            future,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "A year divided by {} is {} days.",
            self.divisor, self.divisor_days
        )?;
        writeln!(
            f,
            "The date {} days ago was {}.",
            self.divisor_days, self.past
        )?;
        write!(
            f,
            "The date {} days from now will be {}.",
            self.divisor_days, self.future
        )
    }
}
