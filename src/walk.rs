use std::iter::FusedIterator;

use crate::CalendarDate;

/// Which way a walk moves through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction implied by the sign of a step count; zero walks forward.
    pub const fn of(steps: i64) -> Self {
        if steps < 0 { Self::Backward } else { Self::Forward }
    }
}

/// Error type for multi-day walks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// The walk would leave 0001-01-01..=9999-12-31.
    #[error("Moving {steps} days from {start} leaves the supported range")]
    OutOfRange { start: CalendarDate, steps: i64 },
}

/// Iterator over consecutive days, starting with (and including) the start date.
/// Ends after the last representable date in its direction.
#[derive(Debug, Clone)]
pub struct Days {
    next:      Option<CalendarDate>,
    direction: Direction,
}

impl Days {
    pub const fn new(start: CalendarDate, direction: Direction) -> Self {
        Self {
            next: Some(start),
            direction,
        }
    }
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match self.direction {
            Direction::Forward => current.next_day(),
            Direction::Backward => current.previous_day(),
        };
        Some(current)
    }
}

impl FusedIterator for Days {}

/// Moves `start` by `steps` days: forward for positive counts, backward for
/// negative ones, one day at a time.
///
/// # Errors
/// Returns `StepError::OutOfRange` if the walk runs past either end of the
/// supported range.
pub fn step_distance(start: CalendarDate, steps: i64) -> Result<CalendarDate, StepError> {
    let out_of_range = StepError::OutOfRange { start, steps };
    let distance = usize::try_from(steps.unsigned_abs()).map_err(|_| out_of_range.clone())?;
    let direction = Direction::of(steps);

    tracing::trace!(%start, steps, ?direction, "walking");

    Days::new(start, direction)
        .nth(distance)
        .ok_or(out_of_range)
}
