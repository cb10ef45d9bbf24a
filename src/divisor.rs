use crate::consts::DAYS_PER_YEAR;

/// Error type for dividing the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DivisorError {
    #[error("A year cannot be divided by zero")]
    Zero,
}

/// `DAYS_PER_YEAR / divisor`, rounded to the nearest integer with ties to even.
///
/// The quotient is computed exactly in integers, so half-way cases such as
/// `365 / 2 = 182.5` round to `182` and `365 / 10 = 36.5` to `36`.
/// A negative divisor yields a negative day count.
///
/// # Errors
/// Returns `DivisorError::Zero` for a zero divisor.
pub fn divisor_days(divisor: i64) -> Result<i64, DivisorError> {
    if divisor == 0 {
        return Err(DivisorError::Zero);
    }

    // Only i64::MIN has no i64 magnitude, and it rounds to zero days.
    let Ok(magnitude) = i64::try_from(divisor.unsigned_abs()) else {
        return Ok(0);
    };
    let quotient = DAYS_PER_YEAR / magnitude;
    let remainder = DAYS_PER_YEAR % magnitude;

    // Compare the remainder with what is left of the divisor, so nothing is doubled.
    let rounded = match remainder.cmp(&(magnitude - remainder)) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + quotient % 2,
    };

    Ok(if divisor < 0 { -rounded } else { rounded })
}
