use clap::Parser;
use datestep::{ParseError, ReportError};

/// Divide a year by an integer and step that many days around a date.
#[derive(Parser)]
#[command(
    name = "datestep",
    version,
    about = "Report the dates a fraction of a year before and after a given date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the result as a JSON object instead of sentences.
    #[arg(long)]
    pub json: bool,

    /// Start date.
    #[arg(value_name = "YYYY-MM-DD")]
    pub date: String,

    /// Number of parts to divide the year into; negative swaps past and future.
    #[arg(value_name = "NN", allow_negative_numbers = true)]
    pub divisor: String,
}

/// Everything that sends the user back to the usage line.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("wrong arguments: {0}")]
    ArgumentCount(#[source] clap::Error),

    #[error("divisor {0:?} is not an integer")]
    NonIntegerDivisor(String),

    #[error(transparent)]
    InvalidDate(#[from] ParseError),

    #[error("divisor must not be zero")]
    ZeroDivisor,

    #[error(transparent)]
    OutOfRange(#[from] ReportError),
}

/// Parses the divisor argument as a signed integer.
///
/// # Errors
/// Returns `UsageError::NonIntegerDivisor` if `s` is not an `i64`.
pub fn parse_divisor(s: &str) -> Result<i64, UsageError> {
    s.parse()
        .map_err(|_| UsageError::NonIntegerDivisor(s.to_owned()))
}
