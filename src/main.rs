mod cli;
mod logging;

use std::{env, process};

use clap::Parser;
use clap::error::ErrorKind;
use datestep::{CalendarDate, Report};

use crate::cli::{Cli, UsageError, parse_divisor};

fn main() {
    let program = env::args().next().unwrap_or_else(|| "datestep".to_owned());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            logging::init(0);
            usage(&program, &UsageError::ArgumentCount(e))
        },
    };
    logging::init(cli.verbose);

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => usage(&program, &e),
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            },
        }
    } else {
        println!("{report}");
    }
}

fn run(cli: &Cli) -> Result<Report, UsageError> {
    let divisor = parse_divisor(&cli.divisor)?;
    let start: CalendarDate = cli.date.parse()?;
    if divisor == 0 {
        return Err(UsageError::ZeroDivisor);
    }
    tracing::info!(%start, divisor, "dividing year");

    Ok(Report::compute(start, divisor)?)
}

/// Prints the usage line and exits; the reason is only logged.
fn usage(program: &str, reason: &UsageError) -> ! {
    tracing::debug!(%reason, "rejected input");
    println!("Usage: {program} YYYY-MM-DD NN");
    process::exit(1);
}
