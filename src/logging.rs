use tracing_subscriber::EnvFilter;

/// Initialize tracing for the `datestep` target from the `-v` count.
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` overrides the flag. Events go to stderr so stdout carries only
/// the result.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("datestep={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        for level in ["warn", "info", "debug", "trace"] {
            assert!(
                EnvFilter::try_new(format!("datestep={level}")).is_ok(),
                "{level} should be a valid directive"
            );
        }
    }
}
