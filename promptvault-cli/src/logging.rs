//! Tracing setup for the CLI

use tracing_subscriber::EnvFilter;

/// Pick the log filter from the command-line flags.
///
/// Flags win over `RUST_LOG`, which wins over the configured level.
pub fn log_filter(verbose: bool, debug: bool, quiet: bool, configured: &str) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
    }
}

/// Install the global subscriber, writing to stderr
pub fn configure_logging(verbose: bool, debug: bool, quiet: bool, configured: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, debug, quiet, configured))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_take_precedence() {
        assert_eq!(log_filter(true, true, true, "trace").to_string(), "error");
        assert_eq!(log_filter(true, true, false, "trace").to_string(), "debug");
        assert_eq!(log_filter(true, false, false, "trace").to_string(), "info");
    }
}
