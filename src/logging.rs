//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so stdout carries only command output. The
//! filter comes from `GITCONF_LOG` (e.g. `GITCONF_LOG=debug`) and defaults
//! to `warn`; `--verbose` overrides it with `debug`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "GITCONF_LOG";

/// Build the filter for the given verbosity
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter() {
        assert_eq!(filter(true).to_string(), "debug");
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
