//! Log output setup.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here also captures those records.

use tracing_subscriber::EnvFilter;

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_directives(level: &str, verbose: bool) -> String {
    let level = match level.trim() {
        "" => "info",
        other => other,
    };
    if verbose {
        format!("{level},folio=debug")
    } else {
        level.to_string()
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(level: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level, verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives("info", false), "info");
        assert_eq!(default_directives("warn", true), "warn,folio=debug");
        assert_eq!(default_directives("  ", false), "info");
    }
}
