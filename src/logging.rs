//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `log_level` is an `EnvFilter` directive such as `info` or
/// `content_importer=debug`; an invalid directive falls back to `info`.
/// `log_format` selects human-readable (`text`) or line-delimited JSON (`json`)
/// output. Logs go to stderr so command output on stdout stays clean.
pub fn init_logging(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
