use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Builds the filter from a directive such as `info` or `application=debug`,
/// falling back to [`DEFAULT_LOG_FILTER`] when it does not parse.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global fmt subscriber. Output goes to stderr so it never
/// interleaves with the roster screen on stdout.
pub fn init_tracing(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
