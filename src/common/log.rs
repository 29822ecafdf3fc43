use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Output goes to stderr so `--list` and
/// `--dry-run` stay pipeable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
