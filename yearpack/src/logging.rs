use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout carries progress lines or the JSON report.
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fallback = if verbose {
        "yearpack=debug,yearpack_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
}
