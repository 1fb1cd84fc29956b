/*---------- Imports ----------*/
use tracing_subscriber::EnvFilter;

/// JSON lines for CloudWatch. CloudWatch stamps every line itself.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}
