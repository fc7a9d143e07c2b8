//! Diagnostic logging to stderr

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber. Stdout stays reserved for command output.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    // Already installed (e.g. under a test harness) is fine.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
