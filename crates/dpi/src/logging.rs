//! Log output for simulator transcripts.
//!
//! The HDL simulator owns stdout, so events go to stderr. `RUST_LOG` wins over
//! the configured filter when both are present.

use m6502_cosim::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Safe to call more than once; only the first call in a process has an effect.
///
/// # Arguments
///
/// * `config` - Fallback filter directive and colour setting.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .try_init();
}
