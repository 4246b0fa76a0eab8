//! Diagnostic logging to stderr.
//!
//! Stdout carries the program output (the artifact summary, the benchmark
//! table), so all log events go to stderr at a fixed level.

use tracing::Level;

/// Install the global fmt subscriber. Repeated calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .try_init();
}
