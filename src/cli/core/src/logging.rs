/* src/cli/core/src/logging.rs */

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides `level`; an invalid
/// directive falls back to `info`.
pub fn init(level: &str) {
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(level))
    .unwrap_or_else(|_| EnvFilter::new("info"));
  // A second init (tests, embedding) keeps the first subscriber.
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
