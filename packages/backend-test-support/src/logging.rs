//! Test logging bootstrap.

use std::env;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per process.
///
/// Filter precedence: `TEST_LOG`, `RUST_LOG`, then `warn`. Losing the race
/// to another global subscriber is fine.
pub fn init() {
    INIT.call_once(|| {
        let directives = env::var("TEST_LOG")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        let _ = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}
