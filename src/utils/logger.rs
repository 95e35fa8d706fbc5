use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initializes a global tracing subscriber for tests and examples
///
/// Safe to call multiple times; only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .try_init();
    });
}
