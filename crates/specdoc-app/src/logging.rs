//! Logging setup

use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the environment's default level is
/// used. Returns `false` when a subscriber was already installed, in which
/// case nothing changes.
pub fn init(environment: &Environment) -> bool {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(environment.default_log_level())),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
