//! Tracing subscriber setup

use crate::config::Verbosity;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber; `RUST_LOG` overrides the verbosity filter.
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing(verbosity: Verbosity) -> bool {
    tracing_subscriber::registry()
        .with(filter_for(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity.is_verbose()),
        )
        .try_init()
        .is_ok()
}

fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity.log_filter().into())
}
