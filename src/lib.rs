mod core;
pub mod client;
pub mod backend;
pub mod api;

pub use crate::core::{UserRecord, Account, AccountId, ProbeError, ProbeResult};
pub use crate::core::{user, account, error};
pub use crate::client::{HttpUserClient, UserEndpoint, DEFAULT_HOST};

/// Install the log subscriber shared by all binaries.
/// `RUST_LOG` picks the filter, `info` otherwise. Logs go to stderr
/// so stdout carries only command output.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
