//! Tracing subscriber setup for the notifier binary.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where the process is running, which decides the log line shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Hosted by the Lambda runtime. CloudWatch stamps each line itself, and
    /// ANSI colors would show up as escape codes.
    Lambda,
    /// Interactive terminal.
    Terminal,
}

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init(target: LogTarget) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match target {
        LogTarget::Lambda => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_ansi(false),
            )
            .init(),
        LogTarget::Terminal => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
