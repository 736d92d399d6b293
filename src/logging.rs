/// Logging setup. Everything goes to stderr; stdout carries only the schema.
use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. `RUST_LOG` directives apply on top of the
/// default level (`info`, or `debug` with `--debug`).
///
/// # Errors
///
/// Fails when a subscriber is already set.
pub fn setup_logging(debug: bool) -> Result<(), anyhow::Error> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = env_filter(debug, &directives);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init()?;

    Ok(())
}

/// Build the filter. The default level and the `hyper_util` cap come first so
/// `directives` can override them; invalid entries are skipped.
fn env_filter(debug: bool, directives: &str) -> EnvFilter {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    EnvFilter::builder().parse_lossy(format!("{level},hyper_util=warn,{directives}"))
}
