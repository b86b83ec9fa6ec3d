//! Logging setup for the pipeline tool.
//!
//! `RUST_LOG` always wins. Otherwise the filter passed on the command line
//! is used, falling back to `warn` so regular runs only print the report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(filter: Option<&str>) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter.unwrap_or("warn"))
    };

    // Logs go to stderr so JSON on stdout stays clean.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .with(env_filter)
        .try_init();
}
