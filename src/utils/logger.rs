//! Diagnostic logging setup using tracing

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the log filter, letting `RUST_LOG` override the defaults
pub fn log_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "docx_guide=debug"
    } else {
        "docx_guide=warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// Logs go to stderr; stdout carries only the guide text.
pub fn init_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
