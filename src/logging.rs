use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that switches console output to JSON lines
pub const LOG_FORMAT_ENV: &str = "IMGFETCH_LOG_FORMAT";

/// Initialize tracing for the command-line tool.
///
/// Honours `RUST_LOG`, defaulting to `info` so per-image progress is visible.
/// Set `IMGFETCH_LOG_FORMAT=json` for machine-readable output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_timer(fmt::time::ChronoLocal::rfc_3339()))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(fmt::time::ChronoLocal::rfc_3339()),
            )
            .init();
    }
}
