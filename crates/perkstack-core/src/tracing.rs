use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` is unset or blank. sea-orm logs every statement at
/// `info`, so the ORM and its driver are held to `warn`.
const DEFAULT_DIRECTIVES: &str = "info,sea_orm=warn,sqlx=warn";

/// Install the JSON stdout subscriber. Only the first call wins.
pub fn init_tracing() {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(log_filter(raw.as_deref()))
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(true),
        )
        .try_init();
}

// Unparseable directives are dropped rather than failing startup.
fn log_filter(raw: Option<&str>) -> EnvFilter {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .parse_lossy(directives),
        None => EnvFilter::new(DEFAULT_DIRECTIVES),
    }
}
