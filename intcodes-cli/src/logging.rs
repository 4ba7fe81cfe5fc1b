//! Sets up logging for the command line tool using `tracing_subscriber`.
//! Log lines go to stderr so they never mix with results on stdout.

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or invalid.
const DEFAULT_DIRECTIVES: &str = "warn,intcodes=info";

/// Sets up logging, as JSON lines when `json` is set and as plain text
/// otherwise.
pub fn setup_logging(json: bool) {
    match json {
        true => setup_logging_json(),
        false => setup_logging_text(),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn setup_logging_json() {
    let main_layer = tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(false)
        .with_current_span(true)
        .with_span_list(true)
        .with_line_number(true)
        .with_file(true)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(main_layer)
        .init()
}

fn setup_logging_text() {
    let main_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(main_layer)
        .init()
}
