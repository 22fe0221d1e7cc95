use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted before the configured log level.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the diagnostics subscriber. Load-boundary warnings such as a
/// missing `values.txt` reach the user through it, so it writes to stderr and
/// leaves stdout to the prompts.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = diagnostics_filter(std::env::var(LOG_FILTER_ENV).ok(), &config.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// `RUST_LOG` wins when it parses; otherwise the configured level applies.
fn diagnostics_filter(
    from_env: Option<String>,
    configured: &str,
) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = from_env.and_then(|raw| EnvFilter::try_new(raw).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(configured).map_err(|source| TelemetryError::EnvFilter {
        value: configured.to_string(),
        source,
    })
}
