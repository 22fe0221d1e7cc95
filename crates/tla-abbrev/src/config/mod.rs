use crate::abbreviations::{OutputFormat, ScoringStrategy};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub letter_values: LetterValuesConfig,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let values_path = env::var("TLA_VALUES_PATH").unwrap_or_else(|_| "values.txt".to_string());
        let strategy = match env::var("TLA_SCORING") {
            Ok(raw) => raw
                .parse::<ScoringStrategy>()
                .map_err(|_| ConfigError::InvalidStrategy { value: raw })?,
            Err(_) => ScoringStrategy::default(),
        };

        let output_dir = env::var("TLA_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string());
        let format = match env::var("TLA_OUTPUT_FORMAT") {
            Ok(raw) => raw
                .parse::<OutputFormat>()
                .map_err(|_| ConfigError::InvalidOutputFormat { value: raw })?,
            Err(_) => OutputFormat::default(),
        };

        let log_level = env::var("TLA_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            letter_values: LetterValuesConfig {
                path: PathBuf::from(values_path),
                strategy,
            },
            output: OutputConfig {
                dir: PathBuf::from(output_dir),
                format,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where letter values come from and how they are applied.
#[derive(Debug, Clone)]
pub struct LetterValuesConfig {
    pub path: PathBuf,
    pub strategy: ScoringStrategy,
}

/// Destination and rendering of the written report.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub format: OutputFormat,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidOutputFormat { value: String },
    InvalidStrategy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutputFormat { value } => write!(
                f,
                "TLA_OUTPUT_FORMAT must be text, csv or json (found '{value}')"
            ),
            ConfigError::InvalidStrategy { value } => write!(
                f,
                "TLA_SCORING must be word-match or positional (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("TLA_VALUES_PATH");
        env::remove_var("TLA_SCORING");
        env::remove_var("TLA_OUTPUT_DIR");
        env::remove_var("TLA_OUTPUT_FORMAT");
        env::remove_var("TLA_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.letter_values.path, PathBuf::from("values.txt"));
        assert_eq!(config.letter_values.strategy, ScoringStrategy::WordMatch);
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TLA_VALUES_PATH", "scores/letters.txt");
        env::set_var("TLA_SCORING", "positional");
        env::set_var("TLA_OUTPUT_FORMAT", "json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.letter_values.path, PathBuf::from("scores/letters.txt"));
        assert_eq!(config.letter_values.strategy, ScoringStrategy::Positional);
        assert_eq!(config.output.format, OutputFormat::Json);
        reset_env();
    }

    #[test]
    fn rejects_unknown_output_format() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TLA_OUTPUT_FORMAT", "xml");
        let err = AppConfig::load().expect_err("xml is not supported");
        assert!(matches!(err, ConfigError::InvalidOutputFormat { .. }));
        reset_env();
    }
}
