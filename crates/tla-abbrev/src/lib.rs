pub mod abbreviations;
pub mod config;
pub mod error;
pub mod telemetry;
