//! Controller errors.
//!
//! Core operations only ever produce `Configuration` (at construction) and
//! `InvalidDirection` (at the untyped sensor boundary). The remaining variants
//! belong to the config loader and the telemetry recorder.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Rejected timing configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_green {min:?} exceeds max_green {max:?}")]
    MinExceedsMax { min: Duration, max: Duration },
    #[error("yellow_duration must be positive")]
    ZeroYellow,
    #[error("min_green must be positive")]
    ZeroMinGreen,
    #[error("base_green {base:?} outside [{min:?}, {max:?}]")]
    BaseOutOfRange {
        base: Duration,
        min: Duration,
        max: Duration,
    },
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("invalid timing configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("direction `{raw}` is not one of north, south, east, west")]
    InvalidDirection { raw: String },
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("telemetry write failed: {0}")]
    Telemetry(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
