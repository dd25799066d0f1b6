//! Driver configuration: signal timing plus the cadence of the demo collaborators.
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults in [`crate::global_variables`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ControllerError;
use crate::global_variables::*;
use crate::intersection::TimingConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    pub base_green_secs: u64,
    pub yellow_secs: u64,
    pub min_green_secs: u64,
    pub max_green_secs: u64,
    pub tick_interval_ms: u64,
    pub sensor_interval_ms: u64,
    pub detection_probability: f64,
    pub emergency_probability: f64,
    pub emergency_hold_secs: u64,
    /// Append a status row per tick to this CSV file when set.
    pub telemetry_csv: Option<PathBuf>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_green_secs: DEFAULT_BASE_GREEN_SECS,
            yellow_secs: DEFAULT_YELLOW_SECS,
            min_green_secs: DEFAULT_MIN_GREEN_SECS,
            max_green_secs: DEFAULT_MAX_GREEN_SECS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            sensor_interval_ms: DEFAULT_SENSOR_INTERVAL_MS,
            detection_probability: DEFAULT_DETECTION_PROBABILITY,
            emergency_probability: DEFAULT_EMERGENCY_PROBABILITY,
            emergency_hold_secs: DEFAULT_EMERGENCY_HOLD_SECS,
            telemetry_csv: None,
        }
    }
}

impl ControllerConfig {
    pub fn timing(&self) -> TimingConfig {
        TimingConfig::from_secs(
            self.base_green_secs,
            self.yellow_secs,
            self.min_green_secs,
            self.max_green_secs,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn sensor_interval(&self) -> Duration {
        Duration::from_millis(self.sensor_interval_ms.max(1))
    }

    pub fn emergency_hold(&self) -> Duration {
        Duration::from_secs(self.emergency_hold_secs)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ControllerError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ControllerError> {
        let contents = fs::read_to_string(path).map_err(|source| ControllerError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Picks the config file from `explicit_path`, then the
    /// `TRAFFIC_CONTROLLER_CONFIG` environment variable; defaults if neither is set.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ControllerError> {
        let env_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        match explicit_path.map(Path::to_path_buf).or(env_path) {
            Some(path) => {
                log::info!("Loading controller config from {}", path.display());
                Self::load_from(&path)
            }
            None => {
                log::info!("No controller config given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
