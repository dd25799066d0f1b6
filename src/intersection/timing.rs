use crate::error::ConfigError;
use crate::global_variables::{
    DEFAULT_BASE_GREEN_SECS, DEFAULT_MAX_GREEN_SECS, DEFAULT_MIN_GREEN_SECS, DEFAULT_YELLOW_SECS,
};
use std::time::Duration;

/// Signal timing bounds, fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Green time given to both axes when traffic is balanced.
    pub base_green: Duration,
    pub yellow_duration: Duration,
    pub min_green: Duration,
    pub max_green: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            base_green: Duration::from_secs(DEFAULT_BASE_GREEN_SECS),
            yellow_duration: Duration::from_secs(DEFAULT_YELLOW_SECS),
            min_green: Duration::from_secs(DEFAULT_MIN_GREEN_SECS),
            max_green: Duration::from_secs(DEFAULT_MAX_GREEN_SECS),
        }
    }
}

impl TimingConfig {
    pub fn from_secs(base_green: u64, yellow: u64, min_green: u64, max_green: u64) -> Self {
        Self {
            base_green: Duration::from_secs(base_green),
            yellow_duration: Duration::from_secs(yellow),
            min_green: Duration::from_secs(min_green),
            max_green: Duration::from_secs(max_green),
        }
    }

    /// Checks the ordering `0 < min_green <= base_green <= max_green` and a non-zero yellow.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_green > self.max_green {
            return Err(ConfigError::MinExceedsMax {
                min: self.min_green,
                max: self.max_green,
            });
        }
        if self.yellow_duration.is_zero() {
            return Err(ConfigError::ZeroYellow);
        }
        if self.min_green.is_zero() {
            return Err(ConfigError::ZeroMinGreen);
        }
        if self.base_green < self.min_green || self.base_green > self.max_green {
            return Err(ConfigError::BaseOutOfRange {
                base: self.base_green,
                min: self.min_green,
                max: self.max_green,
            });
        }
        Ok(())
    }
}
