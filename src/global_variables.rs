// Default signal timing (seconds)
pub const DEFAULT_BASE_GREEN_SECS: u64 = 30;
pub const DEFAULT_YELLOW_SECS: u64 = 5;
pub const DEFAULT_MIN_GREEN_SECS: u64 = 10;
pub const DEFAULT_MAX_GREEN_SECS: u64 = 60;

// Density scoring
pub const DENSITY_WEIGHT_PER_APPROACH: u32 = 3;

// Timing bias applied when one axis is clearly busier than the other
pub const DENSITY_BIAS_THRESHOLD: u32 = 4;
pub const FAVORED_AXIS_BONUS_SECS: u64 = 15;
pub const DISFAVORED_AXIS_PENALTY_SECS: u64 = 10;

// Demo driver cadence and simulated collaborator behaviour
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_SENSOR_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_DETECTION_PROBABILITY: f64 = 0.2;
pub const DEFAULT_EMERGENCY_PROBABILITY: f64 = 0.05;
pub const DEFAULT_EMERGENCY_HOLD_SECS: u64 = 5;

// Environment variable naming a JSON config file
pub const CONFIG_PATH_ENV: &str = "TRAFFIC_CONTROLLER_CONFIG";
