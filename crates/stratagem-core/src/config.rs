// Single source of truth for all policy constants.

// --- Pattern mining evidence floors ---
pub const MIN_TEMPORAL_RECORDS: usize = 10;
pub const MIN_BEHAVIORAL_RECORDS: usize = 5;
pub const MIN_ENVIRONMENTAL_RECORDS: usize = 10;
pub const MIN_WEATHER_SAMPLES: usize = 3;
pub const MIN_BEHAVIORAL_CORRELATION: f64 = 0.3;

// --- Pattern mining outputs ---
pub const TEMPORAL_BASE_CONFIDENCE: f64 = 0.8;
pub const PEAK_TIMING_ADJUSTMENT: f64 = 0.9;
pub const HOURS_PER_DAY: usize = 24;

// --- Simulation ---
pub const DEFAULT_TRIALS: u32 = 10_000;
pub const CI_Z_95: f64 = 1.96;
pub const MIN_EXECUTION_TIME_HOURS: f64 = 0.1;
pub const EXECUTION_TIME_NOISE: f64 = 0.2;
pub const RESOURCE_NOISE: f64 = 0.15;
pub const RISK_NOISE: f64 = 0.1;

// --- Weather adjustment ---
pub const WEATHER_DEPENDENCY_THRESHOLD: f64 = 0.5;
pub const LOW_VISIBILITY_THRESHOLD: f64 = 50.0;
pub const LOW_VISIBILITY_PENALTY: f64 = 0.7;
pub const HIGH_WIND_THRESHOLD: f64 = 20.0;
pub const HIGH_WIND_PENALTY: f64 = 0.8;
pub const PRECIPITATION_THRESHOLD: f64 = 0.5;
pub const PRECIPITATION_PENALTY: f64 = 0.6;

// --- Timing adjustment ---
pub const PEAK_HOUR_FACTOR: f64 = 1.3;
pub const OFF_PEAK_FACTOR: f64 = 0.9;

// --- Intelligence adjustment ---
pub const LOW_INTEL_THRESHOLD: f64 = 30.0;
pub const LOW_INTEL_FACTOR: f64 = 0.5;
pub const MEDIUM_INTEL_THRESHOLD: f64 = 60.0;
pub const MEDIUM_INTEL_FACTOR: f64 = 0.8;

// --- Entity prioritization weights ---
pub const W_VALUE: f64 = 0.4;
pub const W_THREAT: f64 = 0.3;
pub const W_TIME_SENSITIVITY: f64 = 0.2;
pub const W_EXPOSURE: f64 = 0.1;

// --- Action selection weights ---
pub const W_SUCCESS: f64 = 0.6;
pub const W_RISK: f64 = 0.4;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "stratagem.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
