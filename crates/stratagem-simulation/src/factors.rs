//! Multiplicative adjustment factors applied to the nominal success
//! probability: weather, timing, intelligence.

use stratagem_core::config::{
    HIGH_WIND_PENALTY, HIGH_WIND_THRESHOLD, LOW_INTEL_FACTOR, LOW_INTEL_THRESHOLD,
    LOW_VISIBILITY_PENALTY, LOW_VISIBILITY_THRESHOLD, MEDIUM_INTEL_FACTOR,
    MEDIUM_INTEL_THRESHOLD, OFF_PEAK_FACTOR, PEAK_HOUR_FACTOR, PRECIPITATION_PENALTY,
    PRECIPITATION_THRESHOLD, WEATHER_DEPENDENCY_THRESHOLD,
};
use stratagem_core::types::{Action, WeatherConditions};

/// Weather adjustment for one action under the given conditions.
///
/// Weather-insensitive actions (dependency ≤ 0.5) are unaffected; for the
/// rest, the penalties compose multiplicatively.
pub fn weather_factor(action: &Action, weather: &WeatherConditions) -> f64 {
    if action.weather_dependency <= WEATHER_DEPENDENCY_THRESHOLD {
        return 1.0;
    }
    let mut factor = 1.0;
    if weather.visibility < LOW_VISIBILITY_THRESHOLD {
        factor *= LOW_VISIBILITY_PENALTY;
    }
    if weather.wind_speed > HIGH_WIND_THRESHOLD {
        factor *= HIGH_WIND_PENALTY;
    }
    if weather.precipitation > PRECIPITATION_THRESHOLD {
        factor *= PRECIPITATION_PENALTY;
    }
    factor
}

/// Timing adjustment for a trial hour against a peak-hour set.
///
/// `None` means no temporal pattern matched the entity's category.
pub fn timing_factor(hour: u32, peak_hours: Option<&[u32]>) -> f64 {
    match peak_hours {
        Some(peaks) if peaks.contains(&hour) => PEAK_HOUR_FACTOR,
        Some(_) => OFF_PEAK_FACTOR,
        None => 1.0,
    }
}

/// Tiered intelligence-quality adjustment.
pub fn intelligence_factor(intel_quality: f64) -> f64 {
    if intel_quality < LOW_INTEL_THRESHOLD {
        LOW_INTEL_FACTOR
    } else if intel_quality < MEDIUM_INTEL_THRESHOLD {
        MEDIUM_INTEL_FACTOR
    } else {
        1.0
    }
}
