use crate::aggregate::aggregate_at;
use crate::angles::{deg_to_rad, sun_position_at};
use crate::types::{MonthlyProfile, Obstruction, TargetArray, TimeSeriesSample};

pub const HOURLY_FIRST_HOUR: u32 = 6;
pub const HOURLY_LAST_HOUR: u32 = 18;
pub const LEGACY_SAMPLE_HOURS: [u32; 3] = [9, 12, 15];
pub const WINDOW_EARLIEST_HOUR: f64 = 7.0;
pub const WINDOW_LATEST_HOUR: f64 = 17.0;

/// January first. Independent of latitude.
pub const DAYLIGHT_HOURS: [f64; 12] = [
    9.9, 10.9, 12.0, 13.1, 14.1, 14.6, 14.4, 13.6, 12.4, 11.3, 10.2, 9.6,
];

pub fn daylight_hours(month: u32) -> f64 {
    let idx = (month.clamp(1, 12) - 1) as usize;
    DAYLIGHT_HOURS[idx]
}

pub fn daylight_window(month: u32) -> (f64, f64) {
    let half = daylight_hours(month) / 2.0;
    (
        (12.0 - half).max(WINDOW_EARLIEST_HOUR),
        (12.0 + half).min(WINDOW_LATEST_HOUR),
    )
}

pub fn window_hours(window: (f64, f64)) -> Vec<u32> {
    let first = window.0.ceil() as u32;
    let last = window.1.floor() as u32;
    (first..=last).collect()
}

pub fn solar_intensity_weight(elevation_deg: f64, hour: f64) -> f64 {
    let altitude_term = deg_to_rad(elevation_deg).sin().max(0.0);
    let time_term = ((hour - 12.0) * std::f64::consts::PI / 12.0).cos().max(0.0);
    altitude_term * time_term
}

/// `None` when the sun is down or any value is non-finite.
pub fn sample_at(
    obstructions: &[Obstruction],
    array: &TargetArray,
    latitude: f64,
    month: u32,
    hour: f64,
) -> Option<TimeSeriesSample> {
    let sun = sun_position_at(latitude, month, hour);
    if sun.elevation <= 0.0 {
        tracing::debug!(month, hour, "sun below horizon, sample skipped");
        return None;
    }

    let agg = aggregate_at(obstructions, array, &sun);
    let dominant = agg.dominant_contribution();
    let sample = TimeSeriesSample {
        hour,
        elevation: sun.elevation,
        azimuth: sun.azimuth,
        effective_shadow_length_m: agg.max_effective_shadow_length_m,
        shading_percentage: dominant.map_or(0.0, |d| d.shading.shading_percentage),
        power_loss: agg.total_power_loss,
        direct_impact: dominant.is_some_and(|d| d.shading.direct_impact),
    };

    if sample.is_finite() {
        Some(sample)
    } else {
        tracing::debug!(month, hour, "non-finite sample skipped");
        None
    }
}

pub fn hourly_profile(
    obstructions: &[Obstruction],
    array: &TargetArray,
    latitude: f64,
    month: u32,
) -> Vec<TimeSeriesSample> {
    (HOURLY_FIRST_HOUR..=HOURLY_LAST_HOUR)
        .filter_map(|hour| sample_at(obstructions, array, latitude, month, hour as f64))
        .collect()
}

fn weighted_mean_loss(samples: &[TimeSeriesSample]) -> f64 {
    let (weighted, total_weight) = samples.iter().fold((0.0, 0.0), |(sum, w_sum), s| {
        let w = solar_intensity_weight(s.elevation, s.hour);
        (sum + s.power_loss * w, w_sum + w)
    });
    if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    }
}

pub fn legacy_unweighted_loss(
    obstructions: &[Obstruction],
    array: &TargetArray,
    latitude: f64,
    month: u32,
) -> f64 {
    let losses: Vec<f64> = LEGACY_SAMPLE_HOURS
        .iter()
        .filter_map(|&hour| sample_at(obstructions, array, latitude, month, hour as f64))
        .map(|s| s.power_loss)
        .collect();
    if losses.is_empty() {
        0.0
    } else {
        losses.iter().sum::<f64>() / losses.len() as f64
    }
}

pub fn monthly_profile(
    obstructions: &[Obstruction],
    array: &TargetArray,
    latitude: f64,
    month: u32,
) -> MonthlyProfile {
    let window = daylight_window(month);
    let samples: Vec<TimeSeriesSample> = window_hours(window)
        .into_iter()
        .filter_map(|hour| sample_at(obstructions, array, latitude, month, hour as f64))
        .collect();

    MonthlyProfile {
        month,
        daylight_hours: daylight_hours(month),
        daylight_window: window,
        weighted_average_loss: weighted_mean_loss(&samples),
        legacy_unweighted_loss: legacy_unweighted_loss(obstructions, array, latitude, month),
        samples,
    }
}

pub fn yearly_profile(
    obstructions: &[Obstruction],
    array: &TargetArray,
    latitude: f64,
) -> Vec<MonthlyProfile> {
    (1..=12)
        .map(|month| monthly_profile(obstructions, array, latitude, month))
        .collect()
}

pub fn yearly_profile_to_compact(profiles: &[MonthlyProfile]) -> Vec<Vec<(f64, f64)>> {
    profiles
        .iter()
        .map(|m| m.samples.iter().map(|s| (s.hour, s.power_loss)).collect())
        .collect()
}
