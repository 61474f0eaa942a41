use crate::angles::{angle_difference, deg_to_rad};
use crate::types::ShadowResult;

pub fn shadow_projection_factor(angle_diff_deg: f64) -> f64 {
    deg_to_rad(angle_diff_deg).cos().abs()
}

/// The `|cos(angle_diff)|` attenuation approximates the footprint; it is not
/// an exact projection.
pub fn project_shadow(
    obstruction_height_m: f64,
    target_height_m: f64,
    elevation_deg: f64,
    sun_azimuth_deg: f64,
    obstruction_orientation_deg: f64,
) -> ShadowResult {
    let height_diff = obstruction_height_m - target_height_m;
    if height_diff <= 0.0 || elevation_deg <= 0.0 {
        return ShadowResult::NONE;
    }

    let angle_diff = angle_difference(sun_azimuth_deg, obstruction_orientation_deg);
    let base = (height_diff / deg_to_rad(elevation_deg).tan()).max(0.0);
    let effective = (base * shadow_projection_factor(angle_diff)).max(0.0);

    ShadowResult {
        base_shadow_length_m: base,
        effective_shadow_length_m: effective,
        angle_diff_deg: angle_diff,
        direct_impact: angle_diff < 90.0,
    }
}
