use crate::angles::deg_to_rad;

pub const INDIRECT_IMPACT_MULTIPLIER: f64 = 0.7;
pub const MAX_ELEVATION_PENALTY: f64 = 0.5;

pub fn impact_multiplier(direct_impact: bool) -> f64 {
    if direct_impact {
        1.0
    } else {
        INDIRECT_IMPACT_MULTIPLIER
    }
}

pub fn elevation_factor(elevation_deg: f64) -> f64 {
    let sin_el = deg_to_rad(elevation_deg.clamp(0.0, 90.0)).sin();
    1.0 + (1.0 - sin_el) * MAX_ELEVATION_PENALTY
}

// continuous at 10, 30 and 70
pub fn base_loss(shading_percentage: f64) -> f64 {
    let s = shading_percentage.clamp(0.0, 100.0);
    if s < 10.0 {
        s * 0.8
    } else if s < 30.0 {
        8.0 + (s - 10.0) * 1.2
    } else if s < 70.0 {
        32.0 + (s - 30.0) * 1.5
    } else {
        92.0 + (s - 70.0) * 0.3
    }
}

pub fn estimate_power_loss(
    shading_percentage: f64,
    direct_impact: bool,
    elevation_deg: f64,
) -> f64 {
    if shading_percentage <= 0.0 {
        return 0.0;
    }
    let loss = base_loss(shading_percentage)
        * impact_multiplier(direct_impact)
        * elevation_factor(elevation_deg);
    loss.clamp(0.0, 100.0)
}
