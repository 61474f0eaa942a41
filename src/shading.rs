use crate::angles::{angle_difference, deg_to_rad};
use crate::types::{GridShading, PanelShading, ShadingGrid, ShadowResult, TargetArray};

pub const AFFECTED_THRESHOLD_PERCENT: f64 = 5.0;

pub fn tilt_factor(panel_tilt_deg: f64) -> f64 {
    deg_to_rad(panel_tilt_deg).cos()
}

pub fn orientation_factor(sun_azimuth_deg: f64, panel_orientation_deg: f64) -> f64 {
    deg_to_rad(angle_difference(sun_azimuth_deg, panel_orientation_deg))
        .cos()
        .max(0.0)
}

pub fn shading_from_penetration(
    penetration_m: f64,
    panel_depth_m: f64,
    tilt_factor: f64,
    orientation_factor: f64,
) -> f64 {
    if penetration_m <= 0.0 || panel_depth_m <= 0.0 {
        return 0.0;
    }
    let ratio = (penetration_m * tilt_factor / panel_depth_m).min(1.0);
    (ratio * orientation_factor * 100.0).clamp(0.0, 100.0)
}

pub fn shadow_on_roof(effective_shadow_m: f64, distance_m: f64) -> f64 {
    if effective_shadow_m <= distance_m {
        0.0
    } else {
        effective_shadow_m - distance_m
    }
}

pub fn panel_shading(
    shadow: &ShadowResult,
    distance_m: f64,
    array: &TargetArray,
    sun_azimuth_deg: f64,
) -> PanelShading {
    let on_panel = shadow_on_roof(shadow.effective_shadow_length_m, distance_m);
    if on_panel <= 0.0 {
        return PanelShading::NONE;
    }

    let tilt = tilt_factor(array.panel_tilt_deg);
    let orientation = orientation_factor(sun_azimuth_deg, array.panel_orientation_deg);
    PanelShading {
        shading_percentage: shading_from_penetration(
            on_panel,
            array.panel_depth_m,
            tilt,
            orientation,
        ),
        direct_impact: shadow.direct_impact,
        orientation_factor: orientation,
        tilt_factor: tilt,
    }
}

pub fn inter_row_spacing(array: &TargetArray) -> f64 {
    if array.rows <= 1 {
        return 0.0;
    }
    (array.roof_depth_m - array.rows as f64 * array.panel_depth_m) / (array.rows - 1) as f64
}

pub fn row_positions(array: &TargetArray) -> Vec<f64> {
    let pitch = array.panel_depth_m + inter_row_spacing(array);
    (0..array.rows).map(|row| row as f64 * pitch).collect()
}

/// Columns are not modelled: every cell in a row shares the row's value.
pub fn grid_shading(
    effective_shadow_m: f64,
    distance_m: f64,
    array: &TargetArray,
    sun_azimuth_deg: f64,
) -> GridShading {
    let on_roof = shadow_on_roof(effective_shadow_m, distance_m);
    if on_roof <= 0.0 {
        return summarize(ShadingGrid::zeros(array.rows, array.cols), 0.0);
    }

    let tilt = tilt_factor(array.panel_tilt_deg);
    let orientation = orientation_factor(sun_azimuth_deg, array.panel_orientation_deg);
    let row_values: Vec<f64> = row_positions(array)
        .into_iter()
        .map(|position| {
            let penetration = (on_roof - position).clamp(0.0, array.panel_depth_m);
            shading_from_penetration(penetration, array.panel_depth_m, tilt, orientation)
        })
        .collect();

    summarize(ShadingGrid::from_row_values(&row_values, array.cols), on_roof)
}

pub fn summarize(grid: ShadingGrid, shadow_on_roof_m: f64) -> GridShading {
    let total = grid.len();
    let affected = grid
        .cells()
        .iter()
        .filter(|&&s| s > AFFECTED_THRESHOLD_PERCENT)
        .count();
    let (affected_percentage, average) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            affected as f64 / total as f64 * 100.0,
            grid.cells().iter().sum::<f64>() / total as f64,
        )
    };
    GridShading {
        grid,
        total_panels: total,
        affected_count: affected,
        affected_percentage,
        average_shading_percentage: average,
        shadow_on_roof_m,
    }
}
