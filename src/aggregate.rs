use crate::angles::sun_position;
use crate::config::{validate_geo_time, validate_obstruction, validate_target_array};
use crate::error::ScenarioError;
use crate::power_loss::estimate_power_loss;
use crate::shading::{grid_shading, panel_shading, summarize};
use crate::shadow::project_shadow;
use crate::types::{
    AggregateResult, GeoTime, Obstruction, ObstructionContribution, ShadingGrid, SunPosition,
    TargetArray,
};

pub fn distance_weight(distance_m: f64) -> f64 {
    1.0 / (distance_m + 1.0)
}

pub fn contribution(
    index: usize,
    obstruction: &Obstruction,
    array: &TargetArray,
    sun: &SunPosition,
) -> ObstructionContribution {
    let distance = obstruction.distance_m();
    let shadow = project_shadow(
        obstruction.height_m,
        array.building_height_m,
        sun.elevation,
        sun.azimuth,
        obstruction.orientation_deg,
    );
    let shading = panel_shading(&shadow, distance, array, sun.azimuth);
    let power_loss = estimate_power_loss(
        shading.shading_percentage,
        shading.direct_impact,
        sun.elevation,
    );
    tracing::trace!(
        index,
        distance,
        effective_shadow = shadow.effective_shadow_length_m,
        shading = shading.shading_percentage,
        power_loss,
        "obstruction contribution"
    );
    ObstructionContribution {
        index,
        distance_m: distance,
        shadow,
        shading,
        power_loss,
    }
}

fn outranks(candidate: &ObstructionContribution, current: &ObstructionContribution) -> bool {
    candidate.power_loss > current.power_loss
        || (candidate.power_loss == current.power_loss
            && candidate.shadow.angle_diff_deg < current.shadow.angle_diff_deg)
}

#[derive(Default)]
struct Fold {
    max_base: f64,
    max_effective: f64,
    max_angle: f64,
    weighted_loss: f64,
    weight_sum: f64,
    dominant: Option<usize>,
}

/// Shadows are not merged: length and angle maxima are tracked per metric and
/// may come from different obstructions. The grid follows the largest loss;
/// ties go to the smaller sun/obstruction angle, then to the earlier entry.
pub fn aggregate_at(
    obstructions: &[Obstruction],
    array: &TargetArray,
    sun: &SunPosition,
) -> AggregateResult {
    let contributions: Vec<ObstructionContribution> = obstructions
        .iter()
        .enumerate()
        .map(|(i, o)| contribution(i, o, array, sun))
        .collect();

    let fold = contributions.iter().enumerate().fold(Fold::default(), |mut acc, (i, c)| {
        acc.max_base = acc.max_base.max(c.shadow.base_shadow_length_m);
        acc.max_effective = acc.max_effective.max(c.shadow.effective_shadow_length_m);
        acc.max_angle = acc.max_angle.max(c.shadow.angle_diff_deg);
        let weight = distance_weight(c.distance_m);
        acc.weighted_loss += c.power_loss * weight;
        acc.weight_sum += weight;
        acc.dominant = match acc.dominant {
            Some(d) if !outranks(c, &contributions[d]) => Some(d),
            _ => Some(i),
        };
        acc
    });

    let total_power_loss = if fold.weight_sum > 0.0 {
        fold.weighted_loss / fold.weight_sum
    } else {
        0.0
    };

    let grid = match fold.dominant.map(|d| &contributions[d]) {
        Some(d) => grid_shading(
            d.shadow.effective_shadow_length_m,
            d.distance_m,
            array,
            sun.azimuth,
        ),
        None => summarize(ShadingGrid::zeros(array.rows, array.cols), 0.0),
    };

    if let Some(d) = fold.dominant {
        tracing::debug!(
            dominant = d,
            obstructions = contributions.len(),
            total_power_loss,
            "selected dominant obstruction"
        );
    }

    AggregateResult {
        contributions,
        max_base_shadow_length_m: fold.max_base,
        max_effective_shadow_length_m: fold.max_effective,
        max_angle_diff_deg: fold.max_angle,
        total_power_loss,
        dominant: fold.dominant,
        grid,
    }
}

/// An empty obstruction list is valid and yields an all-zero result.
pub fn aggregate_obstructions(
    obstructions: &[Obstruction],
    array: &TargetArray,
    geo: &GeoTime,
) -> Result<AggregateResult, ScenarioError> {
    validate_geo_time(geo)?;
    validate_target_array(array)?;
    for (i, o) in obstructions.iter().enumerate() {
        validate_obstruction(i, o)?;
    }
    Ok(aggregate_at(obstructions, array, &sun_position(geo)))
}
