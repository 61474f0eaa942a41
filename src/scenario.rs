use rayon::prelude::*;

use crate::aggregate::aggregate_at;
use crate::angles::sun_position;
use crate::config::ScenarioConfig;
use crate::error::ScenarioError;
use crate::profile::{hourly_profile, yearly_profile};
use crate::summary::{
    daily_summary, impact_grade, layout_advice, required_height_raise, system_efficiency,
    tilt_advice, yearly_summary,
};
use crate::types::{MultiPanelResult, ScenarioResult, ScenarioSummary};

/// The primary building is always obstruction 0, so the set evaluated here is
/// never empty. Use [`crate::aggregate::aggregate_obstructions`] for an
/// arbitrary (possibly empty) obstruction list.
pub fn evaluate_scenario(config: &ScenarioConfig) -> Result<ScenarioResult, ScenarioError> {
    if let Err(e) = config.validate() {
        tracing::warn!("{e}");
        return Err(e);
    }

    let geo = config.geo_time();
    let array = config.target_array();
    let obstructions = config.obstruction_set();
    tracing::debug!(
        latitude = geo.latitude_deg,
        month = geo.month,
        hour = geo.hour,
        obstructions = obstructions.len(),
        "evaluating scenario"
    );

    let sun = sun_position(&geo);
    let agg = aggregate_at(&obstructions, &array, &sun);
    let dominant = agg.dominant_contribution().copied();

    let multi_panel = MultiPanelResult {
        total_panels: agg.grid.total_panels,
        affected_panels: agg.grid.affected_count,
        affected_percentage: agg.grid.affected_percentage,
        average_shading_percentage: agg.grid.average_shading_percentage,
        total_power_loss: agg.total_power_loss,
        shadow_on_roof_m: agg.grid.shadow_on_roof_m,
        shading_grid: agg.grid.grid.to_nested(),
    };

    let hourly_series = hourly_profile(&obstructions, &array, geo.latitude_deg, geo.month);
    let monthly_series = yearly_profile(&obstructions, &array, geo.latitude_deg);
    let summary = ScenarioSummary {
        impact_grade: impact_grade(agg.total_power_loss),
        system_efficiency: system_efficiency(multi_panel.total_power_loss),
        layout_advice: layout_advice(multi_panel.affected_percentage),
        tilt_advice: tilt_advice(config.panel_tilt_deg),
        required_height_raise_m: dominant.map_or(0.0, |d| {
            required_height_raise(d.shadow.effective_shadow_length_m, d.distance_m)
        }),
        daily: daily_summary(&hourly_series),
        yearly: yearly_summary(&monthly_series),
    };

    let result = ScenarioResult {
        elevation_deg: sun.elevation,
        azimuth_deg: sun.azimuth,
        shadow_length_m: agg.max_base_shadow_length_m,
        effective_shadow_m: agg.max_effective_shadow_length_m,
        angle_diff_deg: agg.max_angle_diff_deg,
        shading_percentage: dominant.map_or(0.0, |d| d.shading.shading_percentage),
        power_loss_percentage: agg.total_power_loss,
        direct_impact: dominant.is_some_and(|d| d.shading.direct_impact),
        orientation_factor: dominant.map_or(0.0, |d| d.shading.orientation_factor),
        dominant_obstruction: agg.dominant,
        multi_panel,
        hourly_series,
        monthly_series,
        summary,
    };

    tracing::debug!(
        elevation = result.elevation_deg,
        power_loss = result.power_loss_percentage,
        affected_panels = result.multi_panel.affected_panels,
        impact_grade = ?result.summary.impact_grade,
        "scenario evaluated"
    );
    Ok(result)
}

pub fn evaluate_batch(configs: &[ScenarioConfig]) -> Vec<Result<ScenarioResult, ScenarioError>> {
    configs.par_iter().map(evaluate_scenario).collect()
}
