pub mod aggregate;
pub mod angles;
pub mod config;
pub mod error;
pub mod power_loss;
pub mod profile;
pub mod scenario;
pub mod shading;
pub mod shadow;
pub mod summary;
pub mod types;

pub use aggregate::{aggregate_at, aggregate_obstructions, contribution, distance_weight};

pub use angles::{
    angle_difference, approximate_day_of_year, compass_direction, deg_to_rad,
    geo_time_from_datetime, hour_angle, normalize_angle, rad_to_deg, solar_azimuth,
    solar_declination, solar_elevation, sun_position, sun_position_at, DAYS_PER_MONTH,
    DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use config::{ObstructionSpec, ScenarioConfig};

pub use error::ScenarioError;

pub use power_loss::{base_loss, elevation_factor, estimate_power_loss, impact_multiplier};

pub use profile::{
    daylight_hours, daylight_window, hourly_profile, legacy_unweighted_loss, monthly_profile,
    sample_at, solar_intensity_weight, window_hours, yearly_profile, yearly_profile_to_compact,
};

pub use scenario::{evaluate_batch, evaluate_scenario};

pub use shading::{grid_shading, inter_row_spacing, orientation_factor, panel_shading, tilt_factor};

pub use shadow::{project_shadow, shadow_projection_factor};

pub use summary::{
    daily_summary, impact_grade, layout_advice, required_height_raise, system_efficiency,
    tilt_advice, yearly_summary,
};

pub use types::{
    AggregateResult, DailySummary, GeoTime, GridShading, ImpactGrade, LayoutAdvice,
    MonthlyProfile, MultiPanelResult, Obstruction, ObstructionContribution, PanelShading,
    ScenarioResult, ScenarioSummary, ShadingGrid, ShadowResult, SunPosition, TargetArray,
    TiltAdvice, TimeSeriesSample, YearlySummary,
};
