use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;
use crate::types::{GeoTime, Obstruction, TargetArray};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstructionSpec {
    pub x: f64,
    pub z: f64,
    #[serde(default)]
    pub orientation_deg: f64,
    /// Falls back to the scenario's `building_height_m`.
    #[serde(default)]
    pub height_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioConfig {
    pub building_height_m: f64,
    pub solar_building_height_m: f64,
    pub distance_m: f64,
    pub panel_width_m: f64,
    pub panel_depth_m: f64,
    pub roof_width_m: f64,
    pub roof_depth_m: f64,
    pub panel_rows: usize,
    pub panel_cols: usize,
    pub row_spacing_m: f64,
    pub latitude_deg: f64,
    pub month_index: u32,
    pub hour_of_day: f64,
    pub building_orientation_deg: f64,
    pub panel_orientation_deg: f64,
    pub panel_tilt_deg: f64,
    pub obstructions: Vec<ObstructionSpec>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            building_height_m: 15.0,
            solar_building_height_m: 10.0,
            distance_m: 20.0,
            panel_width_m: 2.0,
            panel_depth_m: 1.0,
            roof_width_m: 50.0,
            roof_depth_m: 30.0,
            panel_rows: 15,
            panel_cols: 10,
            row_spacing_m: 2.0,
            latitude_deg: 37.5665,
            month_index: 6,
            hour_of_day: 12.0,
            building_orientation_deg: 180.0,
            panel_orientation_deg: 180.0,
            panel_tilt_deg: 30.0,
            obstructions: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn geo_time(&self) -> GeoTime {
        GeoTime {
            latitude_deg: self.latitude_deg,
            month: self.month_index,
            hour: self.hour_of_day,
        }
    }

    pub fn target_array(&self) -> TargetArray {
        TargetArray {
            building_height_m: self.solar_building_height_m,
            roof_width_m: self.roof_width_m,
            roof_depth_m: self.roof_depth_m,
            rows: self.panel_rows,
            cols: self.panel_cols,
            panel_width_m: self.panel_width_m,
            panel_depth_m: self.panel_depth_m,
            row_spacing_m: self.row_spacing_m,
            panel_tilt_deg: self.panel_tilt_deg,
            panel_orientation_deg: self.panel_orientation_deg,
        }
    }

    /// The primary building is always index 0.
    pub fn obstruction_set(&self) -> Vec<Obstruction> {
        let primary = Obstruction {
            height_m: self.building_height_m,
            orientation_deg: self.building_orientation_deg,
            offset_x_m: self.distance_m,
            offset_z_m: 0.0,
        };
        std::iter::once(primary)
            .chain(self.obstructions.iter().map(|spec| Obstruction {
                height_m: spec.height_m.unwrap_or(self.building_height_m),
                orientation_deg: spec.orientation_deg,
                offset_x_m: spec.x,
                offset_z_m: spec.z,
            }))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        validate_geo_time(&self.geo_time())?;
        validate_target_array(&self.target_array())?;
        non_negative("distanceM", self.distance_m)?;
        non_negative("buildingHeightM", self.building_height_m)?;
        finite("buildingOrientationDeg", self.building_orientation_deg)?;
        for (i, obstruction) in self.obstruction_set().iter().skip(1).enumerate() {
            validate_obstruction(i, obstruction)?;
        }
        Ok(())
    }
}

fn finite(field: &str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScenarioError::invalid(field, value, "must be a finite number"))
    }
}

fn positive(field: &str, value: f64) -> Result<(), ScenarioError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::invalid(field, value, "must be positive"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ScenarioError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::invalid(field, value, "must not be negative"))
    }
}

fn within(
    field: &str,
    value: f64,
    lo: f64,
    hi: f64,
    reason: &'static str,
) -> Result<(), ScenarioError> {
    finite(field, value)?;
    if (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(ScenarioError::invalid(field, value, reason))
    }
}

pub fn validate_geo_time(geo: &GeoTime) -> Result<(), ScenarioError> {
    within("latitudeDeg", geo.latitude_deg, -90.0, 90.0, "must lie in [-90, 90]")?;
    if !(1..=12).contains(&geo.month) {
        return Err(ScenarioError::invalid(
            "monthIndex",
            geo.month as f64,
            "must lie in 1..=12",
        ));
    }
    finite("hourOfDay", geo.hour)
}

pub fn validate_target_array(array: &TargetArray) -> Result<(), ScenarioError> {
    if array.rows <= 1 {
        return Err(ScenarioError::degenerate(format!(
            "panelRows = {} leaves no row spacing to distribute; at least 2 rows are required",
            array.rows
        )));
    }
    if array.cols == 0 {
        return Err(ScenarioError::degenerate("panelCols must be at least 1"));
    }
    non_negative("solarBuildingHeightM", array.building_height_m)?;
    positive("roofWidthM", array.roof_width_m)?;
    positive("roofDepthM", array.roof_depth_m)?;
    positive("panelWidthM", array.panel_width_m)?;
    positive("panelDepthM", array.panel_depth_m)?;
    non_negative("rowSpacingM", array.row_spacing_m)?;
    within("panelTiltDeg", array.panel_tilt_deg, 0.0, 90.0, "must lie in [0, 90]")?;
    finite("panelOrientationDeg", array.panel_orientation_deg)?;

    let occupied = array.rows as f64 * array.panel_depth_m;
    if occupied > array.roof_depth_m {
        return Err(ScenarioError::degenerate(format!(
            "{} rows of {} m panels need {} m but the roof is only {} m deep",
            array.rows, array.panel_depth_m, occupied, array.roof_depth_m
        )));
    }
    Ok(())
}

pub fn validate_obstruction(index: usize, obstruction: &Obstruction) -> Result<(), ScenarioError> {
    non_negative(&format!("obstructions[{index}].heightM"), obstruction.height_m)?;
    finite(&format!("obstructions[{index}].orientationDeg"), obstruction.orientation_deg)?;
    finite(&format!("obstructions[{index}].x"), obstruction.offset_x_m)?;
    finite(&format!("obstructions[{index}].z"), obstruction.offset_z_m)
}
