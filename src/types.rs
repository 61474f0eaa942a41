use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoTime {
    pub latitude_deg: f64,
    pub month: u32,
    pub hour: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunPosition {
    pub day_of_year: f64,
    pub declination: f64,
    pub hour_angle: f64,
    /// Degrees above the horizon, never negative.
    pub elevation: f64,
    /// Degrees in [0, 360), 0 = south.
    pub azimuth: f64,
}

/// Offsets are metres from the array's reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Obstruction {
    pub height_m: f64,
    pub orientation_deg: f64,
    pub offset_x_m: f64,
    pub offset_z_m: f64,
}

impl Obstruction {
    pub fn distance_m(&self) -> f64 {
        self.offset_x_m.hypot(self.offset_z_m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetArray {
    pub building_height_m: f64,
    pub roof_width_m: f64,
    pub roof_depth_m: f64,
    pub rows: usize,
    pub cols: usize,
    pub panel_width_m: f64,
    pub panel_depth_m: f64,
    /// Informational only: rows are spread evenly over `roof_depth_m`.
    pub row_spacing_m: f64,
    pub panel_tilt_deg: f64,
    pub panel_orientation_deg: f64,
}

impl TargetArray {
    pub fn total_panels(&self) -> usize {
        self.rows * self.cols
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowResult {
    pub base_shadow_length_m: f64,
    pub effective_shadow_length_m: f64,
    pub angle_diff_deg: f64,
    pub direct_impact: bool,
}

impl ShadowResult {
    pub const NONE: ShadowResult = ShadowResult {
        base_shadow_length_m: 0.0,
        effective_shadow_length_m: 0.0,
        angle_diff_deg: 0.0,
        direct_impact: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelShading {
    pub shading_percentage: f64,
    pub direct_impact: bool,
    pub orientation_factor: f64,
    pub tilt_factor: f64,
}

impl PanelShading {
    pub const NONE: PanelShading = PanelShading {
        shading_percentage: 0.0,
        direct_impact: false,
        orientation_factor: 0.0,
        tilt_factor: 0.0,
    };
}

/// Row-major, stored flat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadingGrid {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl ShadingGrid {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0.0; rows * cols],
        }
    }

    pub fn from_row_values(row_values: &[f64], cols: usize) -> Self {
        let rows = row_values.len();
        let mut cells = Vec::with_capacity(rows * cols);
        for &value in row_values {
            cells.extend(std::iter::repeat(value.clamp(0.0, 100.0)).take(cols));
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(|r| r.to_vec()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridShading {
    pub grid: ShadingGrid,
    pub total_panels: usize,
    pub affected_count: usize,
    pub affected_percentage: f64,
    pub average_shading_percentage: f64,
    pub shadow_on_roof_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstructionContribution {
    pub index: usize,
    pub distance_m: f64,
    pub shadow: ShadowResult,
    pub shading: PanelShading,
    pub power_loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub contributions: Vec<ObstructionContribution>,
    pub max_base_shadow_length_m: f64,
    pub max_effective_shadow_length_m: f64,
    pub max_angle_diff_deg: f64,
    pub total_power_loss: f64,
    /// Index into `contributions` of the obstruction driving `grid`.
    pub dominant: Option<usize>,
    pub grid: GridShading,
}

impl AggregateResult {
    pub fn dominant_contribution(&self) -> Option<&ObstructionContribution> {
        self.dominant.and_then(|i| self.contributions.get(i))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesSample {
    pub hour: f64,
    pub elevation: f64,
    pub azimuth: f64,
    pub effective_shadow_length_m: f64,
    pub shading_percentage: f64,
    pub power_loss: f64,
    pub direct_impact: bool,
}

impl TimeSeriesSample {
    pub fn is_finite(&self) -> bool {
        [
            self.hour,
            self.elevation,
            self.azimuth,
            self.effective_shadow_length_m,
            self.shading_percentage,
            self.power_loss,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProfile {
    pub month: u32,
    pub daylight_hours: f64,
    pub daylight_window: (f64, f64),
    pub weighted_average_loss: f64,
    pub legacy_unweighted_loss: f64,
    pub samples: Vec<TimeSeriesSample>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPanelResult {
    pub total_panels: usize,
    pub affected_panels: usize,
    pub affected_percentage: f64,
    pub average_shading_percentage: f64,
    pub total_power_loss: f64,
    pub shadow_on_roof_m: f64,
    pub shading_grid: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImpactGrade {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutAdvice {
    KeepLayout,
    AdjustPartially,
    Redesign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TiltAdvice {
    Increase,
    Keep,
    Decrease,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub impact_hours: usize,
    pub worst_hour: Option<f64>,
    pub worst_hour_loss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummary {
    pub annual_average_loss: f64,
    pub worst_month: Option<u32>,
    pub worst_month_loss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub impact_grade: ImpactGrade,
    pub system_efficiency: f64,
    pub layout_advice: LayoutAdvice,
    pub tilt_advice: TiltAdvice,
    pub required_height_raise_m: f64,
    pub daily: DailySummary,
    pub yearly: YearlySummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub shadow_length_m: f64,
    pub effective_shadow_m: f64,
    pub angle_diff_deg: f64,
    pub shading_percentage: f64,
    pub power_loss_percentage: f64,
    pub direct_impact: bool,
    pub orientation_factor: f64,
    pub dominant_obstruction: Option<usize>,
    pub multi_panel: MultiPanelResult,
    pub hourly_series: Vec<TimeSeriesSample>,
    pub monthly_series: Vec<MonthlyProfile>,
    pub summary: ScenarioSummary,
}
