use rooftop_shade::config::ScenarioConfig;
use rooftop_shade::shading::*;
use rooftop_shade::types::{PanelShading, ShadingGrid, ShadowResult, TargetArray};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const COS_30: f64 = 0.866_025_403_784_438_6;

fn default_array() -> TargetArray {
    ScenarioConfig::default().target_array()
}

fn shadow(effective: f64, direct: bool) -> ShadowResult {
    ShadowResult {
        base_shadow_length_m: effective,
        effective_shadow_length_m: effective,
        angle_diff_deg: if direct { 0.0 } else { 180.0 },
        direct_impact: direct,
    }
}

// ── Factors ──

#[test]
fn test_tilt_factor() {
    assert_approx!(tilt_factor(0.0), 1.0, 1e-12);
    assert_approx!(tilt_factor(30.0), COS_30, 1e-12);
    assert_approx!(tilt_factor(90.0), 0.0, 1e-12);
}

#[test]
fn test_orientation_factor_clamped_at_zero() {
    assert_approx!(orientation_factor(180.0, 180.0), 1.0, 1e-12);
    assert_approx!(orientation_factor(240.0, 180.0), 0.5, 1e-12);
    assert_approx!(orientation_factor(270.0, 180.0), 0.0, 1e-12);
    assert_eq!(orientation_factor(0.0, 180.0), 0.0);
}

// ── Single panel ──

#[test]
fn test_shadow_short_of_array_leaves_panel_clear() {
    let array = default_array();
    assert_eq!(panel_shading(&shadow(20.0, true), 20.0, &array, 180.0), PanelShading::NONE);
    assert_eq!(panel_shading(&shadow(3.0, true), 20.0, &array, 180.0), PanelShading::NONE);
}

#[test]
fn test_half_metre_on_tilted_panel() {
    let array = default_array();
    let p = panel_shading(&shadow(20.5, true), 20.0, &array, 180.0);
    assert_approx!(p.shading_percentage, 50.0 * COS_30, 1e-9);
    assert!(p.direct_impact);
    assert_approx!(p.tilt_factor, COS_30, 1e-12);
    assert_approx!(p.orientation_factor, 1.0, 1e-12);
}

#[test]
fn test_flat_panel_uses_full_depth() {
    let array = TargetArray {
        panel_tilt_deg: 0.0,
        ..default_array()
    };
    let p = panel_shading(&shadow(20.5, false), 20.0, &array, 180.0);
    assert_approx!(p.shading_percentage, 50.0, 1e-9);
    assert!(!p.direct_impact);
}

#[test]
fn test_deep_shadow_saturates_at_full_coverage() {
    let array = TargetArray {
        panel_tilt_deg: 0.0,
        ..default_array()
    };
    let p = panel_shading(&shadow(40.0, true), 20.0, &array, 180.0);
    assert_approx!(p.shading_percentage, 100.0, 1e-9);
}

#[test]
fn test_panel_facing_away_from_sun_is_unshaded() {
    let array = default_array();
    let p = panel_shading(&shadow(40.0, true), 20.0, &array, 0.0);
    assert_eq!(p.shading_percentage, 0.0);
}

#[test]
fn test_shading_from_penetration_monotonic() {
    let mut last = 0.0;
    for step in 0..=40 {
        let s = shading_from_penetration(step as f64 * 0.05, 1.0, COS_30, 0.8);
        assert!(s >= last, "step {}: {} < {}", step, s, last);
        assert!((0.0..=100.0).contains(&s));
        last = s;
    }
}

// ── Row layout ──

#[test]
fn test_inter_row_spacing_spreads_rows_over_roof() {
    let array = default_array();
    assert_approx!(inter_row_spacing(&array), 15.0 / 14.0, 1e-12);
    let positions = row_positions(&array);
    assert_eq!(positions.len(), 15);
    assert_eq!(positions[0], 0.0);
    assert_approx!(positions[14] + array.panel_depth_m, array.roof_depth_m, 1e-9);
}

#[test]
fn test_configured_row_spacing_does_not_move_rows() {
    let array = default_array();
    let wide = TargetArray {
        row_spacing_m: 6.0,
        ..array
    };
    assert_eq!(row_positions(&wide), row_positions(&array));
    assert_eq!(
        grid_shading(25.0, 20.0, &wide, 180.0),
        grid_shading(25.0, 20.0, &array, 180.0)
    );
}

#[test]
fn test_single_row_has_no_spacing() {
    let array = TargetArray {
        rows: 1,
        ..default_array()
    };
    assert_eq!(inter_row_spacing(&array), 0.0);
    assert_eq!(row_positions(&array), vec![0.0]);
}

#[test]
fn test_shadow_on_roof() {
    assert_eq!(shadow_on_roof(10.0, 20.0), 0.0);
    assert_eq!(shadow_on_roof(20.0, 20.0), 0.0);
    assert_approx!(shadow_on_roof(25.0, 20.0), 5.0, 1e-12);
}

// ── Grid ──

#[test]
fn test_grid_unreached_is_all_zero() {
    let array = default_array();
    let g = grid_shading(15.0, 20.0, &array, 180.0);
    assert_eq!(g.grid.rows(), 15);
    assert_eq!(g.grid.cols(), 10);
    assert_eq!(g.total_panels, 150);
    assert_eq!(g.affected_count, 0);
    assert_eq!(g.average_shading_percentage, 0.0);
    assert_eq!(g.shadow_on_roof_m, 0.0);
    assert!(g.grid.cells().iter().all(|&c| c == 0.0));
}

#[test]
fn test_grid_five_metres_on_roof() {
    let array = default_array();
    let g = grid_shading(25.0, 20.0, &array, 180.0);
    let full = 100.0 * COS_30;
    let partial = (5.0 - 2.0 * (1.0 + 15.0 / 14.0)) * COS_30 * 100.0;

    assert_approx!(g.shadow_on_roof_m, 5.0, 1e-12);
    assert_approx!(g.grid.get(0, 0).unwrap(), full, 1e-9);
    assert_approx!(g.grid.get(1, 9).unwrap(), full, 1e-9);
    assert_approx!(g.grid.get(2, 4).unwrap(), partial, 1e-9);
    assert_eq!(g.grid.get(3, 0), Some(0.0));
    assert_eq!(g.affected_count, 30);
    assert_approx!(g.affected_percentage, 20.0, 1e-9);
    assert_approx!(g.average_shading_percentage, (2.0 * full + partial) / 15.0, 1e-9);
}

#[test]
fn test_grid_rows_are_uniform_across_columns() {
    let array = default_array();
    let g = grid_shading(27.3, 20.0, &array, 200.0);
    for r in 0..g.grid.rows() {
        let row = g.grid.row(r).unwrap();
        assert!(row.iter().all(|&c| c == row[0]), "row {}", r);
    }
}

#[test]
fn test_grid_shading_decreases_away_from_obstruction() {
    let array = default_array();
    let g = grid_shading(35.0, 20.0, &array, 180.0);
    let firsts: Vec<f64> = (0..g.grid.rows()).map(|r| g.grid.get(r, 0).unwrap()).collect();
    for w in firsts.windows(2) {
        assert!(w[0] >= w[1], "{:?}", firsts);
    }
}

#[test]
fn test_grid_affected_count_matches_threshold() {
    let array = default_array();
    for effective in [20.5, 22.0, 25.0, 31.0, 60.0] {
        let g = grid_shading(effective, 20.0, &array, 190.0);
        let over = g.grid.cells().iter().filter(|&&c| c > AFFECTED_THRESHOLD_PERCENT).count();
        assert_eq!(g.affected_count, over, "effective {}", effective);
        assert!(g.affected_count <= g.total_panels);
        assert_eq!(g.total_panels, array.rows * array.cols);
    }
}

// ── ShadingGrid ──

#[test]
fn test_grid_indexing_and_nesting() {
    let grid = ShadingGrid::from_row_values(&[10.0, 20.0, 120.0], 2);
    assert_eq!(grid.len(), 6);
    assert_eq!(grid.get(1, 1), Some(20.0));
    assert_eq!(grid.get(2, 0), Some(100.0));
    assert_eq!(grid.get(3, 0), None);
    assert_eq!(grid.get(0, 2), None);
    assert_eq!(grid.row(2), Some(&[100.0, 100.0][..]));
    assert_eq!(
        grid.to_nested(),
        vec![vec![10.0, 10.0], vec![20.0, 20.0], vec![100.0, 100.0]]
    );
}

#[test]
fn test_zero_grid_dimensions() {
    let grid = ShadingGrid::zeros(4, 3);
    assert_eq!(grid.to_nested().len(), 4);
    assert!(grid.to_nested().iter().all(|r| r.len() == 3));
    assert!(!grid.is_empty());
}
