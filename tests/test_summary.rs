use rooftop_shade::summary::*;
use rooftop_shade::types::*;

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

fn sample(hour: f64, power_loss: f64) -> TimeSeriesSample {
    TimeSeriesSample {
        hour,
        elevation: 45.0,
        azimuth: 180.0,
        effective_shadow_length_m: 0.0,
        shading_percentage: 0.0,
        power_loss,
        direct_impact: false,
    }
}

fn month(month: u32, weighted_average_loss: f64) -> MonthlyProfile {
    MonthlyProfile {
        month,
        daylight_hours: 12.0,
        daylight_window: (7.0, 17.0),
        weighted_average_loss,
        legacy_unweighted_loss: 0.0,
        samples: Vec::new(),
    }
}

// ── Grades and advice bands ──

#[test]
fn test_impact_grade_boundaries() {
    assert_eq!(impact_grade(0.0), ImpactGrade::Low);
    assert_eq!(impact_grade(4.999), ImpactGrade::Low);
    assert_eq!(impact_grade(5.0), ImpactGrade::Medium);
    assert_eq!(impact_grade(19.999), ImpactGrade::Medium);
    assert_eq!(impact_grade(20.0), ImpactGrade::High);
    assert_eq!(impact_grade(100.0), ImpactGrade::High);
}

#[test]
fn test_layout_advice_boundaries() {
    assert_eq!(layout_advice(0.0), LayoutAdvice::KeepLayout);
    assert_eq!(layout_advice(10.0), LayoutAdvice::KeepLayout);
    assert_eq!(layout_advice(10.01), LayoutAdvice::AdjustPartially);
    assert_eq!(layout_advice(30.0), LayoutAdvice::AdjustPartially);
    assert_eq!(layout_advice(30.01), LayoutAdvice::Redesign);
}

#[test]
fn test_tilt_advice_boundaries() {
    assert_eq!(tilt_advice(0.0), TiltAdvice::Increase);
    assert_eq!(tilt_advice(24.9), TiltAdvice::Increase);
    assert_eq!(tilt_advice(25.0), TiltAdvice::Keep);
    assert_eq!(tilt_advice(40.0), TiltAdvice::Keep);
    assert_eq!(tilt_advice(40.1), TiltAdvice::Decrease);
}

#[test]
fn test_system_efficiency() {
    assert_eq!(system_efficiency(0.0), 100.0);
    assert_approx!(system_efficiency(12.5), 87.5, 1e-12);
    assert_eq!(system_efficiency(100.0), 0.0);
}

#[test]
fn test_required_height_raise() {
    assert_eq!(required_height_raise(1.3, 20.0), 0.0);
    assert_eq!(required_height_raise(5.0, 5.0), 0.0);
    assert_eq!(required_height_raise(7.0, 5.0), 2.0);
    assert_eq!(required_height_raise(12.92, 5.0), 8.0);
}

// ── Daily ──

#[test]
fn test_daily_summary_counts_hours_over_ten_percent() {
    let hourly = [
        sample(6.0, 0.0),
        sample(7.0, 10.0),
        sample(8.0, 10.5),
        sample(9.0, 30.0),
        sample(10.0, 30.0),
        sample(11.0, 5.0),
    ];
    let d = daily_summary(&hourly);
    assert_eq!(d.impact_hours, 3);
    assert_eq!(d.worst_hour, Some(9.0));
    assert_eq!(d.worst_hour_loss, 30.0);
}

#[test]
fn test_daily_summary_without_loss() {
    let d = daily_summary(&[sample(12.0, 0.0), sample(13.0, 0.0)]);
    assert_eq!(d.impact_hours, 0);
    assert_eq!(d.worst_hour, None);
    assert_eq!(d.worst_hour_loss, 0.0);
    assert_eq!(daily_summary(&[]), d);
}

// ── Yearly ──

#[test]
fn test_yearly_summary_mean_and_worst_month() {
    let monthly: Vec<MonthlyProfile> = (1..=12)
        .map(|m| month(m, if m == 12 || m == 1 { 40.0 } else { 10.0 }))
        .collect();
    let y = yearly_summary(&monthly);
    assert_approx!(y.annual_average_loss, (2.0 * 40.0 + 10.0 * 10.0) / 12.0, 1e-12);
    assert_eq!(y.worst_month, Some(1));
    assert_eq!(y.worst_month_loss, 40.0);
}

#[test]
fn test_yearly_summary_empty_and_lossless() {
    let empty = yearly_summary(&[]);
    assert_eq!(empty.annual_average_loss, 0.0);
    assert_eq!(empty.worst_month, None);

    let clear = yearly_summary(&[month(1, 0.0), month(2, 0.0)]);
    assert_eq!(clear.annual_average_loss, 0.0);
    assert_eq!(clear.worst_month, None);
    assert_eq!(clear.worst_month_loss, 0.0);
}
