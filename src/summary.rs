use crate::types::{
    DailySummary, ImpactGrade, LayoutAdvice, MonthlyProfile, TiltAdvice, TimeSeriesSample,
    YearlySummary,
};

pub const IMPACT_HOUR_LOSS_THRESHOLD: f64 = 10.0;
pub const LOW_IMPACT_LIMIT: f64 = 5.0;
pub const MEDIUM_IMPACT_LIMIT: f64 = 20.0;
pub const ADJUST_LAYOUT_AFFECTED_PERCENT: f64 = 10.0;
pub const REDESIGN_LAYOUT_AFFECTED_PERCENT: f64 = 30.0;
pub const LOW_TILT_DEG: f64 = 25.0;
pub const HIGH_TILT_DEG: f64 = 40.0;

pub fn impact_grade(power_loss: f64) -> ImpactGrade {
    if power_loss < LOW_IMPACT_LIMIT {
        ImpactGrade::Low
    } else if power_loss < MEDIUM_IMPACT_LIMIT {
        ImpactGrade::Medium
    } else {
        ImpactGrade::High
    }
}

pub fn layout_advice(affected_percentage: f64) -> LayoutAdvice {
    if affected_percentage > REDESIGN_LAYOUT_AFFECTED_PERCENT {
        LayoutAdvice::Redesign
    } else if affected_percentage > ADJUST_LAYOUT_AFFECTED_PERCENT {
        LayoutAdvice::AdjustPartially
    } else {
        LayoutAdvice::KeepLayout
    }
}

pub fn tilt_advice(panel_tilt_deg: f64) -> TiltAdvice {
    if panel_tilt_deg < LOW_TILT_DEG {
        TiltAdvice::Increase
    } else if panel_tilt_deg > HIGH_TILT_DEG {
        TiltAdvice::Decrease
    } else {
        TiltAdvice::Keep
    }
}

pub fn system_efficiency(total_power_loss: f64) -> f64 {
    (100.0 - total_power_loss).clamp(0.0, 100.0)
}

pub fn required_height_raise(effective_shadow_m: f64, distance_m: f64) -> f64 {
    (effective_shadow_m - distance_m).ceil().max(0.0)
}

/// `worst_hour` stays `None` unless some hour loses more than 0%; ties keep
/// the earlier hour.
pub fn daily_summary(hourly: &[TimeSeriesSample]) -> DailySummary {
    let impact_hours = hourly
        .iter()
        .filter(|s| s.power_loss > IMPACT_HOUR_LOSS_THRESHOLD)
        .count();
    let (worst_hour, worst_hour_loss) = hourly.iter().fold((None, 0.0), |(hour, loss), s| {
        if s.power_loss > loss {
            (Some(s.hour), s.power_loss)
        } else {
            (hour, loss)
        }
    });
    DailySummary {
        impact_hours,
        worst_hour,
        worst_hour_loss,
    }
}

pub fn yearly_summary(monthly: &[MonthlyProfile]) -> YearlySummary {
    if monthly.is_empty() {
        return YearlySummary {
            annual_average_loss: 0.0,
            worst_month: None,
            worst_month_loss: 0.0,
        };
    }
    let total: f64 = monthly.iter().map(|m| m.weighted_average_loss).sum();
    let (worst_month, worst_month_loss) = monthly.iter().fold((None, 0.0), |(month, loss), m| {
        if m.weighted_average_loss > loss {
            (Some(m.month), m.weighted_average_loss)
        } else {
            (month, loss)
        }
    });
    YearlySummary {
        annual_average_loss: total / monthly.len() as f64,
        worst_month,
        worst_month_loss,
    }
}
