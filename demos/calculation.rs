use std::error::Error;

use tracing_subscriber::EnvFilter;

use rooftop_shade::angles::compass_direction;
use rooftop_shade::config::ScenarioConfig;
use rooftop_shade::profile::yearly_profile_to_compact;
use rooftop_shade::scenario::evaluate_scenario;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ScenarioConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => ScenarioConfig::default(),
    };
    let result = evaluate_scenario(&config)?;

    println!("=== Rooftop Shading Calculation ===");
    println!(
        "Site: {:.4}°, month {}, {:.1}h",
        config.latitude_deg, config.month_index, config.hour_of_day
    );
    println!(
        "Obstruction faces {} ({:.0}°), panels face {} ({:.0}°)",
        compass_direction(config.building_orientation_deg),
        config.building_orientation_deg,
        compass_direction(config.panel_orientation_deg),
        config.panel_orientation_deg
    );
    println!();
    println!("--- Sun ---");
    println!("Elevation: {:.1}°", result.elevation_deg);
    println!("Azimuth: {:.1}° (0°=S)", result.azimuth_deg);
    println!();
    println!("--- Shadow ---");
    println!("Shadow length: {:.1} m", result.shadow_length_m);
    println!("Effective shadow: {:.1} m", result.effective_shadow_m);
    println!("Angle difference: {:.1}°", result.angle_diff_deg);
    println!("Shading: {:.1}%", result.shading_percentage);
    println!("Power loss: {:.1}%", result.power_loss_percentage);
    println!("Direct impact: {}", result.direct_impact);
    println!();
    let mp = &result.multi_panel;
    println!("--- Array ---");
    println!(
        "Affected panels: {}/{} ({:.1}%)",
        mp.affected_panels, mp.total_panels, mp.affected_percentage
    );
    println!("Average shading: {:.1}%", mp.average_shading_percentage);
    println!("Shadow on roof: {:.1} m", mp.shadow_on_roof_m);
    println!();
    println!("--- Hourly ---");
    for s in &result.hourly_series {
        println!(
            "{:>4.0}h  elev {:>5.1}°  shadow {:>6.1} m  shading {:>5.1}%  loss {:>5.1}%",
            s.hour, s.elevation, s.effective_shadow_length_m, s.shading_percentage, s.power_loss
        );
    }
    println!();
    println!("--- Monthly ---");
    let compact = yearly_profile_to_compact(&result.monthly_series);
    for (m, curve) in result.monthly_series.iter().zip(&compact) {
        println!(
            "{:>2}: weighted {:>5.1}%  legacy {:>5.1}%  window {:.1}-{:.1}h  samples {}",
            m.month,
            m.weighted_average_loss,
            m.legacy_unweighted_loss,
            m.daylight_window.0,
            m.daylight_window.1,
            curve.len()
        );
    }
    println!();
    let summary = &result.summary;
    println!("--- Summary ---");
    println!("Impact grade: {:?}", summary.impact_grade);
    println!("System efficiency: {:.1}%", summary.system_efficiency);
    println!("Layout: {:?}", summary.layout_advice);
    println!("Tilt: {:?} ({:.0}°)", summary.tilt_advice, config.panel_tilt_deg);
    println!("Raise install height by: {:.0} m", summary.required_height_raise_m);
    match summary.daily.worst_hour {
        Some(hour) => println!(
            "Shadow impact: {} h/day, worst at {:.0}h ({:.1}%)",
            summary.daily.impact_hours, hour, summary.daily.worst_hour_loss
        ),
        None => println!("Shadow impact: {} h/day", summary.daily.impact_hours),
    }
    println!(
        "Annual average loss: {:.1}%, worst month loss: {:.1}%",
        summary.yearly.annual_average_loss, summary.yearly.worst_month_loss
    );
    Ok(())
}
