use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::types::{GeoTime, SunPosition};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const DAYS_PER_MONTH: f64 = 30.44;

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = normalize_angle(a - b);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

pub fn approximate_day_of_year(month: u32) -> f64 {
    month as f64 * DAYS_PER_MONTH
}

pub fn hour_angle(hour: f64) -> f64 {
    DEGREES_PER_HOUR * (hour - 12.0)
}

pub fn solar_declination(day_of_year: f64) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * (284.0 + day_of_year) / 365.0).sin()
}

/// Sun elevation in degrees, clamped at the horizon.
pub fn solar_elevation(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_elevation =
        dec_rad.sin() * lat_rad.sin() + dec_rad.cos() * lat_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_elevation.clamp(-1.0, 1.0).asin()).max(0.0)
}

/// Sun azimuth in degrees with 0° = south, normalized into [0, 360).
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let y = ha_rad.sin();
    let x = ha_rad.cos() * lat_rad.sin() - dec_rad.tan() * lat_rad.cos();
    normalize_angle(rad_to_deg(y.atan2(x)) + 180.0)
}

pub fn sun_position_at(latitude: f64, month: u32, hour: f64) -> SunPosition {
    let n = approximate_day_of_year(month);
    let decl = solar_declination(n);
    let ha = hour_angle(hour);
    SunPosition {
        day_of_year: n,
        declination: decl,
        hour_angle: ha,
        elevation: solar_elevation(latitude, decl, ha),
        azimuth: solar_azimuth(latitude, decl, ha),
    }
}

pub fn sun_position(geo: &GeoTime) -> SunPosition {
    sun_position_at(geo.latitude_deg, geo.month, geo.hour)
}

pub fn geo_time_from_datetime<Tz: TimeZone>(latitude: f64, dt: &DateTime<Tz>) -> GeoTime {
    let hour = dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    GeoTime {
        latitude_deg: latitude,
        month: dt.month(),
        hour,
    }
}

/// 0 = north here, unlike the south-referenced sun azimuth.
pub fn compass_direction(angle: f64) -> &'static str {
    let sector = ((normalize_angle(angle) + 22.5) / 45.0).floor() as usize;
    COMPASS_POINTS[sector % COMPASS_POINTS.len()]
}

impl GeoTime {
    pub fn from_datetime<Tz: TimeZone>(latitude: f64, dt: &DateTime<Tz>) -> Self {
        geo_time_from_datetime(latitude, dt)
    }
}
