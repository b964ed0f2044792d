use crate::station::{ObservableState, Planet, StationState, UNKNOWN, ViewState, fmt_reading};
use chrono::{DateTime, NaiveDate};
use itertools::Itertools;
use std::fmt::Write;

/// Renders the station overview. Absent readings are shown as "unknown".
pub fn render_status(station: &StationState) -> String {
    let t = station.transform();
    let battery = station.battery();
    let mut out = String::new();
    let _ = writeln!(out, "Station:          {}", station.name().unwrap_or(UNKNOWN));
    let _ = writeln!(out, "Battery:          {}", fmt_reading(battery.and_then(|b| b.level())));
    let _ = writeln!(
        out,
        "  degradation:    passive {} / load {}",
        fmt_reading(battery.and_then(|b| b.passive_degradation_rate())),
        fmt_reading(battery.and_then(|b| b.load_degradation_rate()))
    );
    let _ = writeln!(out, "Coordinates:      X: {:.2} Y: {:.2}", t.pos().x(), t.pos().y());
    let _ = writeln!(out, "Required speed:   {}", fmt_reading(t.required_linear_speed()));
    let _ = writeln!(out, "Linear speed:     {}", fmt_reading(t.linear_speed()));
    let _ = writeln!(out, "Acceleration:     {}", fmt_reading(station.linear_speed_acceleration()));
    let _ = writeln!(out, "Rotation target:  {}", fmt_reading(t.required_rotation_speed_cw_deg()));
    let _ = writeln!(out, "Rotation speed:   {}", fmt_reading(t.rotation_speed_cw_deg()));
    let _ = writeln!(
        out,
        "Rotation accel.:  {}",
        fmt_reading(station.rotation_speed_degrees_acceleration())
    );
    let _ = write!(out, "Direction:        {}", fmt_reading(t.direction_angle_deg()));
    out
}

/// Renders the map: planets relative to the station, nearest first.
pub fn render_map(state: &ObservableState) -> String {
    match state.view() {
        ViewState::Loading => return "Loading map ...".to_string(),
        ViewState::NotReady(msg) => return format!("Map unavailable: {msg}"),
        ViewState::Ready => {}
    }
    let mut out = String::new();
    if let Some(station) = state.station() {
        let _ = writeln!(
            out,
            "Station at {} heading {} (sample #{})",
            station.pos(),
            fmt_reading(station.transform().direction_angle_deg()),
            state.last_sample()
        );
    }
    for planet in state
        .planets()
        .iter()
        .sorted_by(|a, b| a.coordinates().abs().total_cmp(&b.coordinates().abs()))
    {
        let c = planet.coordinates();
        let _ = writeln!(
            out,
            "  #{:<4} {:<16} dx {:>10.1}  dy {:>10.1}  dist {:>10.1}",
            planet.id(),
            planet.name().unwrap_or(UNKNOWN),
            c.x(),
            c.y(),
            c.abs()
        );
    }
    if !state.show_control_overlay() {
        let _ = writeln!(out, "(controls cooling down)");
    }
    if let Some(err) = state.command_error() {
        let _ = writeln!(out, "Last command failed: {err}");
    }
    out.trim_end().to_string()
}

/// Renders the planet catalogue with descriptive data.
pub fn render_catalogue(planets: &[Planet]) -> String {
    if planets.is_empty() {
        return "No planets in scan range".to_string();
    }
    planets
        .iter()
        .map(|p| {
            format!(
                "#{} {}\n  discovered: {}\n  radius: {}  mass: {}\n  image: {}{}",
                p.id(),
                p.name().unwrap_or(UNKNOWN),
                p.discovery_date().map_or_else(|| UNKNOWN.to_string(), fmt_date),
                fmt_reading(p.radius()),
                fmt_reading(p.mass()),
                p.image_url().unwrap_or(UNKNOWN),
                p.description().map(|d| format!("\n  {d}")).unwrap_or_default()
            )
        })
        .join("\n")
}

/// Shortens a server timestamp to its date, leaving unparsable input as is.
fn fmt_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().to_string();
    }
    if let Ok(dt) = raw.parse::<chrono::NaiveDateTime>() {
        return dt.date().to_string();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_or_else(|_| raw.to_string(), |d| d.to_string())
}
