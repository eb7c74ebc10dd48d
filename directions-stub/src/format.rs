//! Human-readable distance and duration texts in the shape the real
//! directions service renders them.

pub fn format_distance_text(meters: f64) -> String {
    let rounded = meters.round();
    if rounded < 1_000.0 {
        format!("{} m", rounded as i64)
    } else if rounded < 10_000.0 {
        format!("{:.1} km", meters / 1_000.0)
    } else {
        format!("{} km", (meters / 1_000.0).round() as i64)
    }
}

pub fn format_duration_text(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round() as i64;
    if minutes < 1 {
        return "1 min".to_string();
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        return format!("{minutes} {}", min_unit(minutes));
    }
    let hour_part = format!("{hours} {}", if hours == 1 { "hour" } else { "hours" });
    if rest == 0 {
        hour_part
    } else {
        format!("{hour_part} {rest} {}", min_unit(rest))
    }
}

fn min_unit(count: i64) -> &'static str {
    if count == 1 { "min" } else { "mins" }
}
