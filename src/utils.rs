/// Distance the way riders see it, e.g. "0.50 km"
pub fn format_km(distance_km: f64) -> String {
    format!("{distance_km:.2} km")
}

/// Duration the way riders see it, e.g. "30.00 minutes"
pub fn format_minutes(minutes: f64) -> String {
    format!("{minutes:.2} minutes")
}
