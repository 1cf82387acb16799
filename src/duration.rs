// src/duration.rs
//! Rough human-readable durations for "last seen X ago" display

/// Format a millisecond duration as an approximate label, using the
/// coarsest unit that keeps the number readable.
///
/// The conversions cascade: each stage rounds, then the rounded value feeds
/// the next threshold check. 59500ms therefore rounds up to 60s and comes
/// out as "1mins", not "60s". The output is a rough label, not a precise
/// calendar duration.
pub fn rough_duration(ms: u64) -> String {
    if ms == 0 {
        return "0s".to_string();
    }
    if ms < 1000 {
        return format!("{}ms", ms);
    }

    let s = (ms as f64 / 1000.0).round();
    if s < 60.0 {
        return format!("{}s", s as u64);
    }

    let mins = (s / 60.0).round();
    if mins < 60.0 {
        return format!("{}mins", mins as u64);
    }

    let hrs = (mins / 60.0).round();
    if hrs < 60.0 {
        return format!("{}hrs", hrs as u64);
    }

    const ONE_YEAR_DAYS: f64 = 365.25;

    let days = (hrs / 24.0 * 10.0).round() / 10.0;
    if days < ONE_YEAR_DAYS {
        return format!("{} days", days);
    }

    let years = (days / ONE_YEAR_DAYS * 10.0).round() / 10.0;
    format!("{:.1} years", years)
}
