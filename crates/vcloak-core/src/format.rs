//! Display helpers shared by the dashboards (en-US, USD)

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const MISSING: &str = "N/A";
const INVALID: &str = "Invalid Date";

fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    value
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.naive_local()))
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `May 1, 2024`
pub fn format_date(value: Option<&str>) -> String {
    match value.filter(|v| !v.is_empty()) {
        None => MISSING.to_string(),
        Some(v) => parse(v)
            .map(|dt| dt.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| INVALID.to_string()),
    }
}

/// `May 1, 2024, 09:05 AM`
pub fn format_date_time(value: Option<&str>) -> String {
    match value.filter(|v| !v.is_empty()) {
        None => MISSING.to_string(),
        Some(v) => parse(v)
            .map(|dt| dt.format("%b %-d, %Y, %I:%M %p").to_string())
            .unwrap_or_else(|| INVALID.to_string()),
    }
}

/// `$1,234.50`; missing amounts show as `$0.00`
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = amount.unwrap_or(0.0);
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// CSS badge class for a booking or account status
pub fn status_badge_class(status: Option<&str>) -> &'static str {
    match status.map(|s| s.to_lowercase()).as_deref() {
        Some("pending") => "badge-warning",
        Some("confirmed") | Some("active") => "badge-success",
        Some("completed") => "badge-info",
        Some("cancelled") => "badge-danger",
        _ => "badge-secondary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-05-01T10:20:30.123456")), "May 1, 2024");
        assert_eq!(format_date(Some("2024-12-25")), "Dec 25, 2024");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(Some("yesterday")), "Invalid Date");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time(Some("2024-05-01T09:05:00")),
            "May 1, 2024, 09:05 AM"
        );
        assert_eq!(
            format_date_time(Some("2024-05-01T21:30:00+00:00")),
            "May 1, 2024, 09:30 PM"
        );
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(None), "$0.00");
        assert_eq!(format_currency(Some(0.5)), "$0.50");
        assert_eq!(format_currency(Some(12.0)), "$12.00");
        assert_eq!(format_currency(Some(1234.5)), "$1,234.50");
        assert_eq!(format_currency(Some(1_000_000.0)), "$1,000,000.00");
        assert_eq!(format_currency(Some(-5.25)), "-$5.25");
    }

    #[test]
    fn test_status_badge_class() {
        assert_eq!(status_badge_class(Some("Pending")), "badge-warning");
        assert_eq!(status_badge_class(Some("confirmed")), "badge-success");
        assert_eq!(status_badge_class(Some("completed")), "badge-info");
        assert_eq!(status_badge_class(Some("cancelled")), "badge-danger");
        assert_eq!(status_badge_class(Some("inactive")), "badge-secondary");
        assert_eq!(status_badge_class(Some("archived")), "badge-secondary");
        assert_eq!(status_badge_class(None), "badge-secondary");
    }
}
