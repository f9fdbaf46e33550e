use chrono::{DateTime, Local};

/// Parse a display duration such as "3:45" or "1:02:03" into seconds
pub fn parse_duration(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    let mut parts = 0;
    for part in text.split(':') {
        let value: u64 = part.trim().parse().ok()?;
        // Every field after the first is a base-60 digit
        if parts > 0 && value >= 60 {
            return None;
        }
        total = total.checked_mul(60)?.checked_add(value)?;
        parts += 1;
    }

    if parts > 3 {
        return None;
    }
    Some(total)
}

/// Format seconds as m:ss (or h:mm:ss past an hour)
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// RFC 3339 timestamp rendered in local time. Unparseable input is returned as-is.
pub fn format_local_datetime(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%b %-d, %Y %H:%M")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Month and year, used for "member since"
pub fn format_month_year(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Local).format("%B %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Short local date for list rows
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Local).format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("3:45"), Some(225));
        assert_eq!(parse_duration("0:07"), Some(7));
        assert_eq!(parse_duration("1:02:03"), Some(3723));
        assert_eq!(parse_duration("42"), Some(42));
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("3:75"), None);
        assert_eq!(parse_duration("live"), None);
        assert_eq!(parse_duration("1:1:1:1"), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(5.9), "0:05");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3725.0), "1:02:05");
    }

    #[test]
    fn test_invalid_timestamps_pass_through() {
        assert_eq!(format_local_datetime("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_month_year() {
        // Mid-month so every timezone lands in the same month
        assert_eq!(format_month_year("2024-01-15T12:00:00Z"), "January 2024");
    }

    #[test]
    fn test_local_datetime_contains_year() {
        let formatted = format_local_datetime("2023-06-15T12:00:00.000Z");
        assert!(formatted.contains("2023"), "{}", formatted);
        assert!(formatted.starts_with("Jun"), "{}", formatted);
    }
}
