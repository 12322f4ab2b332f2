use chrono::{Datelike, NaiveDate};

/// Parses a `publishedAt` value, either a plain date or an ISO date-time.
/// Only the date part matters, the time of day is dropped.
pub fn parse_published_date(buf: &str) -> Result<NaiveDate, String> {
    let date_part = buf.trim().split('T').next().unwrap_or("");
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(e) => Err(format!("Unable to parse date {}: {}", buf, e)),
    }
}

/// Formats a publish date as `Jan 12, 2025`, optionally followed by how long
/// ago that was relative to `today`. Values that are not dates are returned as is.
pub fn format_date(buf: &str, include_relative: bool, today: NaiveDate) -> String {
    let Ok(date) = parse_published_date(buf) else {
        return buf.to_string();
    };

    let full_date = date.format("%b %-d, %Y").to_string();
    if !include_relative {
        return full_date;
    }

    format!("{} ({})", full_date, relative_age(date, today))
}

// Field by field, the way a calendar reads: a year boundary counts as a year
// even when it was crossed yesterday.
fn relative_age(date: NaiveDate, today: NaiveDate) -> String {
    let years_ago = today.year() - date.year();
    let months_ago = today.month() as i32 - date.month() as i32;
    let days_ago = today.day() as i32 - date.day() as i32;

    if years_ago > 0 {
        format!("{}y ago", years_ago)
    } else if months_ago > 0 {
        format!("{}mo ago", months_ago)
    } else if days_ago > 0 {
        format!("{}d ago", days_ago)
    } else {
        "Today".to_string()
    }
}
