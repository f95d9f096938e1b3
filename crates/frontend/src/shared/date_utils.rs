//! Date and time helpers for list cells and chat bubbles.

use chrono::{NaiveDate, NaiveTime, Timelike};

/// 12-hour clock, e.g. "9:05 AM"
pub fn format_time(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if pm { "PM" } else { "AM" })
}

/// Day distance from `today` in words
pub fn relative_day(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        n if n > 1 => format!("In {n} days"),
        n => format!("{} days ago", -n),
    }
}

/// Value of an `<input type="date">`; blank or malformed gives `None`.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value to put back into an `<input type="date">`
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(NaiveTime::from_hms_opt(9, 5, 0).unwrap()), "9:05 AM");
        assert_eq!(format_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), "12:00 AM");
        assert_eq!(format_time(NaiveTime::from_hms_opt(18, 30, 0).unwrap()), "6:30 PM");
    }

    #[test]
    fn test_relative_day() {
        let today = d(2025, 1, 15);
        assert_eq!(relative_day(today, today), "Today");
        assert_eq!(relative_day(d(2025, 1, 16), today), "Tomorrow");
        assert_eq!(relative_day(d(2025, 1, 14), today), "Yesterday");
        assert_eq!(relative_day(d(2025, 1, 20), today), "In 5 days");
        assert_eq!(relative_day(d(2024, 12, 31), today), "15 days ago");
    }

    #[test]
    fn test_input_date() {
        assert_eq!(parse_input_date("2025-01-15"), Some(d(2025, 1, 15)));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("15.01.2025"), None);
        assert_eq!(input_date(d(2025, 2, 3)), "2025-02-03");
    }
}
