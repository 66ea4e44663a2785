//! Time formatting shared by the contact relay and the footer.

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Formats a timestamp the way the relay templates display it,
/// e.g. `18 Oct 2026, 14:03:09` (24-hour clock).
pub fn relay_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d %b %Y, %H:%M:%S").to_string()
}

/// Relay timestamp for the current local time.
pub fn relay_timestamp_now() -> String {
    relay_timestamp(&Local::now())
}

/// Calendar year shown in the footer copyright line.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_relay_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 14, 3, 9).unwrap();
        assert_eq!(relay_timestamp(&at), "18 Oct 2026, 14:03:09");
    }

    #[test]
    fn test_relay_timestamp_pads_day_and_uses_24_hour_clock() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let at = ist.with_ymd_and_hms(2025, 3, 4, 21, 0, 5).unwrap();
        assert_eq!(relay_timestamp(&at), "04 Mar 2025, 21:00:05");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
