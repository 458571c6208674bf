//! Date helper functions

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `YYYY[-MM[-DD]]`, then an optional `T`/space time `HH:MM[:SS[.fff]]`
    /// with an optional `Z` or `±HH[:]MM` offset
    static ref ISO_RE: Regex = Regex::new(
        r"^([0-9]{4})(?:-([0-9]{2})(?:-([0-9]{2}))?)?(?:[Tt ]([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:[.,]([0-9]{1,9}))?)?([Zz]|[+-][0-9]{2}:?[0-9]{2})?)?$"
    )
    .expect("timestamp pattern is valid");
}

/// Parse a `publishedAt`-style timestamp into an instant.
///
/// Accepts RFC 3339 and the shorter ISO 8601 forms: `2024`, `2024-06` and
/// `2024-01-15` read as UTC at the start of the period, `2024-01-15T10:30Z`
/// or `2024-01-15T10:30+02:00` with an explicit offset, and date-times
/// without an offset (`2024-01-15 10:30:00`) read as local time.
/// Anything else yields `None`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let caps = ISO_RE.captures(s)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, number(2).unwrap_or(1), number(3).unwrap_or(1))?;

    let Some(hour) = number(4) else {
        // Date-only forms are UTC
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    };

    let nanos = caps
        .get(7)
        .map(|m| format!("{:0<9}", m.as_str()).parse::<u32>())
        .transpose()
        .ok()?
        .unwrap_or(0);
    let time = NaiveTime::from_hms_nano_opt(hour, number(5)?, number(6).unwrap_or(0), nanos)?;
    let naive = date.and_time(time);

    match caps.get(8).map(|m| m.as_str()) {
        None => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc)),
        Some("Z") | Some("z") => Some(naive.and_utc()),
        Some(offset) => {
            let offset = parse_offset(offset)?;
            offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        }
    }
}

/// Parse `+HH:MM`, `-HHMM` and the like into a fixed offset
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let sign = if s.starts_with('-') { -1 } else { 1 };
    let digits: String = s[1..].chars().filter(|c| *c != ':').collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..4)?.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Sort key for a timestamp: milliseconds since the epoch, 0 when unparsable
pub fn timestamp_millis(s: &str) -> i64 {
    parse_timestamp(s)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Current time in ISO 8601 form with millisecond precision, e.g. `2024-01-15T10:30:00.000Z`
pub fn iso_now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Format date in full format (like "January 1, 2024")
pub fn full_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Format a date string for display, optionally followed by how long ago it was.
///
/// # Examples
/// ```ignore
/// format_date("2024-01-01", false) // -> "January 1, 2024"
/// format_date("2024-01-01", true)  // -> "January 1, 2024 (2y ago)"
/// ```
pub fn format_date(date: &str, include_relative: bool) -> String {
    format_date_at(date, include_relative, Utc::now())
}

/// Same as [`format_date`], measuring the relative part from `now`
pub fn format_date_at(date: &str, include_relative: bool, now: DateTime<Utc>) -> String {
    if date.is_empty() {
        return String::new();
    }

    // Bare dates are read as local midnight
    let candidate = if date.contains('T') {
        Cow::Borrowed(date)
    } else {
        Cow::Owned(format!("{}T00:00:00", date))
    };

    let Some(target) = parse_timestamp(&candidate) else {
        return date.to_string();
    };

    let full = full_date(&target.with_timezone(&Local));
    if !include_relative {
        return full;
    }

    format!("{} ({})", full, relative_date(&target, &now))
}

/// Get relative time (like "3d ago").
///
/// The distance is taken as an absolute value, so dates after `now`
/// are labelled "ago" as well.
pub fn relative_date(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let diff_ms = now
        .signed_duration_since(*date)
        .num_milliseconds()
        .unsigned_abs();

    let seconds = round_div(diff_ms, 1000);
    let minutes = round_div(seconds, 60);
    let hours = round_div(minutes, 60);
    let days = round_div(hours, 24);
    let months = round_div(days, 30);
    let years = round_div(days, 365);

    if years > 0 {
        format!("{}y ago", years)
    } else if months > 0 {
        format!("{}mo ago", months)
    } else if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "Just now".to_string()
    }
}

/// Integer division rounding halves up
fn round_div(value: u64, divisor: u64) -> u64 {
    (2 * value + divisor) / (2 * divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn local_midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn relative_after(elapsed: Duration) -> String {
        let now = local_midnight(2024, 1, 1) + elapsed;
        format_date_at("2024-01-01", true, now)
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(
            parse_timestamp("2024-01-15T10:30:00Z").unwrap().to_rfc3339(),
            "2024-01-15T10:30:00+00:00"
        );
        assert_eq!(
            parse_timestamp("2024-01-15T10:30:00+02:00")
                .unwrap()
                .to_rfc3339(),
            "2024-01-15T08:30:00+00:00"
        );
        assert_eq!(
            parse_timestamp("2024-01-15").unwrap().to_rfc3339(),
            "2024-01-15T00:00:00+00:00"
        );
        assert!(parse_timestamp("2024-01-15T10:30:00").is_some());
        assert!(parse_timestamp("2024-01-15 10:30").is_some());
        assert!(parse_timestamp("2024-01-15T10:30:00.25").is_some());
    }

    #[test]
    fn test_parse_timestamp_minute_precision_with_offset() {
        assert_eq!(
            parse_timestamp("2024-01-15T10:30Z").unwrap().to_rfc3339(),
            "2024-01-15T10:30:00+00:00"
        );
        assert_eq!(
            parse_timestamp("2024-01-15T10:30+02:00")
                .unwrap()
                .to_rfc3339(),
            "2024-01-15T08:30:00+00:00"
        );
        assert_eq!(
            parse_timestamp("2024-01-15T10:30-0530")
                .unwrap()
                .to_rfc3339(),
            "2024-01-15T16:00:00+00:00"
        );
    }

    #[test]
    fn test_parse_timestamp_fraction_with_offset() {
        assert_eq!(
            parse_timestamp("2024-01-15T10:30:00.5Z")
                .unwrap()
                .timestamp_millis()
                % 1000,
            500
        );
    }

    #[test]
    fn test_parse_timestamp_partial_dates() {
        assert_eq!(
            parse_timestamp("2024-06").unwrap().to_rfc3339(),
            "2024-06-01T00:00:00+00:00"
        );
        assert_eq!(
            parse_timestamp("2024").unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_parse_timestamp_out_of_range_fields() {
        assert!(parse_timestamp("2024-00").is_none());
        assert!(parse_timestamp("2024-01-15T25:00Z").is_none());
        assert!(parse_timestamp("2024-01-15T10:30+02:75").is_none());
        assert!(parse_timestamp("20240").is_none());
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("2024-13-45").is_none());
        assert_eq!(timestamp_millis("yesterday"), 0);
    }

    #[test]
    fn test_iso_now_is_parseable() {
        let now = iso_now();
        assert!(now.ends_with('Z'));
        assert!(parse_timestamp(&now).is_some());
    }

    #[test]
    fn test_full_date() {
        let date = Local.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(full_date(&date), "January 5, 2024");
    }

    #[test]
    fn test_format_date_empty() {
        assert_eq!(format_date("", false), "");
        assert_eq!(format_date("", true), "");
    }

    #[test]
    fn test_format_date_without_relative() {
        assert_eq!(format_date("2024-01-01", false), "January 1, 2024");
        assert_eq!(format_date("2023-12-25T18:00:00", false), "December 25, 2023");
    }

    #[test]
    fn test_format_date_partial_dates() {
        assert_eq!(format_date("2024-06", false), "June 1, 2024");
        assert_eq!(format_date("2024", false), "January 1, 2024");
    }

    #[test]
    fn test_format_date_minute_precision_with_offset() {
        for input in ["2024-01-15T10:30Z", "2024-01-15T10:30+02:00"] {
            let formatted = format_date(input, false);
            assert_ne!(formatted, input);
            assert!(formatted.starts_with("January 1"));
            assert!(formatted.ends_with(", 2024"));
        }
    }

    #[test]
    fn test_format_date_with_relative() {
        let formatted = format_date("2024-01-01", true);
        assert!(formatted.starts_with("January 1, 2024 ("));
        assert!(formatted.ends_with(" ago)") || formatted.ends_with("(Just now)"));
    }

    #[test]
    fn test_format_date_invalid_echoes_input() {
        assert_eq!(format_date("someday", false), "someday");
        assert_eq!(format_date("someday", true), "someday");
        assert_eq!(format_date("2024-02-30", true), "2024-02-30");
    }

    #[test]
    fn test_relative_buckets() {
        assert_eq!(relative_after(Duration::seconds(10)), "January 1, 2024 (Just now)");
        assert_eq!(relative_after(Duration::seconds(30)), "January 1, 2024 (1m ago)");
        assert_eq!(relative_after(Duration::minutes(5)), "January 1, 2024 (5m ago)");
        assert_eq!(relative_after(Duration::hours(3)), "January 1, 2024 (3h ago)");
        assert_eq!(relative_after(Duration::days(2)), "January 1, 2024 (2d ago)");
        assert_eq!(relative_after(Duration::days(45)), "January 1, 2024 (2mo ago)");
        assert_eq!(relative_after(Duration::days(400)), "January 1, 2024 (1y ago)");
    }

    #[test]
    fn test_relative_rounds_years_early() {
        // 200 days rounds to one year before the month bucket is consulted
        assert_eq!(relative_after(Duration::days(200)), "January 1, 2024 (1y ago)");
    }

    #[test]
    fn test_future_dates_read_as_ago() {
        assert_eq!(relative_after(Duration::days(-3)), "January 1, 2024 (3d ago)");
    }

    #[test]
    fn test_round_div() {
        assert_eq!(round_div(29, 60), 0);
        assert_eq!(round_div(30, 60), 1);
        assert_eq!(round_div(182, 365), 0);
        assert_eq!(round_div(183, 365), 1);
    }
}
