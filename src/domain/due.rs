//! Due-date parsing and display
//!
//! Parsing is forgiving: anything that does not look like a date-time becomes
//! `None` for that one card instead of failing the whole board. Display comes
//! in three styles, see [`DateStyle`].

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Date-time layouts with an explicit offset that RFC 3339 parsing rejects
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

/// Date-time layouts without an offset; these are taken as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// How due dates are displayed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// ISO-8601 with offset, e.g. `2024-05-01T12:00:00+00:00`
    Iso,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM`
    Local,
    /// Distance from now, e.g. `in 3 days`
    #[default]
    Relative,
}

impl DateStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateStyle::Iso => "iso",
            DateStyle::Local => "local",
            DateStyle::Relative => "relative",
        }
    }
}

/// Parses a raw due date; `None` when absent or unparseable
pub fn parse_due(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Formats a due date in the given style; absent dates format as ""
pub fn format_due(
    due: Option<&DateTime<FixedOffset>>,
    style: DateStyle,
    now: DateTime<Utc>,
) -> String {
    let Some(due) = due else {
        return String::new();
    };

    match style {
        DateStyle::Iso => format_iso(due),
        DateStyle::Local => format_local(due),
        DateStyle::Relative => format_relative(due, now),
    }
}

/// ISO-8601 with the original offset; sub-second digits only when present
pub fn format_iso(due: &DateTime<FixedOffset>) -> String {
    due.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// `YYYY-MM-DD HH:MM` in the machine's local timezone
pub fn format_local(due: &DateTime<FixedOffset>) -> String {
    due.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Human distance between `due` and `now`
///
/// Under a day the distance is shown in whole hours (truncated). Beyond that
/// future dates round up to days, months (30 days) or years (365 days); past
/// dates round months and years up but days down. A due date of exactly
/// `now` reads "0 days ago".
pub fn format_relative(due: &DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
    let diff = due.with_timezone(&Utc).signed_duration_since(now);
    let seconds = match diff.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => diff.num_milliseconds() as f64 / 1000.0,
    };
    let days = seconds / SECONDS_PER_DAY;

    if days != 0.0 && days.abs() < 1.0 {
        let hours = seconds / SECONDS_PER_HOUR;
        return if hours > 0.0 {
            format!("in {} hour(s)", hours.trunc() as i64)
        } else {
            format!("{} hour(s) ago", hours.abs().trunc() as i64)
        };
    }

    if days > 365.0 {
        format!("in {} year(s)", (days / 365.0).ceil() as i64)
    } else if days > 30.0 {
        format!("in {} month(s)", (days / 30.0).ceil() as i64)
    } else if days > 0.0 {
        format!("in {} days", days.ceil() as i64)
    } else if days < -365.0 {
        format!("{} year(s) ago", (days.abs() / 365.0).ceil() as i64)
    } else if days < -30.0 {
        format!("{} month(s) ago", (days.abs() / 30.0).ceil() as i64)
    } else {
        format!("{} days ago", days.abs().floor() as i64)
    }
}

/// Serializes an optional due date in ISO form (`null` when absent)
pub(crate) fn serialize_iso<S>(
    due: &Option<DateTime<FixedOffset>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match due {
        Some(dt) => serializer.serialize_str(&format_iso(dt)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn relative(offset: Duration) -> String {
        let due = (now() + offset).fixed_offset();
        format_relative(&due, now())
    }

    #[test]
    fn parse_rfc3339() {
        let dt = parse_due(Some("2024-05-01T12:00:00+02:00")).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(format_iso(&dt), "2024-05-01T12:00:00+02:00");
    }

    #[test]
    fn parse_offset_without_colon() {
        let dt = parse_due(Some("2024-05-01T12:00:00+0000")).unwrap();
        assert_eq!(format_iso(&dt), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn parse_naive_assumes_utc() {
        let dt = parse_due(Some("2024-05-01 08:30:00")).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert_eq!(format_iso(&dt), "2024-05-01T08:30:00+00:00");
    }

    #[test]
    fn parse_bare_date() {
        let dt = parse_due(Some("2024-05-01")).unwrap();
        assert_eq!(format_iso(&dt), "2024-05-01T00:00:00+00:00");
    }

    #[test]
    fn parse_garbage_is_none() {
        assert!(parse_due(Some("next tuesday-ish")).is_none());
        assert!(parse_due(Some("")).is_none());
        assert!(parse_due(Some("   ")).is_none());
        assert!(parse_due(None).is_none());
    }

    #[test]
    fn format_absent_is_empty() {
        for style in [DateStyle::Iso, DateStyle::Local, DateStyle::Relative] {
            assert_eq!(format_due(None, style, now()), "");
        }
    }

    #[test]
    fn format_local_shape() {
        let dt = parse_due(Some("2024-05-01T12:00:00+00:00")).unwrap();
        let local = format_local(&dt);
        assert_eq!(local.len(), "2024-05-01 12:00".len());
        assert_eq!(&local[4..5], "-");
        assert_eq!(&local[10..11], " ");
    }

    #[test]
    fn relative_hours() {
        assert_eq!(relative(Duration::hours(12)), "in 12 hour(s)");
        assert_eq!(relative(Duration::minutes(90)), "in 1 hour(s)");
        assert_eq!(relative(Duration::minutes(30)), "in 0 hour(s)");
        assert_eq!(relative(Duration::hours(-5)), "5 hour(s) ago");
        assert_eq!(relative(Duration::minutes(-150)), "2 hour(s) ago");
    }

    #[test]
    fn relative_exactly_now() {
        assert_eq!(relative(Duration::zero()), "0 days ago");
    }

    #[test]
    fn relative_future() {
        assert_eq!(relative(Duration::days(2)), "in 2 days");
        assert_eq!(relative(Duration::hours(36)), "in 2 days");
        assert_eq!(relative(Duration::days(30)), "in 30 days");
        assert_eq!(relative(Duration::days(31)), "in 2 month(s)");
        assert_eq!(relative(Duration::days(40)), "in 2 month(s)");
        assert_eq!(relative(Duration::days(365)), "in 13 month(s)");
        assert_eq!(relative(Duration::days(366)), "in 2 year(s)");
    }

    #[test]
    fn relative_keeps_microsecond_precision() {
        let just_over = Duration::days(30) + Duration::microseconds(1);
        assert_eq!(relative(just_over), "in 2 month(s)");
        assert_eq!(relative(Duration::microseconds(1)), "in 0 hour(s)");
    }

    #[test]
    fn relative_past() {
        assert_eq!(relative(Duration::days(-1)), "1 days ago");
        assert_eq!(relative(Duration::hours(-60)), "2 days ago");
        assert_eq!(relative(Duration::days(-30)), "30 days ago");
        assert_eq!(relative(Duration::days(-31)), "2 month(s) ago");
        assert_eq!(relative(Duration::days(-365)), "13 month(s) ago");
        assert_eq!(relative(Duration::days(-400)), "2 year(s) ago");
    }

    #[test]
    fn relative_ignores_offset() {
        let due = Utc
            .with_ymd_and_hms(2024, 6, 3, 12, 0, 0)
            .unwrap()
            .with_timezone(&FixedOffset::east_opt(-7 * 3600).unwrap());
        assert_eq!(format_relative(&due, now()), "in 2 days");
    }

    #[test]
    fn date_style_names() {
        assert_eq!(DateStyle::default(), DateStyle::Relative);
        assert_eq!(DateStyle::Iso.as_str(), "iso");
        assert_eq!(DateStyle::Local.as_str(), "local");
    }
}
