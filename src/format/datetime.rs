//! Date parsing, truncation and labels

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use crate::model::TemporalUnit;
use crate::settings::{FormatSettings, TimeStyle};

/// Canonical date-only argument format
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Canonical date-time argument format
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const EN_DASH: &str = "–";

/// Parse an ISO-8601 date or date-time string. Offsets are dropped and the
/// wall-clock time is kept.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_local());
        }
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0);
    }
    // "2024-03" and "2024"
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match s.split('-').collect::<Vec<_>>().as_slice() {
        [year, month] if year.len() == 4 && month.len() == 2 && is_digits(*year) && is_digits(*month) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?.and_hms_opt(0, 0, 0)
        }
        [year] if year.len() == 4 && is_digits(*year) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1)?.and_hms_opt(0, 0, 0)
        }
        _ => None,
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn days_since_week_start(weekday: Weekday, start_of_week: Weekday) -> u32 {
    (weekday.num_days_from_monday() + 7 - start_of_week.num_days_from_monday()) % 7
}

/// Truncate to the unit's truncation base (`day-of-month` truncates like `day`)
fn base_unit(unit: TemporalUnit) -> TemporalUnit {
    match unit {
        TemporalUnit::MinuteOfHour => TemporalUnit::Minute,
        TemporalUnit::HourOfDay => TemporalUnit::Hour,
        TemporalUnit::DayOfWeek | TemporalUnit::DayOfMonth | TemporalUnit::DayOfYear => TemporalUnit::Day,
        TemporalUnit::WeekOfYear => TemporalUnit::Week,
        TemporalUnit::MonthOfYear => TemporalUnit::Month,
        TemporalUnit::QuarterOfYear => TemporalUnit::Quarter,
        other => other,
    }
}

pub fn start_of(dt: NaiveDateTime, unit: TemporalUnit, start_of_week: Weekday) -> NaiveDateTime {
    let date = dt.date();
    match base_unit(unit) {
        TemporalUnit::Minute => dt.with_second(0).and_then(|d| d.with_nanosecond(0)).unwrap_or(dt),
        TemporalUnit::Hour => date.and_hms_opt(dt.hour(), 0, 0).unwrap_or(dt),
        TemporalUnit::Week => {
            let offset = days_since_week_start(date.weekday(), start_of_week);
            midnight(date - Duration::days(i64::from(offset)))
        }
        TemporalUnit::Month => midnight(date.with_day(1).unwrap_or(date)),
        TemporalUnit::Quarter => {
            let month = (date.month0() / 3) * 3 + 1;
            NaiveDate::from_ymd_opt(date.year(), month, 1).map(midnight).unwrap_or(dt)
        }
        TemporalUnit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).map(midnight).unwrap_or(dt),
        _ => midnight(date),
    }
}

/// Last millisecond of the unit containing `dt`
pub fn end_of(dt: NaiveDateTime, unit: TemporalUnit, start_of_week: Weekday) -> NaiveDateTime {
    let start = start_of(dt, unit, start_of_week);
    let next = match base_unit(unit) {
        TemporalUnit::Minute => Some(start + Duration::minutes(1)),
        TemporalUnit::Hour => Some(start + Duration::hours(1)),
        TemporalUnit::Week => Some(start + Duration::days(7)),
        TemporalUnit::Month => start.checked_add_months(Months::new(1)),
        TemporalUnit::Quarter => start.checked_add_months(Months::new(3)),
        TemporalUnit::Year => start.checked_add_months(Months::new(12)),
        _ => Some(start + Duration::days(1)),
    };
    next.map(|n| n - Duration::milliseconds(1)).unwrap_or(start)
}

/// Expand one or two timestamps to the full span of `unit` they cover,
/// in chronological order. A single timestamp spans its own unit.
pub fn normalize_range(
    values: &[NaiveDateTime],
    unit: TemporalUnit,
    settings: &FormatSettings,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let first = *values.first()?;
    let second = values.get(1).copied().unwrap_or(first);
    let (a, b) = if second < first { (second, first) } else { (first, second) };
    Some((
        start_of(a, unit, settings.start_of_week),
        end_of(b, unit, settings.start_of_week),
    ))
}

/// `1st`, `2nd`, `3rd`, `11th`, `22nd`
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Week number where week 1 is the week containing January 1st
pub fn week_of_year(date: NaiveDate, start_of_week: Weekday) -> u32 {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let offset = days_since_week_start(jan1.weekday(), start_of_week);
    (date.ordinal0() + offset) / 7 + 1
}

fn quarter(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

pub fn format_date(dt: NaiveDateTime) -> String {
    dt.format("%B %-d, %Y").to_string()
}

fn format_time(dt: NaiveDateTime, style: TimeStyle) -> String {
    match style {
        TimeStyle::TwelveHour => dt.format("%-I:%M %p").to_string(),
        TimeStyle::TwentyFourHour => dt.format("%H:%M").to_string(),
    }
}

pub(crate) fn format_hour(dt: NaiveDateTime, style: TimeStyle) -> String {
    match style {
        TimeStyle::TwelveHour => dt.format("%-I %p").to_string(),
        TimeStyle::TwentyFourHour => dt.format("%H:00").to_string(),
    }
}

/// Full date, with the time of day when it is not midnight
pub fn format_date_time(dt: NaiveDateTime, settings: &FormatSettings) -> String {
    if dt.time() == NaiveTime::MIN {
        format_date(dt)
    } else {
        format!("{}, {}", format_date(dt), format_time(dt, settings.time_style))
    }
}

/// Label for a single value of a column bucketed by `unit`
pub fn format_with_unit(dt: NaiveDateTime, unit: TemporalUnit, settings: &FormatSettings) -> String {
    let date = dt.date();
    match unit {
        TemporalUnit::Minute => format!("{}, {}", format_date(dt), format_time(dt, settings.time_style)),
        TemporalUnit::Hour => format!("{}, {}", format_date(dt), format_hour(dt, settings.time_style)),
        TemporalUnit::Day => format_date(dt),
        TemporalUnit::Week => format_range_with_unit(&[dt], TemporalUnit::Week, TemporalUnit::Day, settings),
        TemporalUnit::Month => dt.format("%B %Y").to_string(),
        TemporalUnit::Quarter => format!("Q{} {}", quarter(date), date.year()),
        TemporalUnit::Year => date.year().to_string(),
        TemporalUnit::MinuteOfHour => dt.minute().to_string(),
        TemporalUnit::HourOfDay => format_hour(dt, settings.time_style),
        TemporalUnit::DayOfWeek => dt.format("%A").to_string(),
        TemporalUnit::DayOfMonth => date.day().to_string(),
        TemporalUnit::DayOfYear => date.ordinal().to_string(),
        TemporalUnit::WeekOfYear => ordinal(week_of_year(date, settings.start_of_week)),
        TemporalUnit::MonthOfYear => dt.format("%B").to_string(),
        TemporalUnit::QuarterOfYear => format!("Q{}", quarter(date)),
    }
}

/// Label for the span covered by `values` at `unit`, rendered at `resolution`.
///
/// Parts shared by both ends are written once: `March 3–9, 2024`,
/// `January–March 2024`, `Q1–Q3 2024`, `2022–2024`.
pub fn format_range_with_unit(
    values: &[NaiveDateTime],
    unit: TemporalUnit,
    resolution: TemporalUnit,
    settings: &FormatSettings,
) -> String {
    let Some((start, end)) = normalize_range(values, unit, settings) else {
        return String::new();
    };
    let (s, e) = (start.date(), end.date());
    let same_year = s.year() == e.year();

    match resolution {
        TemporalUnit::Year => {
            if same_year {
                s.year().to_string()
            } else {
                format!("{}{}{}", s.year(), EN_DASH, e.year())
            }
        }
        TemporalUnit::Quarter => {
            if same_year && quarter(s) == quarter(e) {
                format!("Q{} {}", quarter(s), s.year())
            } else if same_year {
                format!("Q{}{}Q{} {}", quarter(s), EN_DASH, quarter(e), s.year())
            } else {
                format!("Q{} {} {} Q{} {}", quarter(s), s.year(), EN_DASH, quarter(e), e.year())
            }
        }
        TemporalUnit::Month => {
            if same_year && s.month() == e.month() {
                s.format("%B %Y").to_string()
            } else if same_year {
                format!("{}{}{}", s.format("%B"), EN_DASH, e.format("%B %Y"))
            } else {
                format!("{} {} {}", s.format("%B %Y"), EN_DASH, e.format("%B %Y"))
            }
        }
        TemporalUnit::Day => {
            if s == e {
                format_date(start)
            } else if same_year && s.month() == e.month() {
                format!("{}{}{}, {}", s.format("%B %-d"), EN_DASH, e.day(), s.year())
            } else if same_year {
                format!("{} {} {}, {}", s.format("%B %-d"), EN_DASH, e.format("%B %-d"), s.year())
            } else {
                format!("{} {} {}", format_date(start), EN_DASH, format_date(end))
            }
        }
        other => format!(
            "{} {} {}",
            format_with_unit(start, other, settings),
            EN_DASH,
            format_with_unit(end, other, settings)
        ),
    }
}

/// Phrase for one value of an extracted date part (`16th day of the month`).
/// `None` for units without such a phrase.
pub fn format_date_part(dt: NaiveDateTime, unit: TemporalUnit, settings: &FormatSettings) -> Option<String> {
    let date = dt.date();
    match unit {
        TemporalUnit::MinuteOfHour => Some(format!("minute {}", dt.minute())),
        TemporalUnit::HourOfDay => Some(format!("hour {}", dt.hour())),
        TemporalUnit::DayOfMonth => Some(format!("{} day of the month", ordinal(date.day()))),
        TemporalUnit::DayOfYear => Some(format!("{} day of the year", ordinal(date.ordinal()))),
        TemporalUnit::WeekOfYear => Some(format!(
            "{} week of the year",
            ordinal(week_of_year(date, settings.start_of_week))
        )),
        _ => None,
    }
}
