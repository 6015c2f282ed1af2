//! Age arithmetic on birth dates.
//!
//! Fractional months use a fixed 30-day month for the day remainder, which
//! is the convention the reference tables are keyed by.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

const DAYS_PER_MONTH: f64 = 30.0;

/// Parses a birth date written as `YYYY-MM-DD` or as an ISO-8601 date-time.
///
/// Returns `None` for empty or unparseable input.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Fractional months from `birth` to `on`, never negative.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use growth_core::age::months_between;
///
/// let birth = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
/// let on = NaiveDate::from_ymd_opt(2021, 3, 30).unwrap();
/// assert_eq!(months_between(birth, on), 14.5);
/// ```
pub fn months_between(birth: NaiveDate, on: NaiveDate) -> f64 {
    let whole = (on.year() - birth.year()) * 12 + on.month() as i32 - birth.month() as i32;
    let days = on.day() as i32 - birth.day() as i32;
    let months = f64::from(whole) + f64::from(days) / DAYS_PER_MONTH;
    months.max(0.0)
}

/// Age in fractional months on `today`. `0.0` for empty or invalid input
/// and for birth dates in the future.
pub fn age_in_months_at(date_of_birth: &str, today: NaiveDate) -> f64 {
    parse_birth_date(date_of_birth).map_or(0.0, |birth| months_between(birth, today))
}

/// Age in fractional months as of the local calendar date.
pub fn age_in_months(date_of_birth: &str) -> f64 {
    age_in_months_at(date_of_birth, Local::now().date_naive())
}

/// Completed years and months from `birth` to `on`.
pub fn completed_years_months(birth: NaiveDate, on: NaiveDate) -> (u32, u32) {
    let mut months = (on.year() - birth.year()) * 12 + on.month() as i32 - birth.month() as i32;
    if on.day() < birth.day() {
        months -= 1;
    }
    let months = u32::try_from(months).unwrap_or(0);
    (months / 12, months % 12)
}

/// Display label such as `"3 years 2 months"`, or `"Unknown age"` when the
/// birth date cannot be parsed.
pub fn age_label_at(date_of_birth: &str, today: NaiveDate) -> String {
    let Some(birth) = parse_birth_date(date_of_birth) else {
        return "Unknown age".to_string();
    };
    let (years, months) = completed_years_months(birth, today);
    format!("{} {}", plural(years, "year"), plural(months, "month"))
}

pub fn age_label(date_of_birth: &str) -> String {
    age_label_at(date_of_birth, Local::now().date_naive())
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
