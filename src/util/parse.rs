use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::command::CommandError;

/// Four-digit years only.
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parses a `YYYY-MM-DD` date and `HH:MM` time as a UTC timestamp.
///
/// No timezone conversion takes place; the input is taken to already be UTC.
///
/// # Arguments
/// - `date` - Calendar date, e.g. `2026-01-20`
/// - `time` - Time of day, e.g. `16:47`
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The impact time, e.g. `2026-01-20T16:47:00+00:00`
/// - `Err(CommandError::InvalidInput)` - Malformed numeric components or an
///   impossible calendar date or time
pub fn parse_impact_time(date: &str, time: &str) -> Result<DateTime<Utc>, CommandError> {
    let input = format!("{} {}", date, time);

    let [year, month, day] = parse_components::<3>(date, '-')
        .ok_or_else(|| CommandError::invalid_input(&input, "date must be YYYY-MM-DD"))?;
    let [hour, minute] = parse_components::<2>(time, ':')
        .ok_or_else(|| CommandError::invalid_input(&input, "time must be HH:MM"))?;

    let date = i32::try_from(year)
        .ok()
        .filter(|y| SUPPORTED_YEARS.contains(y))
        .zip(u32::try_from(month).ok())
        .zip(u32::try_from(day).ok())
        .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d))
        .ok_or_else(|| CommandError::invalid_input(&input, "no such calendar date"))?;
    let time = u32::try_from(hour)
        .ok()
        .zip(u32::try_from(minute).ok())
        .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0))
        .ok_or_else(|| CommandError::invalid_input(&input, "no such time of day"))?;

    Ok(date.and_time(time).and_utc())
}

/// Splits `value` on `separator` into exactly `N` integers.
fn parse_components<const N: usize>(value: &str, separator: char) -> Option<[i64; N]> {
    let mut components = [0i64; N];
    let mut parts = value.split(separator);

    for component in components.iter_mut() {
        *component = parts.next()?.trim().parse().ok()?;
    }

    match parts.next() {
        Some(_) => None,
        None => Some(components),
    }
}
