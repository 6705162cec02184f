//! Mapping between plain dates and Gaian (year, month, day) triples.
//!
//! Every ISO week maps to a quarter of a Gaian month: weeks 1-4 are
//! Sagittarius, 49-52 are Ophiuchus, and week 53 (when the week-year has one)
//! is the seven-day intercalary month Horus.

use crate::calendar::WeekCalendar;
use crate::consts::{
    COMMON_LAST_MONTH, DAYS_IN_LONG_YEAR, DAYS_IN_NOMINAL_YEAR, DAYS_PER_WEEK, GAIAN_YEAR_OFFSET,
    INTERCALARY_MONTH, MIN_DAY, WEEKS_IN_LONG_YEAR, WEEKS_PER_MONTH,
};
use crate::{GaianError, Month};

/// Maps a plain date to its Gaian (year, month, day).
pub fn to_gaian<C: WeekCalendar>(calendar: &C, date: C::Date) -> (i32, Month, u8) {
    let week_year = calendar.week_year(date);
    let week0 = calendar.week_of_year(date).saturating_sub(1);
    let weekday = calendar.weekday(date);

    let month = Month::from_index0(week0 / WEEKS_PER_MONTH);
    let day = (week0 % WEEKS_PER_MONTH) * DAYS_PER_WEEK + weekday;

    (week_year + GAIAN_YEAR_OFFSET, month, day)
}

/// Day of the Gaian year (1..=371) of a plain date.
pub fn day_of_year<C: WeekCalendar>(calendar: &C, date: C::Date) -> u16 {
    let week0 = u16::from(calendar.week_of_year(date).saturating_sub(1));
    week0 * u16::from(DAYS_PER_WEEK) + u16::from(calendar.weekday(date))
}

/// Maps a Gaian (year, month, day) back to a plain date.
///
/// # Errors
/// - `GaianError::InvalidMonth` if `month` is outside 1..=14.
/// - `GaianError::MonthNotInYear` for Horus in a year without week 53.
/// - `GaianError::InvalidDay` if `day` exceeds the month's length.
/// - `GaianError::Unrepresentable` if the calendar cannot build the date.
pub fn from_gaian<C: WeekCalendar>(
    calendar: &C,
    year: i32,
    month: u8,
    day: u8,
) -> Result<C::Date, GaianError> {
    let unrepresentable = GaianError::Unrepresentable { year, month, day };

    let month_value = Month::new(month)?;
    let max = months_in_year(calendar, year).map_err(|_| unrepresentable.clone())?;
    if month > max {
        tracing::debug!(year, month, max, "intercalary month requested in a 52-week year");
        return Err(GaianError::MonthNotInYear { year, month, max });
    }
    let max_day = month_value.days();
    if !(MIN_DAY..=max_day).contains(&day) {
        return Err(GaianError::InvalidDay { year, month, day, max: max_day });
    }

    let week_year = year.checked_sub(GAIAN_YEAR_OFFSET).ok_or_else(|| unrepresentable.clone())?;
    let week = (month - 1) * WEEKS_PER_MONTH + (day - 1) / DAYS_PER_WEEK + 1;
    let weekday = (day - 1) % DAYS_PER_WEEK + 1;

    calendar.date_from_week_date(week_year, week, weekday).ok_or_else(|| {
        tracing::debug!(year, month, day, week_year, week, weekday, "calendar rejected week date");
        unrepresentable
    })
}

/// Number of months in a Gaian year: 14 when its week-year has 53 weeks,
/// otherwise 13.
///
/// # Errors
/// Returns `GaianError::Unrepresentable` if the year is outside the calendar's range.
pub fn months_in_year<C: WeekCalendar>(calendar: &C, year: i32) -> Result<u8, GaianError> {
    let weeks = year
        .checked_sub(GAIAN_YEAR_OFFSET)
        .and_then(|week_year| calendar.weeks_in_week_year(week_year))
        .ok_or(GaianError::Unrepresentable {
            year,
            month: MIN_DAY,
            day: MIN_DAY,
        })?;

    Ok(if weeks == WEEKS_IN_LONG_YEAR {
        INTERCALARY_MONTH
    } else {
        COMMON_LAST_MONTH
    })
}

/// Whether the Gaian year carries the intercalary month Horus.
///
/// # Errors
/// Returns `GaianError::Unrepresentable` if the year is outside the calendar's range.
pub fn is_intercalary_year<C: WeekCalendar>(calendar: &C, year: i32) -> Result<bool, GaianError> {
    Ok(months_in_year(calendar, year)? == INTERCALARY_MONTH)
}

/// Number of days in a Gaian year: 364, or 371 with Horus.
///
/// # Errors
/// Returns `GaianError::Unrepresentable` if the year is outside the calendar's range.
pub fn days_in_year<C: WeekCalendar>(calendar: &C, year: i32) -> Result<i64, GaianError> {
    Ok(if is_intercalary_year(calendar, year)? {
        DAYS_IN_LONG_YEAR
    } else {
        DAYS_IN_NOMINAL_YEAR
    })
}

/// Number of days of `month` in `year`.
///
/// # Errors
/// Returns `GaianError::MonthNotInYear` for Horus in a year without it, or the
/// errors of [`months_in_year`].
pub fn days_in_month<C: WeekCalendar>(calendar: &C, year: i32, month: Month) -> Result<u8, GaianError> {
    let max = months_in_year(calendar, year)?;
    if month.get() > max {
        return Err(GaianError::MonthNotInYear {
            year,
            month: month.get(),
            max,
        });
    }
    Ok(month.days())
}
