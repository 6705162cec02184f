//! ISO week calendar provider.
//!
//! The Gaian calendar is a relabeling of the ISO 8601 week-date calendar.
//! Everything it needs from the plain calendar is collected in the
//! [`WeekCalendar`] trait so the conversion can be exercised against any
//! implementation; [`IsoWeekCalendar`] is the production one, backed by
//! `jiff`.

use jiff::Span;
use jiff::civil::{Date, ISOWeekDate, Weekday};

use crate::consts::{DAYS_PER_WEEK, SECONDS_PER_DAY, WEEKS_IN_COMMON_YEAR, WEEKS_IN_LONG_YEAR};

/// Week-date queries and day arithmetic over some plain date type.
///
/// Weekdays are numbered 1 (Monday) to 7 (Sunday).
pub trait WeekCalendar {
    type Date: Copy + Ord;

    fn week_year(&self, date: Self::Date) -> i32;

    fn week_of_year(&self, date: Self::Date) -> u8;

    fn weekday(&self, date: Self::Date) -> u8;

    /// 52 or 53, or `None` if the week-year is outside the supported range.
    fn weeks_in_week_year(&self, week_year: i32) -> Option<u8>;

    /// Builds a date from a week date, `None` if the combination is invalid.
    fn date_from_week_date(&self, week_year: i32, week: u8, weekday: u8) -> Option<Self::Date>;

    fn plus_days(&self, date: Self::Date, days: i64) -> Option<Self::Date>;

    fn plus_weeks(&self, date: Self::Date, weeks: i64) -> Option<Self::Date> {
        weeks
            .checked_mul(i64::from(DAYS_PER_WEEK))
            .and_then(|days| self.plus_days(date, days))
    }

    /// Signed number of days from `start` to `end`.
    fn days_between(&self, start: Self::Date, end: Self::Date) -> i64;
}

/// The ISO 8601 week calendar over `jiff::civil::Date`.
///
/// `jiff` covers the same days with week dates as with civil dates, so every
/// date from `Date::MIN` to `Date::MAX` has a week date and back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoWeekCalendar;

impl WeekCalendar for IsoWeekCalendar {
    type Date = Date;

    fn week_year(&self, date: Date) -> i32 {
        i32::from(date.iso_week_date().year())
    }

    fn week_of_year(&self, date: Date) -> u8 {
        date.iso_week_date().week().unsigned_abs()
    }

    fn weekday(&self, date: Date) -> u8 {
        weekday_number(date.weekday())
    }

    fn weeks_in_week_year(&self, week_year: i32) -> Option<u8> {
        // December 28th always falls in the last ISO week of its year
        let dec28 = Date::new(i16::try_from(week_year).ok()?, 12, 28).ok()?;
        if dec28.iso_week_date().week().unsigned_abs() == WEEKS_IN_LONG_YEAR {
            Some(WEEKS_IN_LONG_YEAR)
        } else {
            Some(WEEKS_IN_COMMON_YEAR)
        }
    }

    fn date_from_week_date(&self, week_year: i32, week: u8, weekday: u8) -> Option<Date> {
        let week_date = ISOWeekDate::new(
            i16::try_from(week_year).ok()?,
            i8::try_from(week).ok()?,
            weekday_from_number(weekday)?,
        )
        .ok()?;
        Some(Date::from(week_date))
    }

    fn plus_days(&self, date: Date, days: i64) -> Option<Date> {
        let span = Span::new().try_days(days).ok()?;
        date.checked_add(span).ok()
    }

    fn days_between(&self, start: Date, end: Date) -> i64 {
        start.duration_until(end).as_secs() / SECONDS_PER_DAY
    }
}

/// Weekday number, Monday = 1 through Sunday = 7.
pub const fn weekday_number(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Monday => 1,
        Weekday::Tuesday => 2,
        Weekday::Wednesday => 3,
        Weekday::Thursday => 4,
        Weekday::Friday => 5,
        Weekday::Saturday => 6,
        Weekday::Sunday => 7,
    }
}

/// Inverse of [`weekday_number`].
pub const fn weekday_from_number(number: u8) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Monday),
        2 => Some(Weekday::Tuesday),
        3 => Some(Weekday::Wednesday),
        4 => Some(Weekday::Thursday),
        5 => Some(Weekday::Friday),
        6 => Some(Weekday::Saturday),
        7 => Some(Weekday::Sunday),
        _ => None,
    }
}
