//! Dates in the Gaian calendar.
//!
//! The Gaian calendar relabels the ISO 8601 week calendar: thirteen months of
//! 28 days (four ISO weeks each), plus a seven-day month 14, Horus, in
//! week-years that have a 53rd week. The Gaian year is the ISO week-year plus
//! 10 000.
//!
//! ```
//! use gaian_date::{GaianDate, Month};
//!
//! let date: GaianDate = "Aquarius 15, 12025".parse().unwrap();
//! assert_eq!(date.month(), Month::AQUARIUS);
//! assert_eq!(date.to_string(), "12025-03-15");
//! assert_eq!(date.format("WWWW, ddd MMMM yyyy"), "Monday, 15th Aquarius 12025");
//! ```

mod calendar;
mod consts;
pub mod convert;
mod datetime;
mod error;
mod format;
mod period;
mod prelude;
mod range;
mod types;

pub use calendar::{IsoWeekCalendar, WeekCalendar, weekday_from_number, weekday_number};
pub use consts::*;
pub use datetime::GaianDateTime;
pub use error::{ErrorKind, GaianError};
pub use format::Locale;
pub use period::GaianPeriod;
pub use range::{GaianDateRange, RangeDays};
pub use types::Month;

use crate::format::Fields;
use crate::prelude::*;
use jiff::civil::{Date, Time, Weekday};
use std::ops::Sub;
use std::str::FromStr;

/// A day in the Gaian calendar, backed by a plain `jiff::civil::Date`.
///
/// Equality, ordering and hashing follow the plain date. The supported years
/// run from 1 to 19999, the week-years of `jiff`'s dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct GaianDate(Date);

impl GaianDate {
    /// Earliest supported date, 0001-01-01
    pub const MIN: Self = Self(Date::MIN);
    /// Latest supported date, 19999-13-26
    pub const MAX: Self = Self(Date::MAX);

    /// Creates a date from a Gaian (year, month, day).
    ///
    /// # Errors
    /// - `GaianError::InvalidMonth` if `month` is outside 1..=14.
    /// - `GaianError::MonthNotInYear` for Horus in a 52-week year.
    /// - `GaianError::InvalidDay` if `day` exceeds the month's length.
    /// - `GaianError::Unrepresentable` if the date is outside the supported range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, GaianError> {
        convert::from_gaian(&IsoWeekCalendar, year, month, day).map(Self)
    }

    /// Same as [`GaianDate::new`] with an already validated month.
    ///
    /// # Errors
    /// See [`GaianDate::new`].
    pub fn from_triple(year: i32, month: Month, day: u8) -> Result<Self, GaianError> {
        Self::new(year, month.get(), day)
    }

    pub const fn from_plain_date(date: Date) -> Self {
        Self(date)
    }

    /// Creates a date from an ISO week date.
    ///
    /// # Errors
    /// - `GaianError::InvalidWeek` if `week` is outside 1..=53.
    /// - `GaianError::MonthNotInYear` for week 53 of a 52-week year.
    /// - `GaianError::Overflow` or `GaianError::Unrepresentable` outside the
    ///   supported range.
    pub fn from_week_date(week_year: i32, week: u8, weekday: Weekday) -> Result<Self, GaianError> {
        let week0 = week
            .checked_sub(1)
            .filter(|week0| *week0 < WEEKS_IN_LONG_YEAR)
            .ok_or(GaianError::InvalidWeek(week))?;
        let year = week_year.checked_add(GAIAN_YEAR_OFFSET).ok_or(GaianError::Overflow)?;
        let month = week0 / WEEKS_PER_MONTH + 1;
        let day = (week0 % WEEKS_PER_MONTH) * DAYS_PER_WEEK + weekday_number(weekday);
        Self::new(year, month, day)
    }

    /// Returns the underlying plain date
    pub const fn plain_date(&self) -> Date {
        self.0
    }

    /// Returns (year, month, day)
    pub fn to_triple(&self) -> (i32, Month, u8) {
        convert::to_gaian(&IsoWeekCalendar, self.0)
    }

    pub fn year(&self) -> i32 {
        self.to_triple().0
    }

    pub fn month(&self) -> Month {
        self.to_triple().1
    }

    pub fn day(&self) -> u8 {
        self.to_triple().2
    }

    pub fn day_of_week(&self) -> Weekday {
        self.0.weekday()
    }

    /// Day of the Gaian year, 1..=371
    pub fn day_of_year(&self) -> u16 {
        convert::day_of_year(&IsoWeekCalendar, self.0)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_days(&self, days: i64) -> Result<Self, GaianError> {
        IsoWeekCalendar
            .plus_days(self.0, days)
            .map(Self)
            .ok_or(GaianError::Overflow)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, GaianError> {
        IsoWeekCalendar
            .plus_weeks(self.0, weeks)
            .map(Self)
            .ok_or(GaianError::Overflow)
    }

    /// Adds Gaian months of exactly 28 days each.
    ///
    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_months(&self, months: i64) -> Result<Self, GaianError> {
        months
            .checked_mul(i64::from(DAYS_IN_MONTH))
            .ok_or(GaianError::Overflow)
            .and_then(|days| self.plus_days(days))
    }

    /// Moves to the same month and day `years` Gaian years away.
    ///
    /// A Horus date whose target year has no Horus rolls forward to the
    /// first day of the following year, the first day that exists after it.
    ///
    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_years(&self, years: i64) -> Result<Self, GaianError> {
        if years == 0 {
            return Ok(*self);
        }

        let (year, month, day) = self.to_triple();
        let target = i64::from(year)
            .checked_add(years)
            .and_then(|target| i32::try_from(target).ok())
            .ok_or(GaianError::Overflow)?;

        match Self::new(target, month.get(), day) {
            Ok(date) => Ok(date),
            Err(GaianError::MonthNotInYear { .. }) => {
                tracing::trace!(from = year, to = target, "no Horus in target year, rolling into the next year");
                let next = target.checked_add(1).ok_or(GaianError::Overflow)?;
                Self::new(next, MIN_MONTH, MIN_DAY).map_err(|_| GaianError::Overflow)
            },
            Err(_) => Err(GaianError::Overflow),
        }
    }

    /// The next date strictly after this one that falls on `weekday`.
    ///
    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn next_weekday(&self, weekday: Weekday) -> Result<Self, GaianError> {
        let ahead = (weekday_number(weekday) + 6 - weekday_number(self.day_of_week())) % DAYS_PER_WEEK + 1;
        self.plus_days(i64::from(ahead))
    }

    /// The last date strictly before this one that falls on `weekday`.
    ///
    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn previous_weekday(&self, weekday: Weekday) -> Result<Self, GaianError> {
        let behind = (weekday_number(self.day_of_week()) + 6 - weekday_number(weekday)) % DAYS_PER_WEEK + 1;
        self.plus_days(-i64::from(behind))
    }

    pub fn at(&self, time: Time) -> GaianDateTime {
        GaianDateTime::new(*self, time)
    }

    pub fn at_midnight(&self) -> GaianDateTime {
        self.at(Time::MIN)
    }

    /// # Errors
    /// See [`GaianPeriod::apply_to`].
    pub fn plus(&self, period: &GaianPeriod) -> Result<Self, GaianError> {
        period.apply_to(*self)
    }

    /// # Errors
    /// See [`GaianPeriod::apply_to`].
    pub fn minus(&self, period: &GaianPeriod) -> Result<Self, GaianError> {
        period.checked_neg().ok_or(GaianError::Overflow)?.apply_to(*self)
    }

    /// Signed number of days from this date to `other`.
    pub fn days_until(&self, other: Self) -> i64 {
        IsoWeekCalendar.days_between(self.0, other.0)
    }

    /// Formats the date with a pattern such as `"MMMM d, yyyy"`. An empty
    /// pattern gives the named form.
    pub fn format(&self, pattern: &str) -> String {
        self.format_localized(pattern, &Locale::ENGLISH)
    }

    pub fn format_localized(&self, pattern: &str, locale: &Locale) -> String {
        let pattern = if pattern.is_empty() { NAMED_PATTERN } else { pattern };
        format::format_fields(pattern, &self.fields(None), locale)
    }

    pub(crate) fn fields(&self, time: Option<Time>) -> Fields {
        let (year, month, day) = self.to_triple();
        Fields {
            year,
            month,
            day,
            day_of_year: self.day_of_year(),
            weekday: self.day_of_week(),
            time,
        }
    }

    /// Parses the named (`"Aquarius 15, 12025"`), month-first
    /// (`"3/15/12025"`) or ISO-like (`"12025-03-15"`) form.
    ///
    /// # Errors
    /// Returns `GaianError::EmptyInput` for blank text and
    /// `GaianError::InvalidFormat` when no form yields a valid date.
    pub fn parse(text: &str) -> Result<Self, GaianError> {
        text.parse()
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl GaianDate {
    fn parse_number<T: FromStr>(s: &str) -> Result<T, GaianError> {
        s.trim()
            .parse::<T>()
            .map_err(|_| GaianError::InvalidFormat(s.to_owned()))
    }

    /// `MonthName Day, Year`
    fn parse_named(s: &str) -> Result<Self, GaianError> {
        let (month_day, year) = s
            .split_once(NAMED_YEAR_SEPARATOR)
            .ok_or_else(|| GaianError::InvalidFormat(s.to_owned()))?;
        let (name, day) = month_day
            .trim()
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| GaianError::InvalidFormat(s.to_owned()))?;

        let month = Month::parse_name(name)?;
        Self::from_triple(Self::parse_number(year)?, month, Self::parse_number(day)?)
    }

    /// `Month/Day/Year`
    fn parse_month_first(s: &str) -> Result<Self, GaianError> {
        let parts: Vec<&str> = s.split(MONTH_FIRST_SEPARATOR).collect();
        match parts.as_slice() {
            [month, day, year] => Self::new(
                Self::parse_number(year)?,
                Self::parse_number(month)?,
                Self::parse_number(day)?,
            ),
            _ => Err(GaianError::InvalidFormat(s.to_owned())),
        }
    }

    /// `Year-Month-Day`; the year may carry a sign.
    fn parse_iso(s: &str) -> Result<Self, GaianError> {
        let parts: Vec<&str> = s.rsplitn(3, DATE_SEPARATOR).collect();
        match parts.as_slice() {
            [day, month, year] => Self::new(
                Self::parse_number(year)?,
                Self::parse_number(month)?,
                Self::parse_number(day)?,
            ),
            _ => Err(GaianError::InvalidFormat(s.to_owned())),
        }
    }
}

impl FromStr for GaianDate {
    type Err = GaianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GaianError::EmptyInput);
        }

        Self::parse_named(trimmed)
            .or_else(|_| Self::parse_month_first(trimmed))
            .or_else(|_| Self::parse_iso(trimmed))
            .map_err(|err| {
                tracing::debug!(input = trimmed, %err, "no date form matched");
                GaianError::InvalidFormat(format!("Unable to parse '{trimmed}' as a Gaian date"))
            })
    }
}

impl std::fmt::Display for GaianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (year, month, day) = self.to_triple();
        write!(f, "{year:04}-{:02}-{day:02}", month.get())
    }
}

impl Sub for GaianDate {
    type Output = GaianPeriod;

    /// The period from `other` to `self`.
    fn sub(self, other: Self) -> GaianPeriod {
        GaianPeriod::between(other, self)
    }
}

impl serde::Serialize for GaianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GaianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
