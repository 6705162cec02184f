use std::str::FromStr;

use jiff::civil::{DateTime, Time};
use jiff::{SignedDuration, Span};

use crate::consts::TIME_SEPARATOR;
use crate::format::{self, Locale};
use crate::prelude::*;
use crate::{GaianDate, GaianError, GaianPeriod, Month};

/// Pattern used when `format` is given an empty pattern
const DEFAULT_PATTERN: &str = "MMMM d, yyyy HH:mm:ss";

/// A Gaian date with a wall-clock time, no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct GaianDateTime(DateTime);

impl GaianDateTime {
    pub fn new(date: GaianDate, time: Time) -> Self {
        Self(DateTime::from_parts(date.plain_date(), time))
    }

    pub const fn from_plain_date_time(date_time: DateTime) -> Self {
        Self(date_time)
    }

    pub const fn plain_date_time(&self) -> DateTime {
        self.0
    }

    pub fn date(&self) -> GaianDate {
        GaianDate::from_plain_date(self.0.date())
    }

    pub fn time(&self) -> Time {
        self.0.time()
    }

    pub fn year(&self) -> i32 {
        self.date().year()
    }

    pub fn month(&self) -> Month {
        self.date().month()
    }

    pub fn day(&self) -> u8 {
        self.date().day()
    }

    pub fn hour(&self) -> i8 {
        self.0.hour()
    }

    pub fn minute(&self) -> i8 {
        self.0.minute()
    }

    pub fn second(&self) -> i8 {
        self.0.second()
    }

    /// Fraction of the second, 0..=999 999 999
    pub fn nanosecond(&self) -> i32 {
        self.0.subsec_nanosecond()
    }

    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_duration(&self, duration: SignedDuration) -> Result<Self, GaianError> {
        self.0
            .checked_add(duration)
            .map(Self)
            .map_err(|_| GaianError::Overflow)
    }

    /// Adds a span with days counted as 24 hours. Gregorian years and months
    /// are taken from the plain calendar.
    ///
    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_span(&self, span: Span) -> Result<Self, GaianError> {
        self.0
            .checked_add(span)
            .map(Self)
            .map_err(|_| GaianError::Overflow)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_days(&self, days: i64) -> Result<Self, GaianError> {
        Ok(self.date().plus_days(days)?.at(self.time()))
    }

    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, GaianError> {
        Ok(self.date().plus_weeks(weeks)?.at(self.time()))
    }

    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_months(&self, months: i64) -> Result<Self, GaianError> {
        Ok(self.date().plus_months(months)?.at(self.time()))
    }

    /// Moves the date as [`GaianDate::plus_years`] does, keeping the time.
    ///
    /// # Errors
    /// Returns `GaianError::Overflow` if the result is outside the supported range.
    pub fn plus_years(&self, years: i64) -> Result<Self, GaianError> {
        Ok(self.date().plus_years(years)?.at(self.time()))
    }

    /// # Errors
    /// See [`GaianPeriod::apply_to_date_time`].
    pub fn plus(&self, period: &GaianPeriod) -> Result<Self, GaianError> {
        period.apply_to_date_time(*self)
    }

    /// # Errors
    /// See [`GaianPeriod::apply_to_date_time`].
    pub fn minus(&self, period: &GaianPeriod) -> Result<Self, GaianError> {
        period
            .checked_neg()
            .ok_or(GaianError::Overflow)?
            .apply_to_date_time(*self)
    }

    /// Formats with the date and time tokens of the pattern language.
    pub fn format(&self, pattern: &str) -> String {
        self.format_localized(pattern, &Locale::ENGLISH)
    }

    pub fn format_localized(&self, pattern: &str, locale: &Locale) -> String {
        let pattern = if pattern.is_empty() { DEFAULT_PATTERN } else { pattern };
        format::format_fields(pattern, &self.date().fields(Some(self.time())), locale)
    }
}

impl std::fmt::Display for GaianDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{TIME_SEPARATOR}{}", self.date(), self.time())
    }
}

impl FromStr for GaianDateTime {
    type Err = GaianError;

    /// Accepts any date form followed by `T` and a `HH:MM:SS[.fff]` time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GaianError::EmptyInput);
        }

        // the last separator: month names such as "Taurus" contain a 'T'
        let (date, time) = trimmed
            .rsplit_once(TIME_SEPARATOR)
            .ok_or_else(|| GaianError::InvalidFormat(format!("Missing '{TIME_SEPARATOR}' before the time: {trimmed}")))?;

        let date = date.parse::<GaianDate>()?;
        let time = time
            .trim()
            .parse::<Time>()
            .map_err(|err| GaianError::InvalidFormat(format!("Invalid time '{time}': {err}")))?;
        Ok(date.at(time))
    }
}

impl serde::Serialize for GaianDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GaianDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
