use std::{cmp::Ordering, iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    GaianDate, GaianError, IsoWeekCalendar, MIN_DAY, MIN_MONTH, Month, RANGE_SEPARATOR, convert, prelude::*,
};

/// An inclusive range of Gaian dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct GaianDateRange {
    start: GaianDate,
    end:   GaianDate,
}

impl GaianDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `GaianError::InvalidRange` if start > end.
    pub fn new(start: GaianDate, end: GaianDate) -> Result<Self, GaianError> {
        if start > end {
            return Err(GaianError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The whole Gaian year, Horus included when the year has it.
    ///
    /// # Errors
    /// Returns `GaianError::Unrepresentable` if the year is outside the supported range.
    pub fn year(year: i32) -> Result<Self, GaianError> {
        let last_month = convert::months_in_year(&IsoWeekCalendar, year)?;
        let last = Month::new(last_month)?;
        Self::new(
            GaianDate::new(year, MIN_MONTH, MIN_DAY)?,
            GaianDate::from_triple(year, last, last.days())?,
        )
    }

    /// One month of one Gaian year.
    ///
    /// # Errors
    /// Returns `GaianError::MonthNotInYear` for Horus in a 52-week year, or
    /// `GaianError::Unrepresentable` outside the supported range.
    pub fn month(year: i32, month: Month) -> Result<Self, GaianError> {
        Self::new(
            GaianDate::from_triple(year, month, MIN_DAY)?,
            GaianDate::from_triple(year, month, month.days())?,
        )
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> GaianDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> GaianDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (GaianDate, GaianDate) {
        (self.start, self.end)
    }

    /// Number of days in the range, both ends included
    pub fn days(&self) -> i64 {
        self.start.days_until(self.end) + 1
    }

    pub fn contains(&self, date: &GaianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// The days both ranges share, if any
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        Self::new(start, end).ok()
    }

    /// Iterates over every day of the range in order
    pub const fn iter(&self) -> RangeDays {
        RangeDays {
            next: Some(self.start),
            end:  self.end,
        }
    }
}

/// Iterator over the days of a [`GaianDateRange`].
#[derive(Debug, Clone)]
pub struct RangeDays {
    next: Option<GaianDate>,
    end:  GaianDate,
}

impl Iterator for RangeDays {
    type Item = GaianDate;

    fn next(&mut self) -> Option<GaianDate> {
        let current = self.next?;
        self.next = if current < self.end {
            current.plus_days(1).ok()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |next| usize::try_from(next.days_until(self.end) + 1).unwrap_or(0));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeDays {}

impl FusedIterator for RangeDays {}

impl IntoIterator for GaianDateRange {
    type Item = GaianDate;
    type IntoIter = RangeDays;

    fn into_iter(self) -> RangeDays {
        self.iter()
    }
}

impl FromStr for GaianDateRange {
    type Err = GaianError;

    /// Parses `start/end`. Either side may use any date form, including the
    /// month-first one that contains the separator itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GaianError::EmptyInput);
        }

        let mut last_error = GaianError::InvalidFormat(format!(
            "No range separator found (expected '{RANGE_SEPARATOR}'): {trimmed}"
        ));
        for (pos, _) in trimmed.match_indices(RANGE_SEPARATOR) {
            let start = trimmed[..pos].parse::<GaianDate>();
            let end = trimmed[pos + RANGE_SEPARATOR.len_utf8()..].parse::<GaianDate>();
            match (start, end) {
                (Ok(start), Ok(end)) => return Self::new(start, end),
                (Err(err), _) | (_, Err(err)) => last_error = err,
            }
        }
        Err(last_error)
    }
}

impl PartialOrd for GaianDateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GaianDateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for GaianDateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GaianDateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
