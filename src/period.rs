//! Calendar-aware periods: Gaian years and months on top of a `jiff::Span`.
//!
//! One Gaian month is four ISO weeks. A Gaian year has no fixed length (364
//! or 371 days), so years are applied with [`GaianDate::plus_years`] and only
//! decomposed with the nominal 364-day radix. Everything below a month lives
//! in the span, which never carries Gregorian years or months.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use jiff::civil::Time;
use jiff::{SignedDuration, Span, SpanRelativeTo, SpanRound, Unit};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DAYS_IN_MONTH, DAYS_IN_NOMINAL_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    WEEKS_PER_MONTH,
};
use crate::{GaianDate, GaianDateTime, GaianError};

const GAIAN_YEAR_UNIT: &str = "GY";
const GAIAN_MONTH_UNIT: &str = "GM";
const PERIOD_DESIGNATOR: char = 'P';
const NEGATIVE_SIGN: char = '-';

/// A span of Gaian years, Gaian months and a `jiff::Span` of weeks, days and
/// clock units.
///
/// Equality is structural: one month and 28 days are different periods, and
/// so are one day and 24 hours. Use [`GaianPeriod::normalized_eq`] to compare
/// by length instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaianPeriod {
    years:  i64,
    months: i64,
    span:   Span,
}

impl GaianPeriod {
    /// # Errors
    /// Returns `GaianError::InvalidPeriod` if `span` carries Gregorian years
    /// or months.
    pub fn new(years: i64, months: i64, span: Span) -> Result<Self, GaianError> {
        if span.get_years() != 0 || span.get_months() != 0 {
            return Err(GaianError::InvalidPeriod(format!(
                "{span} has Gregorian years or months; use Gaian ones"
            )));
        }
        Ok(Self { years, months, span })
    }

    pub fn from_years(years: i64) -> Self {
        Self {
            years,
            ..Self::default()
        }
    }

    pub fn from_months(months: i64) -> Self {
        Self {
            months,
            ..Self::default()
        }
    }

    /// # Errors
    /// Returns `GaianError::InvalidPeriod` if `span` carries Gregorian years
    /// or months.
    pub fn from_span(span: Span) -> Result<Self, GaianError> {
        Self::new(0, 0, span)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` beyond the span's week limit.
    pub fn from_weeks(weeks: i64) -> Result<Self, GaianError> {
        Span::new().try_weeks(weeks).map(Self::spanning).map_err(overflow)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` beyond the span's day limit.
    pub fn from_days(days: i64) -> Result<Self, GaianError> {
        Span::new().try_days(days).map(Self::spanning).map_err(overflow)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` beyond the span's hour limit.
    pub fn from_hours(hours: i64) -> Result<Self, GaianError> {
        Span::new().try_hours(hours).map(Self::spanning).map_err(overflow)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` beyond the span's minute limit.
    pub fn from_minutes(minutes: i64) -> Result<Self, GaianError> {
        Span::new().try_minutes(minutes).map(Self::spanning).map_err(overflow)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` beyond the span's second limit.
    pub fn from_seconds(seconds: i64) -> Result<Self, GaianError> {
        Span::new().try_seconds(seconds).map(Self::spanning).map_err(overflow)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` beyond the span's millisecond limit.
    pub fn from_milliseconds(milliseconds: i64) -> Result<Self, GaianError> {
        Span::new()
            .try_milliseconds(milliseconds)
            .map(Self::spanning)
            .map_err(overflow)
    }

    /// # Errors
    /// Returns `GaianError::Overflow` beyond the span's nanosecond limit.
    pub fn from_nanoseconds(nanoseconds: i64) -> Result<Self, GaianError> {
        Span::new()
            .try_nanoseconds(nanoseconds)
            .map(Self::spanning)
            .map_err(overflow)
    }

    /// Wraps a span already known to have no years or months.
    fn spanning(span: Span) -> Self {
        Self {
            span,
            ..Self::default()
        }
    }

    pub const fn years(&self) -> i64 {
        self.years
    }

    pub const fn months(&self) -> i64 {
        self.months
    }

    pub const fn span(&self) -> Span {
        self.span
    }

    pub fn weeks(&self) -> i64 {
        i64::from(self.span.get_weeks())
    }

    pub fn days(&self) -> i64 {
        i64::from(self.span.get_days())
    }

    pub fn has_date_component(&self) -> bool {
        self.years != 0 || self.months != 0 || self.weeks() != 0 || self.days() != 0
    }

    pub fn has_time_component(&self) -> bool {
        !self.clock_span().is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.span.is_zero()
    }

    /// The span with its weeks and days removed.
    fn clock_span(&self) -> Span {
        self.span.weeks(0).days(0)
    }

    /// Decomposes the days from `start` to `end` into years of 364 days,
    /// months of 28 days and remaining days, all carrying the sign of the
    /// difference.
    ///
    /// The radix is fixed: across a year with Horus, applying the result back
    /// to `start` can land a week away from `end`. Use
    /// [`GaianPeriod::days_between`] when the exact count matters.
    pub fn between(start: GaianDate, end: GaianDate) -> Self {
        let total = Self::days_between(start, end);
        Self::decompose(total.abs(), Span::new()).with_sign_of(total)
    }

    /// Like [`GaianPeriod::between`], keeping the part below a day as hours,
    /// minutes, seconds and nanoseconds.
    pub fn between_times(start: GaianDateTime, end: GaianDateTime) -> Self {
        let elapsed = start.plain_date_time().duration_until(end.plain_date_time());
        let whole_days = (elapsed.as_secs() / SECONDS_PER_DAY).abs();
        Self::decompose(whole_days, clock_units(elapsed)).with_sign_of(elapsed.signum().into())
    }

    /// Time-only period between two wall-clock times of the same day.
    pub fn between_clock_times(start: Time, end: Time) -> Self {
        let elapsed = start.duration_until(end);
        Self::spanning(clock_units(elapsed)).with_sign_of(elapsed.signum().into())
    }

    /// Exact signed number of days from `start` to `end`.
    pub fn days_between(start: GaianDate, end: GaianDate) -> i64 {
        start.days_until(end)
    }

    /// Splits a non-negative day count into nominal years, months and days,
    /// adding the days to a non-negative `clock` span.
    fn decompose(total_days: i64, clock: Span) -> Self {
        let month_days = i64::from(DAYS_IN_MONTH);
        let rest = total_days % DAYS_IN_NOMINAL_YEAR;

        Self {
            years:  total_days / DAYS_IN_NOMINAL_YEAR,
            months: rest / month_days,
            span:   clock.days(rest % month_days),
        }
    }

    /// Negates a non-negative decomposition when `sign` is negative.
    fn with_sign_of(self, sign: i64) -> Self {
        if sign < 0 {
            Self {
                years:  -self.years,
                months: -self.months,
                span:   self.span.negate(),
            }
        } else {
            self
        }
    }

    /// Applies the period to a date: years first (see
    /// [`GaianDate::plus_years`]), then months as four weeks each, then the
    /// span's weeks and days.
    ///
    /// # Errors
    /// - `GaianError::InvalidState` if the period carries time units.
    /// - `GaianError::Overflow` if a step leaves the supported range.
    pub fn apply_to(&self, date: GaianDate) -> Result<GaianDate, GaianError> {
        if self.has_time_component() {
            return Err(GaianError::InvalidState(
                "cannot apply a period with time units to a date",
            ));
        }
        self.apply_date_units(date)
    }

    /// Applies the date units as [`GaianPeriod::apply_to`] does, then the
    /// clock units on the resulting date-time.
    ///
    /// # Errors
    /// Returns `GaianError::Overflow` if a step leaves the supported range.
    pub fn apply_to_date_time(&self, date_time: GaianDateTime) -> Result<GaianDateTime, GaianError> {
        let date = self.apply_date_units(date_time.date())?;
        date.at(date_time.time()).plus_span(self.clock_span())
    }

    fn apply_date_units(&self, date: GaianDate) -> Result<GaianDate, GaianError> {
        let month_weeks = self
            .months
            .checked_mul(i64::from(WEEKS_PER_MONTH))
            .ok_or(GaianError::Overflow)?;

        date.plus_years(self.years)?
            .plus_weeks(month_weeks)?
            .plus_weeks(self.weeks())?
            .plus_days(self.days())
    }

    /// Orders two periods by the date-time each produces from `base`.
    ///
    /// # Errors
    /// Returns `GaianError::Overflow` if either period overflows from `base`.
    pub fn compare_at(&self, other: &Self, base: GaianDateTime) -> Result<Ordering, GaianError> {
        Ok(self.apply_to_date_time(base)?.cmp(&other.apply_to_date_time(base)?))
    }

    /// Fixed length of the period, days counting as 24 hours.
    ///
    /// # Errors
    /// - `GaianError::InvalidState` if years or months are non-zero.
    /// - `GaianError::Overflow` if the length exceeds `SignedDuration`.
    pub fn to_duration(&self) -> Result<SignedDuration, GaianError> {
        if self.years != 0 || self.months != 0 {
            return Err(GaianError::InvalidState(
                "Gaian years and months have no fixed duration",
            ));
        }
        self.span
            .to_duration(SpanRelativeTo::days_are_24_hours())
            .map_err(overflow)
    }

    /// Balances the span up to days, weeks folded in; years and months are
    /// left as they are.
    ///
    /// # Errors
    /// Returns `GaianError::Overflow` if the balanced span exceeds jiff's
    /// unit limits.
    pub fn normalize(&self) -> Result<Self, GaianError> {
        let rounding = SpanRound::new().largest(Unit::Day).days_are_24_hours();
        Ok(Self {
            span: self.span.round(rounding).map_err(overflow)?,
            ..*self
        })
    }

    /// Equality after normalization.
    pub fn normalized_eq(&self, other: &Self) -> bool {
        match (self.normalize(), other.normalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Sums years, months and spans, days counting as 24 hours.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(Self {
            years:  self.years.checked_add(other.years)?,
            months: self.months.checked_add(other.months)?,
            span:   self
                .span
                .checked_add((other.span, SpanRelativeTo::days_are_24_hours()))
                .ok()?,
        })
    }

    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.checked_add(&other.checked_neg()?)
    }

    pub fn checked_neg(&self) -> Option<Self> {
        Some(Self {
            years:  self.years.checked_neg()?,
            months: self.months.checked_neg()?,
            span:   self.span.negate(),
        })
    }
}

/// Hours, minutes, seconds and nanoseconds of the part of `elapsed` below a
/// day, as a non-negative span.
fn clock_units(elapsed: SignedDuration) -> Span {
    let seconds = (elapsed.as_secs() % SECONDS_PER_DAY).abs();
    Span::new()
        .hours(seconds / SECONDS_PER_HOUR)
        .minutes(seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE)
        .seconds(seconds % SECONDS_PER_MINUTE)
        .nanoseconds(elapsed.subsec_nanos().abs())
}

#[allow(clippy::needless_pass_by_value)]
fn overflow(err: jiff::Error) -> GaianError {
    tracing::debug!(%err, "span arithmetic out of range");
    GaianError::Overflow
}

impl PartialEq for GaianPeriod {
    fn eq(&self, other: &Self) -> bool {
        self.years == other.years
            && self.months == other.months
            && self.span.fieldwise() == other.span.fieldwise()
    }
}

impl Eq for GaianPeriod {}

impl Hash for GaianPeriod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.years.hash(state);
        self.months.hash(state);
        self.span.fieldwise().hash(state);
    }
}

impl Add for GaianPeriod {
    type Output = Self;

    /// # Panics
    /// Panics on overflow, like integer addition. Use
    /// [`GaianPeriod::checked_add`] to handle it.
    fn add(self, other: Self) -> Self {
        match self.checked_add(&other) {
            Some(sum) => sum,
            None => panic!("overflow when adding Gaian periods"),
        }
    }
}

impl Sub for GaianPeriod {
    type Output = Self;

    /// # Panics
    /// Panics on overflow, like integer subtraction. Use
    /// [`GaianPeriod::checked_sub`] to handle it.
    fn sub(self, other: Self) -> Self {
        match self.checked_sub(&other) {
            Some(difference) => difference,
            None => panic!("overflow when subtracting Gaian periods"),
        }
    }
}

impl Neg for GaianPeriod {
    type Output = Self;

    /// # Panics
    /// Panics when years or months are `i64::MIN`. Use
    /// [`GaianPeriod::checked_neg`] to handle it.
    fn neg(self) -> Self {
        match self.checked_neg() {
            Some(negated) => negated,
            None => panic!("overflow when negating a Gaian period"),
        }
    }
}

impl fmt::Display for GaianPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "{PERIOD_DESIGNATOR}0D");
        }
        write!(f, "{PERIOD_DESIGNATOR}")?;
        if self.years != 0 {
            write!(f, "{}{GAIAN_YEAR_UNIT}", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}{GAIAN_MONTH_UNIT}", self.months)?;
        }
        if self.span.is_zero() {
            return Ok(());
        }
        // jiff prints a negative span as `-P...`; the sign moves after our `P`
        let text = self.span.to_string();
        let (sign, body) = match text.strip_prefix(NEGATIVE_SIGN) {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        write!(f, "{sign}{}", body.trim_start_matches(PERIOD_DESIGNATOR))
    }
}

impl FromStr for GaianPeriod {
    type Err = GaianError;

    /// Accepts `P[nGY][nGM]` followed by the rest of an ISO 8601 duration,
    /// optionally signed (`P1GY-2DT3H`). A leading sign (`-P1GY2D`) negates
    /// the whole period.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GaianError::EmptyInput);
        }
        if let Some(positive) = trimmed.strip_prefix(NEGATIVE_SIGN) {
            return positive
                .parse::<Self>()?
                .checked_neg()
                .ok_or(GaianError::Overflow);
        }
        let invalid = || GaianError::InvalidPeriod(trimmed.to_owned());

        let body = trimmed.strip_prefix(PERIOD_DESIGNATOR).ok_or_else(invalid)?;
        if body.is_empty() {
            return Err(invalid());
        }

        let (years, body) = take_gaian_unit(body, GAIAN_YEAR_UNIT)?;
        let (months, body) = take_gaian_unit(body, GAIAN_MONTH_UNIT)?;
        let span = if body.is_empty() {
            Span::new()
        } else {
            parse_span_body(body).map_err(|err| {
                tracing::debug!(input = trimmed, %err, "rejected period text");
                invalid()
            })?
        };

        Self::new(years.unwrap_or(0), months.unwrap_or(0), span)
    }
}

/// Parses what follows the Gaian units with jiff's ISO 8601 parser.
fn parse_span_body(body: &str) -> Result<Span, jiff::Error> {
    match body.strip_prefix(NEGATIVE_SIGN) {
        Some(positive) => Ok(format!("{PERIOD_DESIGNATOR}{positive}").parse::<Span>()?.negate()),
        None => format!("{PERIOD_DESIGNATOR}{body}").parse(),
    }
}

/// Splits a leading `<n><unit>` off `text`, leaving it untouched when the
/// number is followed by some other unit.
fn take_gaian_unit<'a>(text: &'a str, unit: &str) -> Result<(Option<i64>, &'a str), GaianError> {
    let digits_start = usize::from(text.starts_with(NEGATIVE_SIGN));
    let digits_len = text[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - digits_start);
    let number_end = digits_start + digits_len;

    match text[number_end..].strip_prefix(unit) {
        Some(rest) if digits_len > 0 => {
            let value = text[..number_end]
                .parse::<i64>()
                .map_err(|_| GaianError::InvalidPeriod(format!("Number out of range: {}", &text[..number_end])))?;
            Ok((Some(value), rest))
        },
        _ => Ok((None, text)),
    }
}

impl Serialize for GaianPeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GaianPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use jiff::ToSpan;

    fn date(year: i32, month: u8, day: u8) -> GaianDate {
        GaianDate::new(year, month, day).unwrap()
    }

    fn period(years: i64, months: i64, span: Span) -> GaianPeriod {
        GaianPeriod::new(years, months, span).unwrap()
    }

    #[test]
    fn test_between_decomposition() {
        let start = date(12025, 1, 1);
        let end = start.plus_days(425).unwrap();

        let period = GaianPeriod::between(start, end);
        assert_eq!(period.years(), 1);
        assert_eq!(period.months(), 2);
        assert_eq!(period.days(), 5);
        assert_eq!(period.weeks(), 0);

        let back = GaianPeriod::between(end, start);
        assert_eq!(back, -period);
        assert_eq!(GaianPeriod::days_between(end, start), -425);
    }

    #[test]
    fn test_between_same_date_is_zero() {
        let d = date(12025, 7, 12);
        assert!(GaianPeriod::between(d, d).is_zero());
    }

    #[test]
    fn test_between_round_trips_outside_intercalary_years() {
        // 12024 and 12025 have no Horus
        let start = date(12024, 2, 10);
        for offset in [0, 1, 27, 28, 363, 364, 400] {
            let end = start.plus_days(offset).unwrap();
            let period = GaianPeriod::between(start, end);
            assert_eq!(period.apply_to(start), Ok(end), "offset {offset}");
        }
    }

    #[test]
    fn test_between_across_horus_lands_a_week_short() {
        // 12020 carries Horus, so the year is 371 days long
        let start = date(12020, 1, 1);
        let end = date(12021, 1, 1);
        let period = GaianPeriod::between(start, end);
        assert_eq!((period.years(), period.months(), period.days()), (1, 0, 7));
        assert_eq!(period.apply_to(start), Ok(date(12021, 1, 8)));
    }

    #[test]
    fn test_new_rejects_gregorian_units() {
        assert!(matches!(
            GaianPeriod::new(1, 0, 1.month()),
            Err(GaianError::InvalidPeriod(_))
        ));
        assert!(matches!(
            GaianPeriod::from_span(1.year()),
            Err(GaianError::InvalidPeriod(_))
        ));
        assert_eq!(GaianPeriod::from_span(2.weeks()), GaianPeriod::from_weeks(2));
    }

    #[test]
    fn test_factories() {
        assert_eq!(GaianPeriod::from_days(3).map(|p| p.days()), Ok(3));
        assert_eq!(GaianPeriod::from_hours(5).map(|p| p.span().get_hours()), Ok(5));
        assert_eq!(GaianPeriod::from_nanoseconds(7).map(|p| p.span().get_nanoseconds()), Ok(7));
        assert_eq!(GaianPeriod::from_days(i64::MAX), Err(GaianError::Overflow));
        assert_eq!(GaianPeriod::from_weeks(i64::MIN), Err(GaianError::Overflow));
    }

    #[test]
    fn test_apply_to() {
        let start = date(12025, 3, 15);

        assert_eq!(GaianPeriod::from_years(1).apply_to(start), Ok(date(12026, 3, 15)));
        assert_eq!(GaianPeriod::from_months(1).apply_to(start), Ok(date(12025, 4, 15)));
        assert_eq!(GaianPeriod::from_months(-2).apply_to(start), Ok(date(12025, 1, 15)));
        assert_eq!(period(0, 0, 1.week()).apply_to(start), Ok(date(12025, 3, 22)));
        assert_eq!(period(0, 0, 14.days()).apply_to(start), Ok(date(12025, 4, 1)));

        let mixed = period(1, 1, 1.day());
        assert_eq!(mixed.apply_to(start), Ok(date(12026, 4, 16)));
    }

    #[test]
    fn test_apply_to_rejects_time_units() {
        let start = date(12025, 3, 15);
        let result = period(0, 0, 1.hour()).apply_to(start);
        assert!(matches!(result, Err(GaianError::InvalidState(_))));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_apply_to_date_time() {
        let start = date(12025, 3, 28).at(Time::constant(22, 0, 0, 0));
        let end = period(0, 1, 3.hours()).apply_to_date_time(start).unwrap();
        assert_eq!(end.date(), date(12025, 5, 1));
        assert_eq!(end.time(), Time::constant(1, 0, 0, 0));
    }

    #[test]
    fn test_between_times() {
        let start = date(12025, 1, 1).at(Time::constant(18, 0, 0, 0));
        let end = date(12025, 2, 2).at(Time::constant(6, 30, 0, 0));

        let period = GaianPeriod::between_times(start, end);
        assert_eq!(period.months(), 1);
        assert_eq!(period.days(), 0);
        assert_eq!(period.span().fieldwise(), 12.hours().minutes(30).fieldwise());
        assert_eq!(period.apply_to_date_time(start), Ok(end));

        let backwards = GaianPeriod::between_times(end, start);
        assert_eq!(backwards, -period);
        assert_eq!(backwards.apply_to_date_time(end), Ok(start));
    }

    #[test]
    fn test_between_clock_times() {
        let period = GaianPeriod::between_clock_times(
            Time::constant(9, 15, 0, 0),
            Time::constant(7, 0, 0, 0),
        );
        assert_eq!(period.span().fieldwise(), (-2.hours().minutes(15)).fieldwise());
        assert!(!period.has_date_component());
        assert!(period.has_time_component());
    }

    #[test]
    fn test_to_duration() {
        assert_eq!(
            GaianPeriod::from_weeks(2).and_then(|p| p.to_duration()),
            Ok(SignedDuration::from_hours(14 * 24))
        );
        assert_eq!(
            period(0, 0, -(1.day().hours(1))).to_duration(),
            Ok(SignedDuration::from_hours(-25))
        );
        assert!(matches!(
            GaianPeriod::from_months(1).to_duration(),
            Err(GaianError::InvalidState(_))
        ));
        assert!(matches!(
            GaianPeriod::from_years(1).to_duration(),
            Err(GaianError::InvalidState(_))
        ));
    }

    #[test]
    fn test_normalize_keeps_gaian_units() {
        let period = period(1, 2, 1.week().hours(30));
        let normalized = period.normalize().unwrap();
        assert_eq!(normalized.years(), 1);
        assert_eq!(normalized.months(), 2);
        assert_eq!(normalized.span().fieldwise(), 8.days().hours(6).fieldwise());
        assert_ne!(period, normalized);
        assert!(period.normalized_eq(&normalized));
        // a month is not 28 days, even after normalization
        assert!(!GaianPeriod::from_months(1).normalized_eq(&GaianPeriod::from_days(28).unwrap()));
    }

    #[test]
    fn test_operators() {
        let a = period(1, 2, 3.days());
        let b = period(0, -1, 4.hours());

        assert_eq!(a + b, period(1, 1, 3.days().hours(4)));
        assert_eq!(a - a, GaianPeriod::default());
        assert_eq!(-b, period(0, 1, -4.hours()));
        assert_eq!(a.checked_sub(&b), Some(period(1, 3, 2.days().hours(20))));
    }

    #[test]
    fn test_checked_operations_report_overflow() {
        let max = GaianPeriod::from_years(i64::MAX);
        assert_eq!(max.checked_add(&GaianPeriod::from_years(1)), None);
        assert_eq!(GaianPeriod::from_years(i64::MIN).checked_sub(&GaianPeriod::from_years(1)), None);
        assert_eq!(GaianPeriod::from_months(i64::MIN).checked_neg(), None);
    }

    #[test]
    #[should_panic(expected = "overflow when adding Gaian periods")]
    fn test_add_panics_on_overflow() {
        let _ = GaianPeriod::from_years(i64::MAX) + GaianPeriod::from_years(1);
    }

    #[test]
    #[should_panic(expected = "overflow when negating a Gaian period")]
    fn test_neg_panics_on_overflow() {
        let _ = -GaianPeriod::from_months(i64::MIN);
    }

    #[test]
    fn test_compare_at() {
        let base = date(12025, 1, 1).at_midnight();
        let month = GaianPeriod::from_months(1);
        let days = GaianPeriod::from_days(27).unwrap();
        assert_eq!(month.compare_at(&days, base), Ok(Ordering::Greater));
        assert_eq!(days.compare_at(&month, base), Ok(Ordering::Less));
        assert_eq!(
            month.compare_at(&GaianPeriod::from_weeks(4).unwrap(), base),
            Ok(Ordering::Equal)
        );
        assert_eq!(
            period(0, 0, 23.hours()).compare_at(&GaianPeriod::from_days(1).unwrap(), base),
            Ok(Ordering::Less)
        );
    }

    #[test]
    fn test_display_and_parse() {
        struct TestCase {
            period: GaianPeriod,
            text:   &'static str,
        }

        let cases = [
            TestCase { period: GaianPeriod::default(), text: "P0D" },
            TestCase { period: GaianPeriod::from_years(1), text: "P1GY" },
            TestCase { period: GaianPeriod::from_months(-3), text: "P-3GM" },
            TestCase { period: period(1, 2, 5.days()), text: "P1GY2GM5D" },
            TestCase { period: period(2, 0, 6.hours()), text: "P2GYT6H" },
            TestCase { period: period(0, 0, 10.days()), text: "P10D" },
            TestCase { period: period(0, 0, 1.week().minutes(30)), text: "P1WT30M" },
            TestCase { period: period(-1, -2, -5.days()), text: "P-1GY-2GM-5D" },
            TestCase { period: period(0, 0, -3.days().hours(4)), text: "P-3DT4H" },
        ];

        for case in &cases {
            assert_eq!(case.period.to_string(), case.text);
            assert_eq!(case.text.parse::<GaianPeriod>(), Ok(case.period), "parse {}", case.text);
        }
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("P1GY".parse::<GaianPeriod>(), Ok(GaianPeriod::from_years(1)));
        assert_eq!("P2GM".parse::<GaianPeriod>(), Ok(GaianPeriod::from_months(2)));
        assert_eq!(
            "P1GY2GM3W4DT5H".parse::<GaianPeriod>(),
            Ok(period(1, 2, 3.weeks().days(4).hours(5)))
        );
        assert_eq!(" P3D ".parse::<GaianPeriod>(), GaianPeriod::from_days(3));
        assert_eq!("-P1GY2D".parse::<GaianPeriod>(), Ok(period(-1, 0, -2.days())));
        assert_eq!("PT1.5S".parse::<GaianPeriod>().map(|p| p.has_time_component()), Ok(true));
    }

    #[test]
    fn test_parse_errors() {
        for input in ["P", "1GY", "PGY", "P1GM1GY", "P1Y", "P1M", "P1GY1X", "Pabc"] {
            let result = input.parse::<GaianPeriod>();
            assert!(
                matches!(result, Err(GaianError::InvalidPeriod(_))),
                "{input:?} should be rejected, got {result:?}"
            );
        }
        assert_eq!("  ".parse::<GaianPeriod>(), Err(GaianError::EmptyInput));
    }

    #[test]
    fn test_serde() {
        let period = period(1, 2, 5.days());
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"P1GY2GM5D\"");
        let parsed: GaianPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period);

        let result: Result<GaianPeriod, _> = serde_json::from_str("\"P1Q\"");
        assert!(result.is_err());
    }
}
