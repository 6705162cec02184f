use crate::GaianError;
use crate::consts::{
    DAYS_IN_INTERCALARY_MONTH, DAYS_IN_MONTH, INTERCALARY_MONTH, MAX_MONTH, MONTH_SYMBOLS,
};
use crate::format::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A Gaian month guaranteed to be in the range `1..=MAX_MONTH` (1..=14).
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
///
/// Month 14 (Horus) is only meaningful in years with 53 ISO weeks; that
/// check belongs to the date, not to the month value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const SAGITTARIUS: Self = Self::from_index0(0);
    pub const CAPRICORN: Self = Self::from_index0(1);
    pub const AQUARIUS: Self = Self::from_index0(2);
    pub const PISCES: Self = Self::from_index0(3);
    pub const ARIES: Self = Self::from_index0(4);
    pub const TAURUS: Self = Self::from_index0(5);
    pub const GEMINI: Self = Self::from_index0(6);
    pub const CANCER: Self = Self::from_index0(7);
    pub const LEO: Self = Self::from_index0(8);
    pub const VIRGO: Self = Self::from_index0(9);
    pub const LIBRA: Self = Self::from_index0(10);
    pub const SCORPIO: Self = Self::from_index0(11);
    pub const OPHIUCHUS: Self = Self::from_index0(12);
    pub const HORUS: Self = Self::from_index0(13);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `GaianError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, GaianError> {
        let non_zero = NonZeroU8::new(value).ok_or(GaianError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(GaianError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Builds a month from a zero-based index, saturating at Horus.
    pub(crate) const fn from_index0(index0: u8) -> Self {
        let index0 = if index0 < MAX_MONTH { index0 } else { MAX_MONTH - 1 };
        Self(NonZeroU8::MIN.saturating_add(index0))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    #[inline]
    const fn index(self) -> usize {
        self.0.get() as usize
    }

    /// Returns the full English name, e.g. "Aquarius"
    pub fn name(self) -> &'static str {
        Locale::ENGLISH.month_name(self)
    }

    /// Returns the three-letter abbreviation, e.g. "Aqu"
    pub fn abbreviation(self) -> &'static str {
        Locale::ENGLISH.month_abbreviation(self)
    }

    /// Returns the zodiac glyph of this month
    pub const fn symbol(self) -> &'static str {
        MONTH_SYMBOLS[self.index()]
    }

    /// Whether this is the intercalary month (Horus)
    pub const fn is_intercalary(self) -> bool {
        self.get() == INTERCALARY_MONTH
    }

    /// Number of days in this month: 28, or 7 for Horus
    pub const fn days(self) -> u8 {
        if self.is_intercalary() {
            DAYS_IN_INTERCALARY_MONTH
        } else {
            DAYS_IN_MONTH
        }
    }

    /// The following month, wrapping Horus back to Sagittarius.
    /// Purely numeric: whether Horus exists in a given year is not checked.
    pub const fn next(self) -> Self {
        Self::from_index0(self.get() % MAX_MONTH)
    }

    /// The preceding month, wrapping Sagittarius back to Horus.
    pub const fn previous(self) -> Self {
        Self::from_index0((self.get() + MAX_MONTH - 2) % MAX_MONTH)
    }

    /// Looks up a month by its English name or three-letter abbreviation,
    /// ignoring case.
    ///
    /// # Errors
    /// Returns `GaianError::InvalidFormat` if no month matches.
    pub fn parse_name(text: &str) -> Result<Self, GaianError> {
        Self::parse_name_in(text, &Locale::ENGLISH)
    }

    /// Looks up a month by name or abbreviation in the given locale's table.
    ///
    /// # Errors
    /// Returns `GaianError::InvalidFormat` if no month matches.
    pub fn parse_name_in(text: &str, locale: &Locale) -> Result<Self, GaianError> {
        let wanted = text.trim().to_lowercase();
        if wanted.is_empty() {
            return Err(GaianError::EmptyInput);
        }

        (0..MAX_MONTH)
            .map(Self::from_index0)
            .find(|month| {
                locale.month_name(*month).to_lowercase() == wanted
                    || locale.month_abbreviation(*month).to_lowercase() == wanted
            })
            .ok_or_else(|| GaianError::InvalidFormat(format!("Unknown month name: {}", text.trim())))
    }
}

impl TryFrom<u8> for Month {
    type Error = GaianError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = GaianError;

    /// Accepts a month name, an abbreviation or a month number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(value) => Self::new(value),
            Err(_) => Self::parse_name(s),
        }
    }
}
