//! Error types for the gaian_date crate.

use crate::GaianDate;
use crate::consts::{MAX_MONTH, WEEKS_IN_LONG_YEAR};

/// Broad classification of a [`GaianError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A month, day, triple or arithmetic result outside the valid bounds.
    OutOfRange,
    /// Text that matches none of the accepted grammars.
    Format,
    /// An operation that cannot proceed on the given value.
    InvalidState,
}

/// Error type for all fallible operations in the gaian_date crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GaianError {
    /// Month number outside 1..=14.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Month valid in general but not in this year (month 14 of a 52-week year).
    #[error("Invalid month {month} for year {year} (must be 1-{max})")]
    MonthNotInYear { year: i32, month: u8, max: u8 },

    /// Day outside the bounds of its month.
    #[error("Invalid day {day} for month {year}-{month:02} (must be 1-{max})")]
    InvalidDay { year: i32, month: u8, day: u8, max: u8 },

    /// ISO week number outside 1..=53.
    #[error("Invalid week: {0} (must be 1-{max})", max = WEEKS_IN_LONG_YEAR)]
    InvalidWeek(u8),

    /// A well-formed triple that the underlying calendar cannot represent.
    #[error("Gaian date {year}-{month:02}-{day:02} is outside the supported range")]
    Unrepresentable { year: i32, month: u8, day: u8 },

    /// Range whose start is after its end.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: GaianDate, end: GaianDate },

    /// Arithmetic left the supported date range.
    #[error("Date arithmetic overflowed the supported range")]
    Overflow,

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid period format: {0}")]
    InvalidPeriod(String),

    #[error("Empty input")]
    EmptyInput,

    #[error("Invalid operation: {0}")]
    InvalidState(&'static str),
}

impl GaianError {
    /// Returns the broad classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMonth(_)
            | Self::MonthNotInYear { .. }
            | Self::InvalidDay { .. }
            | Self::InvalidWeek(_)
            | Self::Unrepresentable { .. }
            | Self::InvalidRange { .. }
            | Self::Overflow => ErrorKind::OutOfRange,
            Self::InvalidFormat(_) | Self::InvalidPeriod(_) | Self::EmptyInput => ErrorKind::Format,
            Self::InvalidState(_) => ErrorKind::InvalidState,
        }
    }
}
