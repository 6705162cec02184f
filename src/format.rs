//! Pattern-based formatting of Gaian dates and date-times.
//!
//! The pattern is scanned once, left to right. At each position the longest
//! matching token is replaced by its field value; anything else is copied
//! verbatim. Substituted text is never scanned again, so a value such as
//! "Friday" cannot be mangled by a later `d` or `y` token.
//!
//! | Token   | Value                          | Example     |
//! |---------|--------------------------------|-------------|
//! | `M`     | month number                   | 3           |
//! | `MM`    | month number, two digits       | 03          |
//! | `MMM`   | month abbreviation             | Aqu         |
//! | `MMMM`  | month name (`MMMMM` alike)     | Aquarius    |
//! | `MMM*`  | month symbol                   | ♒          |
//! | `d`     | day                            | 5           |
//! | `dd`    | day, two digits                | 05          |
//! | `ddd`   | ordinal day                    | 5th         |
//! | `dddd`  | ordinal day in words           | Fifth       |
//! | `W`     | weekday symbol                 | ☽           |
//! | `WW`    | two-letter weekday             | Mo          |
//! | `WWW`   | weekday abbreviation           | Mon         |
//! | `WWWW`  | weekday name                   | Monday      |
//! | `y`     | year modulo 100                | 25          |
//! | `yy`    | year modulo 100, two digits    | 25          |
//! | `yyyy`  | year, at least four digits     | 12025       |
//! | `yyyyy` | year, at least five digits     | 12025       |
//! | `DDD`   | day of year, three digits      | 071         |
//!
//! Date-times also accept `h`/`hh` (12-hour), `H`/`HH` (24-hour), `m`/`mm`,
//! `s`/`ss`, `f`/`ff`/`fff` (fractions of a second) and `t`/`tt` (AM/PM).
//! Text between single quotes is copied as-is; `''` produces a quote.

use std::borrow::Cow;

use jiff::civil::{Time, Weekday};

use crate::Month;
use crate::calendar::weekday_number;
use crate::consts::{
    MONTH_NAMES, ORDINAL_SUFFIXES, ORDINAL_WORDS, WEEKDAY_NAMES, WEEKDAY_SYMBOLS,
};

const QUOTE: char = '\'';

/// Names used when formatting and when parsing month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Month names, index 0 unused
    pub month_names:      [&'static str; 15],
    /// Weekday names, Monday first
    pub weekday_names:    [&'static str; 7],
    /// Ordinal suffixes by day of month, index 0 unused
    pub ordinal_suffixes: [&'static str; 29],
    /// Ordinal words by day of month, index 0 unused
    pub ordinal_words:    [&'static str; 29],
    pub am:               &'static str,
    pub pm:               &'static str,
}

impl Locale {
    pub const ENGLISH: Self = Self {
        month_names:      MONTH_NAMES,
        weekday_names:    WEEKDAY_NAMES,
        ordinal_suffixes: ORDINAL_SUFFIXES,
        ordinal_words:    ORDINAL_WORDS,
        am:               "AM",
        pm:               "PM",
    };

    pub fn month_name(&self, month: Month) -> &'static str {
        self.month_names[usize::from(month.get())]
    }

    pub fn month_abbreviation(&self, month: Month) -> &'static str {
        prefix(self.month_name(month), 3)
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekday_names[weekday_index(weekday)]
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ENGLISH
    }
}

/// First `chars` characters of `text`.
fn prefix(text: &'static str, chars: usize) -> &'static str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Month,
    MonthPadded,
    MonthAbbreviation,
    MonthName,
    MonthSymbol,
    Day,
    DayPadded,
    DayOrdinal,
    DayWord,
    WeekdaySymbol,
    WeekdayShort,
    WeekdayAbbreviation,
    WeekdayName,
    YearShort,
    YearShortPadded,
    Year,
    YearFiveDigits,
    DayOfYear,
    Hour12,
    Hour12Padded,
    Hour24,
    Hour24Padded,
    Minute,
    MinutePadded,
    Second,
    SecondPadded,
    Tenths,
    Hundredths,
    Milliseconds,
    MeridiemInitial,
    Meridiem,
}

/// Date tokens, longest first.
const DATE_TOKENS: &[(&str, Token)] = &[
    ("yyyyy", Token::YearFiveDigits),
    ("MMMMM", Token::MonthName),
    ("MMMM", Token::MonthName),
    ("MMM*", Token::MonthSymbol),
    ("WWWW", Token::WeekdayName),
    ("dddd", Token::DayWord),
    ("yyyy", Token::Year),
    ("MMM", Token::MonthAbbreviation),
    ("WWW", Token::WeekdayAbbreviation),
    ("ddd", Token::DayOrdinal),
    ("DDD", Token::DayOfYear),
    ("MM", Token::MonthPadded),
    ("WW", Token::WeekdayShort),
    ("dd", Token::DayPadded),
    ("yy", Token::YearShortPadded),
    ("M", Token::Month),
    ("W", Token::WeekdaySymbol),
    ("d", Token::Day),
    ("y", Token::YearShort),
];

/// Time tokens, longest first.
const TIME_TOKENS: &[(&str, Token)] = &[
    ("fff", Token::Milliseconds),
    ("hh", Token::Hour12Padded),
    ("HH", Token::Hour24Padded),
    ("mm", Token::MinutePadded),
    ("ss", Token::SecondPadded),
    ("ff", Token::Hundredths),
    ("tt", Token::Meridiem),
    ("h", Token::Hour12),
    ("H", Token::Hour24),
    ("m", Token::Minute),
    ("s", Token::Second),
    ("f", Token::Tenths),
    ("t", Token::MeridiemInitial),
];

/// Field values of the value being formatted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields {
    pub year:        i32,
    pub month:       Month,
    pub day:         u8,
    pub day_of_year: u16,
    pub weekday:     Weekday,
    pub time:        Option<Time>,
}

/// Formats `fields` according to `pattern`.
pub(crate) fn format_fields(pattern: &str, fields: &Fields, locale: &Locale) -> String {
    let tables: &[&[(&str, Token)]] = if fields.time.is_some() {
        &[DATE_TOKENS, TIME_TOKENS]
    } else {
        &[DATE_TOKENS]
    };

    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == QUOTE {
            rest = copy_literal(&rest[c.len_utf8()..], &mut out);
        } else if let Some((text, token)) = longest_match(rest, tables) {
            out.push_str(&render(token, fields, locale));
            rest = &rest[text.len()..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out
}

fn longest_match(rest: &str, tables: &[&[(&'static str, Token)]]) -> Option<(&'static str, Token)> {
    tables
        .iter()
        .filter_map(|table| table.iter().find(|(text, _)| rest.starts_with(text)))
        .max_by_key(|(text, _)| text.len())
        .copied()
}

/// Copies a quoted literal; `rest` starts right after the opening quote.
fn copy_literal<'a>(rest: &'a str, out: &mut String) -> &'a str {
    if let Some(after) = rest.strip_prefix(QUOTE) {
        out.push(QUOTE);
        return after;
    }
    match rest.find(QUOTE) {
        Some(end) => {
            out.push_str(&rest[..end]);
            &rest[end + QUOTE.len_utf8()..]
        },
        None => {
            out.push_str(rest);
            ""
        },
    }
}

fn render(token: Token, fields: &Fields, locale: &Locale) -> Cow<'static, str> {
    let day_index = usize::from(fields.day);
    let short_year = fields.year.rem_euclid(100);
    let time = fields.time.unwrap_or(Time::MIN);
    let hour12 = match time.hour() % 12 {
        0 => 12,
        hour => hour,
    };
    let millis = time.millisecond();

    match token {
        Token::Month => fields.month.get().to_string().into(),
        Token::MonthPadded => format!("{:02}", fields.month.get()).into(),
        Token::MonthAbbreviation => locale.month_abbreviation(fields.month).into(),
        Token::MonthName => locale.month_name(fields.month).into(),
        Token::MonthSymbol => fields.month.symbol().into(),
        Token::Day => fields.day.to_string().into(),
        Token::DayPadded => format!("{:02}", fields.day).into(),
        Token::DayOrdinal => format!("{}{}", fields.day, locale.ordinal_suffixes[day_index]).into(),
        Token::DayWord => locale.ordinal_words[day_index].into(),
        Token::WeekdaySymbol => WEEKDAY_SYMBOLS[weekday_index(fields.weekday)].into(),
        Token::WeekdayShort => prefix(locale.weekday_name(fields.weekday), 2).into(),
        Token::WeekdayAbbreviation => prefix(locale.weekday_name(fields.weekday), 3).into(),
        Token::WeekdayName => locale.weekday_name(fields.weekday).into(),
        Token::YearShort => short_year.to_string().into(),
        Token::YearShortPadded => format!("{short_year:02}").into(),
        Token::Year => format!("{:04}", fields.year).into(),
        Token::YearFiveDigits => format!("{:05}", fields.year).into(),
        Token::DayOfYear => format!("{:03}", fields.day_of_year).into(),
        Token::Hour12 => hour12.to_string().into(),
        Token::Hour12Padded => format!("{hour12:02}").into(),
        Token::Hour24 => time.hour().to_string().into(),
        Token::Hour24Padded => format!("{:02}", time.hour()).into(),
        Token::Minute => time.minute().to_string().into(),
        Token::MinutePadded => format!("{:02}", time.minute()).into(),
        Token::Second => time.second().to_string().into(),
        Token::SecondPadded => format!("{:02}", time.second()).into(),
        Token::Tenths => (millis / 100).to_string().into(),
        Token::Hundredths => format!("{:02}", millis / 10).into(),
        Token::Milliseconds => format!("{millis:03}").into(),
        Token::MeridiemInitial => prefix(meridiem(time, locale), 1).into(),
        Token::Meridiem => meridiem(time, locale).into(),
    }
}

/// Position of `weekday` in the Monday-first tables
fn weekday_index(weekday: Weekday) -> usize {
    usize::from(weekday_number(weekday) - 1)
}

fn meridiem(time: Time, locale: &Locale) -> &'static str {
    if time.hour() < 12 { locale.am } else { locale.pm }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(day: u8, weekday: Weekday) -> Fields {
        Fields {
            year: 12025,
            month: Month::AQUARIUS,
            day,
            day_of_year: 56 + u16::from(day),
            weekday,
            time: None,
        }
    }

    #[test]
    fn test_date_tokens() {
        struct TestCase {
            pattern:  &'static str,
            expected: &'static str,
        }

        let f = fields(5, Weekday::Friday);
        let cases = [
            TestCase { pattern: "M", expected: "3" },
            TestCase { pattern: "MM", expected: "03" },
            TestCase { pattern: "MMM", expected: "Aqu" },
            TestCase { pattern: "MMMM", expected: "Aquarius" },
            TestCase { pattern: "MMMMM", expected: "Aquarius" },
            TestCase { pattern: "MMM*", expected: "♒" },
            TestCase { pattern: "d", expected: "5" },
            TestCase { pattern: "dd", expected: "05" },
            TestCase { pattern: "ddd", expected: "5th" },
            TestCase { pattern: "dddd", expected: "Fifth" },
            TestCase { pattern: "W", expected: "♀" },
            TestCase { pattern: "WW", expected: "Fr" },
            TestCase { pattern: "WWW", expected: "Fri" },
            TestCase { pattern: "WWWW", expected: "Friday" },
            TestCase { pattern: "y", expected: "25" },
            TestCase { pattern: "yy", expected: "25" },
            TestCase { pattern: "yyyy", expected: "12025" },
            TestCase { pattern: "yyyyy", expected: "12025" },
            TestCase { pattern: "DDD", expected: "061" },
        ];

        for case in &cases {
            assert_eq!(
                format_fields(case.pattern, &f, &Locale::ENGLISH),
                case.expected,
                "pattern {:?}",
                case.pattern
            );
        }
    }

    #[test]
    fn test_replacement_text_is_not_rescanned() {
        let f = fields(5, Weekday::Friday);
        assert_eq!(format_fields("WWWW ddd", &f, &Locale::ENGLISH), "Friday 5th");
        assert_eq!(format_fields("WWWWddd", &f, &Locale::ENGLISH), "Friday5th");
        assert_eq!(format_fields("dddd WWWW", &f, &Locale::ENGLISH), "Fifth Friday");

        // "Wednesday" and "Sunday" both contain 'd' and 'y'
        let f = fields(21, Weekday::Wednesday);
        assert_eq!(format_fields("WWWW, ddd of MMMM", &f, &Locale::ENGLISH), "Wednesday, 21st of Aquarius");
        let f = fields(7, Weekday::Sunday);
        assert_eq!(format_fields("WWWW dd", &f, &Locale::ENGLISH), "Sunday 07");
    }

    #[test]
    fn test_unmatched_characters_are_copied() {
        let f = fields(15, Weekday::Monday);
        assert_eq!(format_fields("MMMM d, yyyy", &f, &Locale::ENGLISH), "Aquarius 15, 12025");
        assert_eq!(format_fields("yyyy/MM/dd", &f, &Locale::ENGLISH), "12025/03/15");
        assert_eq!(format_fields("", &f, &Locale::ENGLISH), "");
        // time tokens mean nothing for a bare date
        assert_eq!(format_fields("HH:mm t", &f, &Locale::ENGLISH), "HH:mm t");
    }

    #[test]
    fn test_quoted_literals() {
        let f = fields(15, Weekday::Monday);
        assert_eq!(format_fields("'Day' d", &f, &Locale::ENGLISH), "Day 15");
        assert_eq!(format_fields("d''M", &f, &Locale::ENGLISH), "15'3");
        assert_eq!(format_fields("'unterminated d", &f, &Locale::ENGLISH), "unterminated d");
    }

    #[test]
    fn test_ordinals() {
        struct TestCase {
            day:      u8,
            ordinal:  &'static str,
            word:     &'static str,
        }

        let cases = [
            TestCase { day: 1, ordinal: "1st", word: "First" },
            TestCase { day: 2, ordinal: "2nd", word: "Second" },
            TestCase { day: 3, ordinal: "3rd", word: "Third" },
            TestCase { day: 11, ordinal: "11th", word: "Eleventh" },
            TestCase { day: 12, ordinal: "12th", word: "Twelfth" },
            TestCase { day: 13, ordinal: "13th", word: "Thirteenth" },
            TestCase { day: 22, ordinal: "22nd", word: "Twenty-Second" },
            TestCase { day: 28, ordinal: "28th", word: "Twenty-Eighth" },
        ];

        for case in &cases {
            let f = fields(case.day, Weekday::Monday);
            assert_eq!(format_fields("ddd", &f, &Locale::ENGLISH), case.ordinal);
            assert_eq!(format_fields("dddd", &f, &Locale::ENGLISH), case.word);
        }
    }

    #[test]
    fn test_time_tokens() {
        let mut f = fields(5, Weekday::Friday);
        f.time = Some(Time::constant(15, 4, 9, 345_000_000));

        assert_eq!(format_fields("HH:mm:ss.fff", &f, &Locale::ENGLISH), "15:04:09.345");
        assert_eq!(format_fields("h:mm tt", &f, &Locale::ENGLISH), "3:04 PM");
        assert_eq!(format_fields("hh H m s f ff t", &f, &Locale::ENGLISH), "03 15 4 9 3 34 P");

        f.time = Some(Time::constant(0, 30, 0, 0));
        assert_eq!(format_fields("h:mm tt", &f, &Locale::ENGLISH), "12:30 AM");
    }

    #[test]
    fn test_time_values_are_not_rescanned() {
        let mut f = fields(5, Weekday::Friday);
        f.time = Some(Time::constant(18, 0, 0, 0));
        // "Fifth" contains 't' and "Friday" contains 'd'
        assert_eq!(format_fields("dddd WWWW tt", &f, &Locale::ENGLISH), "Fifth Friday PM");
    }

    #[test]
    fn test_negative_and_small_years() {
        let mut f = fields(1, Weekday::Monday);
        f.year = 7;
        assert_eq!(format_fields("yyyy yy y", &f, &Locale::ENGLISH), "0007 07 7");
        f.year = -101;
        assert_eq!(format_fields("yy", &f, &Locale::ENGLISH), "99");
    }

    #[test]
    fn test_custom_locale() {
        let mut locale = Locale::ENGLISH;
        locale.weekday_names[4] = "Vendredi";
        locale.am = "am";
        locale.pm = "pm";

        let mut f = fields(5, Weekday::Friday);
        f.time = Some(Time::constant(9, 0, 0, 0));
        assert_eq!(format_fields("WWWW WWW tt", &f, &locale), "Vendredi Ven am");
    }
}
