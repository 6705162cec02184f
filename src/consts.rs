/// Offset added to the ISO week-year to obtain the Gaian year
pub const GAIAN_YEAR_OFFSET: i32 = 10_000;

/// First valid month (Sagittarius)
pub const MIN_MONTH: u8 = 1;
/// Last month of every year (Ophiuchus)
pub const COMMON_LAST_MONTH: u8 = 13;
/// Intercalary month number (Horus), only present in 53-week years
pub const INTERCALARY_MONTH: u8 = 14;
/// Maximum valid month
pub const MAX_MONTH: u8 = INTERCALARY_MONTH;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

pub const DAYS_PER_WEEK: u8 = 7;
pub const WEEKS_PER_MONTH: u8 = 4;
/// Days in a regular month (four ISO weeks)
pub const DAYS_IN_MONTH: u8 = DAYS_PER_WEEK * WEEKS_PER_MONTH;
/// Days in the intercalary month (one ISO week)
pub const DAYS_IN_INTERCALARY_MONTH: u8 = DAYS_PER_WEEK;

/// ISO week count of a regular week-year
pub const WEEKS_IN_COMMON_YEAR: u8 = 52;
/// ISO week count of a long week-year
pub const WEEKS_IN_LONG_YEAR: u8 = 53;

/// Nominal year length used by period decomposition (13 months of 28 days)
pub const DAYS_IN_NOMINAL_YEAR: i64 = COMMON_LAST_MONTH as i64 * DAYS_IN_MONTH as i64;
/// Length of a year that carries the intercalary month
pub const DAYS_IN_LONG_YEAR: i64 = DAYS_IN_NOMINAL_YEAR + DAYS_IN_INTERCALARY_MONTH as i64;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 15] = [
    "",            // index 0 unused (months are 1-indexed)
    "Sagittarius", // weeks 1-4
    "Capricorn",
    "Aquarius",
    "Pisces",
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Ophiuchus", // weeks 49-52
    "Horus",     // week 53
];

/// Month glyphs (index 0 is unused)
pub const MONTH_SYMBOLS: [&str; 15] = [
    "", "♐", "♑", "♒", "♓", "♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "⛎", "𓅃",
];

/// Weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Planetary weekday glyphs, Monday (Moon) first
pub const WEEKDAY_SYMBOLS: [&str; 7] = ["☽", "♂", "☿", "♃", "♀", "♄", "☉"];

/// English ordinal suffixes indexed by day of month (index 0 unused)
pub const ORDINAL_SUFFIXES: [&str; 29] = [
    "th", "st", "nd", "rd", "th", "th", "th", "th", "th", "th", "th", "th", "th", "th", "th",
    "th", "th", "th", "th", "th", "th", "st", "nd", "rd", "th", "th", "th", "th", "th",
];

/// English ordinal words indexed by day of month (index 0 unused)
pub const ORDINAL_WORDS: [&str; 29] = [
    "Zeroth",
    "First",
    "Second",
    "Third",
    "Fourth",
    "Fifth",
    "Sixth",
    "Seventh",
    "Eighth",
    "Ninth",
    "Tenth",
    "Eleventh",
    "Twelfth",
    "Thirteenth",
    "Fourteenth",
    "Fifteenth",
    "Sixteenth",
    "Seventeenth",
    "Eighteenth",
    "Nineteenth",
    "Twentieth",
    "Twenty-First",
    "Twenty-Second",
    "Twenty-Third",
    "Twenty-Fourth",
    "Twenty-Fifth",
    "Twenty-Sixth",
    "Twenty-Seventh",
    "Twenty-Eighth",
];

/// Date component separator (ISO-like format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator
pub const MONTH_FIRST_SEPARATOR: char = '/';
/// Separator between day and year in the named format
pub const NAMED_YEAR_SEPARATOR: char = ',';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Separator between date and time
pub const TIME_SEPARATOR: char = 'T';

/// Pattern producing the long named form, e.g. "Aquarius 15, 12025"
pub const NAMED_PATTERN: &str = "MMMM d, yyyy";
