//! Calendar-day value types.
//!
//! # Responsibility
//! - Represent wall-clock calendar days without any time-of-day component.
//! - Normalize out-of-range month/day components the way date arithmetic does.
//!
//! # Invariants
//! - `month` is 0-based (`0 = January`) and always within `0..12`.
//! - A `CalendarDate` always names a real Gregorian day.
//! - Years are clamped into `MIN_YEAR..=MAX_YEAR`.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Smallest year a calendar value can carry.
pub const MIN_YEAR: i32 = -200_000;
/// Largest year a calendar value can carry.
pub const MAX_YEAR: i32 = 200_000;

const MONTHS_PER_YEAR: i64 = 12;

/// A displayed month: `(year, 0-based month)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "YearMonthParts")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct YearMonthParts {
    year: i32,
    month: i32,
}

impl From<YearMonthParts> for YearMonth {
    fn from(value: YearMonthParts) -> Self {
        Self::new(value.year, value.month)
    }
}

impl YearMonth {
    /// Builds a month from possibly out-of-range components.
    ///
    /// `month = 12` becomes January of `year + 1`, `month = -1` becomes
    /// December of `year - 1`.
    pub fn new(year: i32, month: i32) -> Self {
        let total = i64::from(year) * MONTHS_PER_YEAR + i64::from(month);
        Self::from_month_index(total)
    }

    fn from_month_index(total: i64) -> Self {
        let year = total.div_euclid(MONTHS_PER_YEAR);
        let month = total.rem_euclid(MONTHS_PER_YEAR);
        if year < i64::from(MIN_YEAR) {
            return Self {
                year: MIN_YEAR,
                month: 0,
            };
        }
        if year > i64::from(MAX_YEAR) {
            return Self {
                year: MAX_YEAR,
                month: 11,
            };
        }
        Self {
            year: year as i32,
            month: month as u32,
        }
    }

    fn month_index(self) -> i64 {
        i64::from(self.year) * MONTHS_PER_YEAR + i64::from(self.month)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// 0-based month (`0 = January`).
    pub fn month(self) -> u32 {
        self.month
    }

    /// 1-based month (`1 = January`).
    pub fn month_number(self) -> u32 {
        self.month + 1
    }

    /// Shifts by `delta` months, rolling the year over as needed.
    pub fn offset(self, delta: i32) -> Self {
        Self::from_month_index(self.month_index() + i64::from(delta))
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(self, other: YearMonth) -> i64 {
        other.month_index() - self.month_index()
    }

    /// Day 1 of this month.
    pub fn first_day(self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }

    /// Last day of this month ("day 0" of the next one).
    pub fn last_day(self) -> CalendarDate {
        if self.month == 11 {
            return CalendarDate {
                year: self.year,
                month: 11,
                day: 31,
            };
        }
        CalendarDate::new(self.year, self.month as i32 + 1, 0)
    }

    /// Whether `date` falls inside this month.
    pub fn contains(self, date: CalendarDate) -> bool {
        date.year == self.year && date.month == self.month
    }

    pub(crate) fn first_naive(self) -> NaiveDate {
        // Clamped years are always inside chrono's supported range.
        NaiveDate::from_ymd_opt(self.year, self.month_number(), 1).unwrap_or(NaiveDate::MIN)
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(value: CalendarDate) -> Self {
        Self {
            year: value.year,
            month: value.month,
        }
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month_number())
    }
}

/// Parses `YYYY-MM` with a 1-based month.
impl FromStr for YearMonth {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year, month) = trimmed
            .split_once('-')
            .ok_or_else(|| ParseDateError::new(trimmed, "expected YYYY-MM"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| ParseDateError::new(trimmed, "year is not a number"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ParseDateError::new(trimmed, "month is not a number"))?;
        if !(1..=12).contains(&month) {
            return Err(ParseDateError::new(trimmed, "month must be within 1..=12"));
        }
        Ok(Self::new(year, month as i32 - 1))
    }
}

/// A calendar day: `(year, 0-based month, day)`.
///
/// Equality and ordering are by calendar day. There is no time component, so
/// two values are equal exactly when they name the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "DateParts")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Deserialize)]
struct DateParts {
    year: i32,
    month: i32,
    day: i32,
}

impl From<DateParts> for CalendarDate {
    fn from(value: DateParts) -> Self {
        Self::new(value.year, value.month, value.day)
    }
}

impl CalendarDate {
    /// Builds a date from possibly out-of-range components.
    ///
    /// Month overflow rolls the year; day overflow rolls the month. Day `0`
    /// is the last day of the previous month.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        let first = YearMonth::new(year, month).first_naive();
        match first.checked_add_signed(Duration::days(i64::from(day) - 1)) {
            Some(date) => Self::from_naive(date),
            None if day < 1 => YearMonth::new(MIN_YEAR, 0).first_day(),
            None => YearMonth::new(MAX_YEAR, 11).last_day(),
        }
    }

    /// Converts a chrono date, clamping years outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_naive(date: NaiveDate) -> Self {
        if date.year() < MIN_YEAR {
            return YearMonth::new(MIN_YEAR, 0).first_day();
        }
        if date.year() > MAX_YEAR {
            return YearMonth::new(MAX_YEAR, 11).last_day();
        }
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }

    pub fn to_naive(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day).unwrap_or(NaiveDate::MIN)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// 0-based month (`0 = January`).
    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Weekday with Sunday as `0`.
    pub fn weekday(self) -> u32 {
        self.to_naive().weekday().num_days_from_sunday()
    }

    /// Month this date belongs to.
    pub fn year_month(self) -> YearMonth {
        YearMonth::from(self)
    }

    /// Shifts by `days`, crossing month and year boundaries.
    pub fn add_days(self, days: i32) -> Self {
        Self::new(self.year, self.month as i32, self.day as i32 + days)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// Parses `YYYY-MM-DD` with a 1-based month.
impl FromStr for CalendarDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Self::from_naive)
            .map_err(|err| ParseDateError::new(trimmed, &err.to_string()))
    }
}

/// Text could not be read as a calendar value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError {
    input: String,
    message: String,
}

impl ParseDateError {
    fn new(input: &str, message: &str) -> Self {
        Self {
            input: input.to_string(),
            message: message.to_string(),
        }
    }
}

impl Display for ParseDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date `{}`: {}", self.input, self.message)
    }
}

impl Error for ParseDateError {}
