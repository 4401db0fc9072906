//! Pure calendar arithmetic.
//!
//! Weekdays are numbered with Sunday as `0`. Months are 0-based and
//! out-of-range values normalize (month `12` is January of the next year).

use crate::calendar::clock::{Clock, SystemClock};
use crate::model::date::{CalendarDate, YearMonth};

/// Short weekday headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in `month` of `year`.
///
/// Computed as the day number of "day 0 of the next month".
pub fn days_in_month(year: i32, month: i32) -> u32 {
    YearMonth::new(year, month).last_day().day()
}

/// Weekday of day 1, `0..=6` with Sunday as `0`.
pub fn first_weekday_of_month(year: i32, month: i32) -> u32 {
    YearMonth::new(year, month).first_day().weekday()
}

pub fn is_same_day(a: &CalendarDate, b: &CalendarDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Whether `date` is today on the local wall clock.
pub fn is_today(date: &CalendarDate) -> bool {
    is_today_on(date, &SystemClock)
}

/// Whether `date` is today according to `clock`.
pub fn is_today_on<C: Clock + ?Sized>(date: &CalendarDate, clock: &C) -> bool {
    is_same_day(date, &clock.today())
}

/// English month name for a 0-based month; wraps like month arithmetic.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month % 12) as usize]
}

pub fn add_months(month: YearMonth, delta: i32) -> YearMonth {
    month.offset(delta)
}

#[cfg(test)]
mod tests {
    use super::{
        add_months, days_in_month, first_weekday_of_month, is_same_day, is_today_on, month_name,
    };
    use crate::calendar::clock::FixedClock;
    use crate::model::date::{CalendarDate, YearMonth};

    #[test]
    fn days_in_month_matches_gregorian_calendar() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2023, month as i32), *days, "month {month}");
        }
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2100, 1), 28);
        assert_eq!(days_in_month(2400, 1), 29);
    }

    #[test]
    fn days_in_month_stays_in_valid_range_over_many_years() {
        for year in 1890..2110 {
            for month in 0..12 {
                let days = days_in_month(year, month);
                assert!((28..=31).contains(&days), "{year}-{month}: {days}");
                assert!(first_weekday_of_month(year, month) <= 6);
            }
        }
    }

    #[test]
    fn out_of_range_months_normalize() {
        assert_eq!(days_in_month(2023, 13), days_in_month(2024, 1));
        assert_eq!(days_in_month(2024, -1), 31);
        assert_eq!(
            first_weekday_of_month(2024, 12),
            first_weekday_of_month(2025, 0)
        );
    }

    #[test]
    fn february_2024_starts_on_thursday() {
        assert_eq!(first_weekday_of_month(2024, 1), 4);
        assert_eq!(days_in_month(2024, 1), 29);
    }

    #[test]
    fn september_2024_starts_on_sunday() {
        assert_eq!(first_weekday_of_month(2024, 8), 0);
    }

    #[test]
    fn same_day_is_reflexive_symmetric_and_transitive() {
        let a = CalendarDate::new(2024, 1, 14);
        let b = CalendarDate::new(2024, 1, 14);
        let c = CalendarDate::new(2024, 2, -15);
        assert!(is_same_day(&a, &a));
        assert!(is_same_day(&a, &b) && is_same_day(&b, &a));
        assert!(is_same_day(&b, &c) && is_same_day(&a, &c));
        assert!(!is_same_day(&a, &CalendarDate::new(2023, 1, 14)));
    }

    #[test]
    fn is_today_uses_clock() {
        let clock = FixedClock::new(CalendarDate::new(2024, 1, 14));
        assert!(is_today_on(&CalendarDate::new(2024, 1, 14), &clock));
        assert!(!is_today_on(&CalendarDate::new(2024, 1, 15), &clock));
    }

    #[test]
    fn month_names_are_zero_based() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "January");
    }

    #[test]
    fn add_months_rolls_year() {
        assert_eq!(add_months(YearMonth::new(2024, 11), 1), YearMonth::new(2025, 0));
        assert_eq!(add_months(YearMonth::new(2024, 0), -1), YearMonth::new(2023, 11));
    }
}
