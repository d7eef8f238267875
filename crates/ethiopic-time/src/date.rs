//! Gregorian `Date` type.
//!
//! Dates are represented as a serial number of days since **January 1, 1970**
//! (serial 0).  The year/month/day mapping uses the standard civil-calendar
//! day-count equations, so the full proleptic Gregorian range is handled
//! without per-year loops.
//!
//! This is the host-calendar primitive the Ethiopic conversion consumes:
//! component validation (February 30 and friends) happens here, and the
//! converter itself stays total.

use crate::weekday::Weekday;
use ethiopic_core::errors::Result;
use ethiopic_core::{ensure, fail, Settings};

/// A Gregorian calendar date represented as a serial number.
///
/// There is no null sentinel and no `Default`: a `Date` only comes out of
/// [`Date::from_ymd`], [`Date::from_serial`], or [`Date::today`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i64);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date(-719_162);

    /// Maximum valid date: December 31, year 9999.
    pub const MAX: Date = Date(2_932_896);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    ///
    /// Returns an error if the serial falls outside [`Date::MIN`],
    /// [`Date::MAX`].
    pub fn from_serial(serial: i64) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "serial {serial} out of range"
        );
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            fail!("year {year} out of range [1, 9999]");
        }
        if !(1..=12).contains(&month) {
            fail!("month {month} out of range [1, 12]");
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            fail!("day {day} out of range [1, {days_in}] for {year}-{month:02}");
        }
        Ok(Date(days_from_civil(year, month, day)))
    }

    /// Return the date treated as "today".
    ///
    /// Honors the [`Settings`] evaluation-date override when set; otherwise
    /// reads the system clock.  This is the only clock access in the library.
    pub fn today() -> Self {
        if let Some(serial) = Settings::instance().evaluation_date_serial() {
            return Date(serial);
        }
        use chrono::Datelike;
        let now = chrono::Local::now().date_naive();
        Date(days_from_civil(now.year(), now.month() as u8, now.day() as u8))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> i64 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        civil_from_days(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        civil_from_days(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let year = self.year();
        (self.0 - days_from_civil(year, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (index 4, Sunday = 0).
        let w = ((self.0 + 4).rem_euclid(7)) as u8;
        Weekday::from_index(w).expect("rem_euclid always in 0..=6")
    }

    /// Return the English month name (`"January"` … `"December"`).
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month() as usize - 1]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` moves backwards).
    pub fn add_days(self, n: i64) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i64 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for Date {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i64> for Date {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "{d} {} {y}", MONTH_NAMES[m as usize - 1])
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a leap year (standard Gregorian rule).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Number of days in a given year (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Convert (year, month, day) to days since 1970-01-01.
///
/// Civil-calendar day count: years are shifted so they start in March,
/// putting the leap day last, then counted in 400-year eras of 146097 days.
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let mp = if month > 2 { month as i64 - 3 } else { month as i64 + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Decompose days since 1970-01-01 into (year, month, day).
fn civil_from_days(serial: i64) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = (y + if m <= 2 { 1 } else { 0 }) as i32;
    (year, m, d)
}

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

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.serial(), 0);
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1970, 1, 1),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2023, 6, 15),
            (2024, 9, 11),
            (9999, 12, 31),
            (1, 1, 1),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_components() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 0, 1).is_err());
        assert!(Date::from_ymd(2024, 4, 31).is_err());
        assert!(Date::from_ymd(2024, 1, 0).is_err());
        assert!(Date::from_ymd(0, 1, 1).is_err());
        assert!(Date::from_ymd(10_000, 1, 1).is_err());
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(Date::from_ymd(2024, 3, 1).unwrap().day_of_year(), 61);
        assert_eq!(Date::from_ymd(2023, 3, 1).unwrap().day_of_year(), 60);
        assert_eq!(Date::from_ymd(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(Date::from_ymd(2023, 12, 31).unwrap().day_of_year(), 365);
        assert_eq!(Date::from_ymd(2024, 9, 11).unwrap().day_of_year(), 255);
        assert_eq!(Date::from_ymd(2023, 9, 11).unwrap().day_of_year(), 254);
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 was a Monday
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        // 2024-09-11 was a Wednesday
        assert_eq!(
            Date::from_ymd(2024, 9, 11).unwrap().weekday(),
            Weekday::Wednesday
        );
        // 2000-01-01 was a Saturday
        assert_eq!(
            Date::from_ymd(2000, 1, 1).unwrap().weekday(),
            Weekday::Saturday
        );
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert_eq!(d.days_between(d2), 31);
        let back = d2 - 31;
        assert_eq!(back, d);
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2024, 9, 11).unwrap();
        assert_eq!(d.to_string(), "11 September 2024");
        assert_eq!(format!("{d:?}"), "Date(2024-09-11)");
        assert_eq!(d.month_name(), "September");
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
    }
}
