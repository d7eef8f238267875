//! Ethiopic → Gregorian month key (the month-picker inverse).
//!
//! Maps an Ethiopic (year, month) selection to the Gregorian year-month the
//! application stores and queries by.  Deliberately coarse: Meskerem ≈
//! September, so the mapping is a fixed +7/+8 shift with a wrap past
//! December.  It does **not** invert the day-of-year conversion in
//! [`crate::ethiopic`] and is never used for exact dates.

use crate::date::Date;
use crate::month::EthiopicMonth;
use ethiopic_core::errors::Result;

/// A Gregorian year-month key, displayed as `"2024-09"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    year: i32,
    month: u8,
}

impl MonthKey {
    /// Map an Ethiopic year and month to the Gregorian month key.
    ///
    /// `gregorian year = ethiopic year + 7`, `gregorian month = ethiopic
    /// month + 8`, wrapping past December into the next year.  Pagume (13)
    /// wraps to September of the following Gregorian year.
    pub fn from_ethiopic(eth_year: i32, month: EthiopicMonth) -> Self {
        let mut year = eth_year + 7;
        let mut m = month.number() as i32 + 8;
        if m > 12 {
            m -= 12;
            year += 1;
        }
        MonthKey {
            year,
            month: m as u8,
        }
    }

    /// Return the Gregorian year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the Gregorian month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the first day of the keyed month, the form payments are
    /// stored under downstream.
    pub fn first_day(&self) -> Result<Date> {
        Date::from_ymd(self.year, self.month, 1)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MonthKey {
    /// Serializes as the `"YYYY-MM"` string the application stores.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
