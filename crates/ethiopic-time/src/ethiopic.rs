//! Gregorian → Ethiopic conversion and the `EthiopicDate` value type.
//!
//! The Ethiopic year has 12 months of 30 days followed by Pagume, a 5–6 day
//! intercalary month, and starts near September 11 in the Gregorian
//! calendar.  The conversion works through the Gregorian day-of-year: it
//! locates the Ethiopic New Year within the Gregorian year (day 256 in a
//! Gregorian leap year, day 255 otherwise) and counts days from there.
//!
//! Two quirks of this mapping are preserved deliberately rather than fixed;
//! see [`EthiopicDate::from_gregorian`].

use crate::date::{days_in_year, is_leap_year, Date};
use crate::month::EthiopicMonth;
use crate::weekday::Weekday;

/// A date in the Ethiopic calendar.
///
/// Pure value type: produced fresh by every conversion, compared by field
/// equality, and never mutated.  The month and weekday names are derived
/// from the `month` and `weekday` fields, never independently settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthiopicDate {
    year: i32,
    month: EthiopicMonth,
    day: u8,
    weekday: Weekday,
}

impl EthiopicDate {
    /// Convert a Gregorian date to its Ethiopic representation.
    ///
    /// Total over all valid [`Date`] values; invalid component combinations
    /// are rejected by [`Date::from_ymd`] before they can reach this point.
    ///
    /// Deliberate quirks of this mapping:
    /// * The year number comes from a plain before/after-September-11 check,
    ///   independent of the day-of-year boundary below.  On September 11
    ///   itself the two can disagree by one year (covered by tests, not
    ///   reconciled).
    /// * The New Year boundary day (255/256) is chosen from the leap status
    ///   of the *current* Gregorian year even on the early-year path where
    ///   days are counted from the previous year's New Year.
    pub fn from_gregorian(date: Date) -> Self {
        let (g_year, g_month, g_day) = (date.year(), date.month(), date.day_of_month());

        let year = if g_month < 9 || (g_month == 9 && g_day < 11) {
            g_year - 8
        } else {
            g_year - 7
        };

        let eth_doy = ethiopic_day_of_year(date);
        let (month_number, day) = if eth_doy > 360 {
            (13, (eth_doy - 360) as u8)
        } else {
            (((eth_doy - 1) / 30 + 1) as u8, ((eth_doy - 1) % 30 + 1) as u8)
        };
        let month = EthiopicMonth::from_number(month_number)
            .expect("decomposed month ordinal always in 1..=13");

        EthiopicDate {
            year,
            month,
            day,
            weekday: date.weekday(),
        }
    }

    /// Convert the current date (see [`Date::today`]) to Ethiopic form.
    ///
    /// Tests needing determinism pin the date through the
    /// `ethiopic_core::Settings` evaluation-date override instead of calling
    /// this against the live clock.
    pub fn today() -> Self {
        Self::from_gregorian(Date::today())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the Ethiopic year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month.
    pub fn month(&self) -> EthiopicMonth {
        self.month
    }

    /// Return the day of the month (1–30, or 1–6 in Pagume).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the month name (`"Meskerem"` … `"Pagume"`).
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Return the weekday of the originating Gregorian date.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Return the Ethiopic day name of the weekday (`"Ehud"` … `"Kidame"`).
    pub fn day_of_week(&self) -> &'static str {
        self.weekday.ethiopic_name()
    }

    /// Return the 1-based day ordinal within the Ethiopic year.
    pub fn day_of_year(&self) -> u16 {
        (self.month.number() as u16 - 1) * 30 + self.day as u16
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Long form: `"Meskerem 1, 2017"`.
    pub fn format_long(&self) -> String {
        format!("{} {}, {}", self.month.name(), self.day, self.year)
    }

    /// Short numeric form: `"1/1/2017"` (day/month/year).
    pub fn format_short(&self) -> String {
        format!("{}/{}/{}", self.day, self.month.number(), self.year)
    }
}

impl std::fmt::Display for EthiopicDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}, {}", self.month.name(), self.day, self.year)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EthiopicDate {
    /// Serializes in the JSON shape the consuming application expects:
    /// numeric `year`/`month`/`day` plus the derived `monthName` and
    /// `dayOfWeek` strings.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("EthiopicDate", 5)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month.number())?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("monthName", self.month.name())?;
        s.serialize_field("dayOfWeek", self.weekday.ethiopic_name())?;
        s.end()
    }
}

// ── Day-of-year mapping ───────────────────────────────────────────────────────

/// The Gregorian day-of-year on which the Ethiopic New Year falls for a
/// given Gregorian year: 256 in a leap year, 255 otherwise.
///
/// Both values correspond to September 12 (day 255 in a 365-day year, day
/// 256 in a 366-day year); the leap adjustment shifts the count, not the
/// calendar day.
pub fn new_year_day(gregorian_year: i32) -> u16 {
    if is_leap_year(gregorian_year) {
        256
    } else {
        255
    }
}

/// Return the 1-based ordinal of a Gregorian date within its Ethiopic year.
///
/// Dates on or after the New Year boundary count from this Gregorian year's
/// boundary; earlier dates count from the previous Gregorian year's.
pub fn ethiopic_day_of_year(date: Date) -> u16 {
    let doy = date.day_of_year() as i32;
    let boundary = new_year_day(date.year()) as i32;
    let eth_doy = if doy >= boundary {
        doy - boundary + 1
    } else {
        doy + days_in_year(date.year() - 1) as i32 - boundary + 1
    };
    eth_doy as u16
}

// ── Tests ─────────────────────────────────────────────────────────────────────
