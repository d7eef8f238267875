//! # ethiopic-time
//!
//! Gregorian `Date` primitive and Ethiopic calendar conversion.
//!
//! The Gregorian→Ethiopic mapping is total and purely computational; the
//! Ethiopic→Gregorian direction exists only at month granularity (the
//! [`MonthKey`] picker mapping) and is intentionally not a true inverse.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Gregorian `Date` type.
pub mod date;

/// Dual-calendar display pair.
pub mod dual;

/// `EthiopicDate` and the Gregorian → Ethiopic conversion.
pub mod ethiopic;

/// `EthiopicMonth` — month of the Ethiopic year.
pub mod month;

/// Ethiopic → Gregorian month key (picker inverse).
pub mod month_key;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, days_in_year, is_leap_year, Date};
pub use dual::DualDate;
pub use ethiopic::{ethiopic_day_of_year, new_year_day, EthiopicDate};
pub use month::{month_name, EthiopicMonth};
pub use month_key::MonthKey;
pub use weekday::{day_name, Weekday};
