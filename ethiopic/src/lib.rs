//! # ethiopic
//!
//! Ethiopic (Ethiopian) calendar conversion library.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `ethiopic-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ethiopic = "0.1"
//! ```
//!
//! ```rust
//! use ethiopic::time::{Date, EthiopicDate, EthiopicMonth, MonthKey};
//!
//! // Gregorian -> Ethiopic, total over every valid date.
//! let d = Date::from_ymd(2024, 9, 12).unwrap();
//! let e = EthiopicDate::from_gregorian(d);
//! assert_eq!(e.to_string(), "Meskerem 1, 2017");
//!
//! // Month-picker inverse: Ethiopic (year, month) -> Gregorian month key.
//! let key = MonthKey::from_ethiopic(2016, EthiopicMonth::Tir);
//! assert_eq!(key.to_string(), "2024-01");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, `Result` alias, and global settings.
pub use ethiopic_core as core;

/// Date types and the calendar conversion.
pub use ethiopic_time as time;
