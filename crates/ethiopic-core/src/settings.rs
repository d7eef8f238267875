//! Global library settings.
//!
//! [`Settings`] holds an optional **evaluation date** — the date treated as
//! "today" by `Date::today()` and everything layered on it.  When unset, the
//! library falls back to the system clock, so non-determinism stays isolated
//! to that single call site.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Each test that changes the evaluation
//! date should restore it when done.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the ethiopic-rs library.
///
/// Currently the only setting is the evaluation date override, expressed as
/// a serial number (days since 1970-01-01).
pub struct Settings {
    evaluation_date: Mutex<Option<i64>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the evaluation date serial number (days since 1970-01-01).
    ///
    /// Returns `None` if no evaluation date has been set.
    pub fn evaluation_date_serial(&self) -> Option<i64> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i64) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use the system clock".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_reset() {
        let settings = Settings::instance();
        settings.set_evaluation_date_serial(19_978);
        assert_eq!(settings.evaluation_date_serial(), Some(19_978));
        settings.reset_evaluation_date();
        assert_eq!(settings.evaluation_date_serial(), None);
    }
}
