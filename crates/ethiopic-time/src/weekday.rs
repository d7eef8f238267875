//! `Weekday` — day-of-week enum.
//!
//! Indexed 0–6 with **Sunday = 0**, matching the day-name table convention
//! used by the consuming application (the Ethiopic week mirrors Gregorian
//! weekday ordering, Ehud first).

/// Day of the week.
///
/// Variants are numbered 0–6 (Sunday = 0, Saturday = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0) — Ehud.
    Sunday = 0,
    /// Monday (1) — Segno.
    Monday = 1,
    /// Tuesday (2) — Maksegno.
    Tuesday = 2,
    /// Wednesday (3) — Erob.
    Wednesday = 3,
    /// Thursday (4) — Hamus.
    Thursday = 4,
    /// Friday (5) — Arb.
    Friday = 5,
    /// Saturday (6) — Kidame.
    Saturday = 6,
}

impl Weekday {
    /// Construct from the 0-based index (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Return the 0-based index (0 = Sunday … 6 = Saturday).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Return the English name (`"Sunday"` … `"Saturday"`).
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Return the Ethiopic name (`"Ehud"` … `"Kidame"`).
    pub fn ethiopic_name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Ehud",
            Weekday::Monday => "Segno",
            Weekday::Tuesday => "Maksegno",
            Weekday::Wednesday => "Erob",
            Weekday::Thursday => "Hamus",
            Weekday::Friday => "Arb",
            Weekday::Saturday => "Kidame",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Look up the Ethiopic day name for a 0-based weekday index
/// (0 = Sunday → `"Ehud"`).
///
/// Returns the `"Unknown"` sentinel for out-of-range input; callers treat it
/// as a display fallback, never as an error.
pub fn day_name(index: u8) -> &'static str {
    match Weekday::from_index(index) {
        Some(w) => w.ethiopic_name(),
        None => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 0..=6u8 {
            let w = Weekday::from_index(n).unwrap();
            assert_eq!(w.index(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(Weekday::from_index(7).is_none());
        assert_eq!(day_name(7), "Unknown");
        assert_eq!(day_name(255), "Unknown");
    }

    #[test]
    fn names() {
        assert_eq!(day_name(0), "Ehud");
        assert_eq!(day_name(6), "Kidame");
        assert_eq!(Weekday::Wednesday.ethiopic_name(), "Erob");
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
