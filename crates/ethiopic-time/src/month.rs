//! `EthiopicMonth` — month-of-year enum for the Ethiopic calendar.

/// Month of the Ethiopic year.
///
/// Variants are numbered 1–13.  Months 1–12 have 30 days each; Pagume (13)
/// is the short intercalary month of 5 or 6 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum EthiopicMonth {
    /// Meskerem (1), first month — starts at the Ethiopic New Year.
    Meskerem = 1,
    /// Tikimt (2).
    Tikimt = 2,
    /// Hidar (3).
    Hidar = 3,
    /// Tahsas (4).
    Tahsas = 4,
    /// Tir (5).
    Tir = 5,
    /// Yekatit (6).
    Yekatit = 6,
    /// Megabit (7).
    Megabit = 7,
    /// Miazia (8).
    Miazia = 8,
    /// Ginbot (9).
    Ginbot = 9,
    /// Sene (10).
    Sene = 10,
    /// Hamle (11).
    Hamle = 11,
    /// Nehase (12).
    Nehase = 12,
    /// Pagume (13), the 5–6 day intercalary month.
    Pagume = 13,
}

impl EthiopicMonth {
    /// Construct from a number (1 = Meskerem … 13 = Pagume).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(EthiopicMonth::Meskerem),
            2 => Some(EthiopicMonth::Tikimt),
            3 => Some(EthiopicMonth::Hidar),
            4 => Some(EthiopicMonth::Tahsas),
            5 => Some(EthiopicMonth::Tir),
            6 => Some(EthiopicMonth::Yekatit),
            7 => Some(EthiopicMonth::Megabit),
            8 => Some(EthiopicMonth::Miazia),
            9 => Some(EthiopicMonth::Ginbot),
            10 => Some(EthiopicMonth::Sene),
            11 => Some(EthiopicMonth::Hamle),
            12 => Some(EthiopicMonth::Nehase),
            13 => Some(EthiopicMonth::Pagume),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the month name (`"Meskerem"` … `"Pagume"`).
    pub fn name(&self) -> &'static str {
        match self {
            EthiopicMonth::Meskerem => "Meskerem",
            EthiopicMonth::Tikimt => "Tikimt",
            EthiopicMonth::Hidar => "Hidar",
            EthiopicMonth::Tahsas => "Tahsas",
            EthiopicMonth::Tir => "Tir",
            EthiopicMonth::Yekatit => "Yekatit",
            EthiopicMonth::Megabit => "Megabit",
            EthiopicMonth::Miazia => "Miazia",
            EthiopicMonth::Ginbot => "Ginbot",
            EthiopicMonth::Sene => "Sene",
            EthiopicMonth::Hamle => "Hamle",
            EthiopicMonth::Nehase => "Nehase",
            EthiopicMonth::Pagume => "Pagume",
        }
    }

    /// Return `true` for Pagume, the short 13th month.
    pub fn is_intercalary(&self) -> bool {
        matches!(self, EthiopicMonth::Pagume)
    }
}

impl std::fmt::Display for EthiopicMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<EthiopicMonth> for u8 {
    fn from(m: EthiopicMonth) -> u8 {
        m as u8
    }
}

/// Look up the Ethiopic month name for a 1-based month number.
///
/// Returns the `"Unknown"` sentinel for out-of-range input; callers treat it
/// as a display fallback, never as an error.
pub fn month_name(number: u8) -> &'static str {
    match EthiopicMonth::from_number(number) {
        Some(m) => m.name(),
        None => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=13u8 {
            let m = EthiopicMonth::from_number(n).unwrap();
            assert_eq!(m.number(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(EthiopicMonth::from_number(0).is_none());
        assert!(EthiopicMonth::from_number(14).is_none());
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(14), "Unknown");
    }

    #[test]
    fn names() {
        assert_eq!(month_name(1), "Meskerem");
        assert_eq!(month_name(13), "Pagume");
        assert!(EthiopicMonth::Pagume.is_intercalary());
        assert!(!EthiopicMonth::Meskerem.is_intercalary());
        assert_eq!(EthiopicMonth::Tir.to_string(), "Tir");
    }
}
