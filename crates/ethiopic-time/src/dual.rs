//! Dual-calendar display: a Gregorian long date paired with its Ethiopic
//! equivalent, the form receipts and dashboards render side by side.

use crate::date::Date;
use crate::ethiopic::EthiopicDate;

/// A date formatted in both calendars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualDate {
    /// Gregorian long form, e.g. `"September 12, 2024"`.
    pub gregorian: String,
    /// Ethiopic long form, e.g. `"Meskerem 1, 2017"`.
    pub ethiopic: String,
}

impl DualDate {
    /// Format a Gregorian date in both calendars.
    pub fn of(date: Date) -> Self {
        DualDate {
            gregorian: format!(
                "{} {}, {}",
                date.month_name(),
                date.day_of_month(),
                date.year()
            ),
            ethiopic: EthiopicDate::from_gregorian(date).format_long(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DualDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("DualDate", 2)?;
        s.serialize_field("gregorian", &self.gregorian)?;
        s.serialize_field("ethiopian", &self.ethiopic)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_calendars() {
        let d = Date::from_ymd(2024, 9, 12).unwrap();
        let dual = DualDate::of(d);
        assert_eq!(dual.gregorian, "September 12, 2024");
        assert_eq!(dual.ethiopic, "Meskerem 1, 2017");
    }
}
