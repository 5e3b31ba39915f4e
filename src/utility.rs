//! Utility types tracked by the application and their per-type readings.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A tracked consumption category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Utility {
    Electricity,
    Water,
    Gas,
    Oil,
    #[strum(serialize = "CNG")]
    Cng,
    Petrol,
}

impl Utility {
    /// Column of the `consumption` table holding this utility's reading.
    pub fn column(&self) -> &'static str {
        match self {
            Utility::Electricity => "electricity",
            Utility::Water => "water",
            Utility::Gas => "gas",
            Utility::Oil => "oil",
            Utility::Cng => "cng",
            Utility::Petrol => "petrol",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Utility::Electricity => "kWh",
            Utility::Water => "L",
            Utility::Gas => "m3",
            Utility::Oil => "L",
            Utility::Cng => "kg",
            Utility::Petrol => "L",
        }
    }

    /// All utilities in display order.
    pub fn all() -> Vec<Utility> {
        Utility::iter().collect()
    }
}

/// One value per utility type, used both for a stored record and for totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readings {
    pub electricity: f64,
    pub water: f64,
    pub gas: f64,
    pub oil: f64,
    pub cng: f64,
    pub petrol: f64,
}

impl Readings {
    pub fn get(&self, utility: Utility) -> f64 {
        match utility {
            Utility::Electricity => self.electricity,
            Utility::Water => self.water,
            Utility::Gas => self.gas,
            Utility::Oil => self.oil,
            Utility::Cng => self.cng,
            Utility::Petrol => self.petrol,
        }
    }

    pub fn set(&mut self, utility: Utility, value: f64) {
        let slot = match utility {
            Utility::Electricity => &mut self.electricity,
            Utility::Water => &mut self.water,
            Utility::Gas => &mut self.gas,
            Utility::Oil => &mut self.oil,
            Utility::Cng => &mut self.cng,
            Utility::Petrol => &mut self.petrol,
        };
        *slot = value;
    }

    /// Utilities with a non-zero value.
    pub fn non_zero(&self) -> Vec<Utility> {
        Utility::iter().filter(|u| self.get(*u) != 0.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Utility::from_str("gas").unwrap(), Utility::Gas);
        assert_eq!(Utility::from_str("CNG").unwrap(), Utility::Cng);
        assert_eq!(Utility::from_str("cng").unwrap(), Utility::Cng);
        assert_eq!(Utility::from_str("Electricity").unwrap(), Utility::Electricity);
        assert!(Utility::from_str("coal").is_err());
    }

    #[test]
    fn display_matches_button_labels() {
        let labels: Vec<String> = Utility::all().iter().map(|u| u.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Electricity", "Water", "Gas", "Oil", "CNG", "Petrol"]
        );
    }

    #[test]
    fn columns_are_distinct() {
        let columns: HashSet<&str> = Utility::all().iter().map(|u| u.column()).collect();
        assert_eq!(columns.len(), 6);
    }

    #[test]
    fn set_touches_only_one_slot() {
        let mut readings = Readings::default();
        readings.set(Utility::Oil, 5.0);
        assert_eq!(readings.get(Utility::Oil), 5.0);
        assert_eq!(readings.non_zero(), vec![Utility::Oil]);
    }
}
