//! Puzzle identity and data selection

use crate::error::PuzzleError;
use std::fmt;

/// First day of the advent window
pub const FIRST_DAY: u8 = 1;
/// Last day of the advent window
pub const LAST_DAY: u8 = 25;

/// Identifies a single puzzle by year and day
///
/// The day is always within `FIRST_DAY..=LAST_DAY`; the only way to build a
/// `PuzzleId` is through [`PuzzleId::new`], which validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleId {
    year: u16,
    day: u8,
}

impl PuzzleId {
    /// Validate and build a puzzle identity
    ///
    /// Takes wide integers so that out-of-range user input (negative days,
    /// day 26 from the "tomorrow" default) reaches the day check instead of
    /// failing a narrowing conversion first.
    pub fn new(year: i64, day: i64) -> Result<Self, PuzzleError> {
        if !(i64::from(FIRST_DAY)..=i64::from(LAST_DAY)).contains(&day) {
            return Err(PuzzleError::InvalidDay(day));
        }
        let year = u16::try_from(year).map_err(|_| PuzzleError::InvalidYear(year))?;
        Ok(Self {
            year,
            day: day as u8,
        })
    }

    /// The puzzle year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The puzzle day (1-25)
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Zero-padded day, e.g. `"05"`
    pub fn day_padded(&self) -> String {
        format!("{:02}", self.day)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

/// Which data file a solver reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DataType {
    /// The personal puzzle input
    #[default]
    Input,
    /// The small example from the puzzle text
    Example,
}

impl DataType {
    /// File name of this data type inside a day directory
    pub fn file_name(&self) -> &'static str {
        match self {
            DataType::Input => "input.txt",
            DataType::Example => "example.txt",
        }
    }

    /// Whether answers computed from this data may be submitted
    pub fn is_submittable(&self) -> bool {
        matches!(self, DataType::Input)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Input => f.write_str("input"),
            DataType::Example => f.write_str("example"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_day_bounds() {
        assert!(PuzzleId::new(2023, 1).is_ok());
        assert!(PuzzleId::new(2023, 25).is_ok());
        assert_eq!(PuzzleId::new(2023, 0), Err(PuzzleError::InvalidDay(0)));
        assert_eq!(PuzzleId::new(2023, 26), Err(PuzzleError::InvalidDay(26)));
        assert_eq!(PuzzleId::new(2023, -1), Err(PuzzleError::InvalidDay(-1)));
    }

    #[test]
    fn test_day_checked_before_year() {
        assert_eq!(PuzzleId::new(-5, 40), Err(PuzzleError::InvalidDay(40)));
        assert_eq!(PuzzleId::new(-5, 4), Err(PuzzleError::InvalidYear(-5)));
    }

    #[test]
    fn test_day_padded() {
        let id = PuzzleId::new(2023, 5).unwrap();
        assert_eq!(id.day_padded(), "05");
        assert_eq!(id.to_string(), "2023/05");
        assert_eq!(PuzzleId::new(2023, 12).unwrap().day_padded(), "12");
    }

    #[test]
    fn test_data_type_files() {
        assert_eq!(DataType::Input.file_name(), "input.txt");
        assert_eq!(DataType::Example.file_name(), "example.txt");
        assert_eq!(DataType::Example.to_string(), "example");
        assert!(!DataType::Example.is_submittable());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_out_of_window_days_rejected(day in prop_oneof![i64::MIN..1i64, 26i64..i64::MAX]) {
            prop_assert_eq!(PuzzleId::new(2024, day), Err(PuzzleError::InvalidDay(day)));
        }

        #[test]
        fn prop_window_days_accepted(year in 2015i64..2100, day in 1i64..=25) {
            let id = PuzzleId::new(year, day).unwrap();
            prop_assert_eq!(i64::from(id.year()), year);
            prop_assert_eq!(i64::from(id.day()), day);
        }
    }
}
