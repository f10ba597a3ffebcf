use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Semester {
    First,
    Second,
    /// Term 3, held over the summer.
    Summer,
}

impl Semester {
    pub fn number(&self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Second => 2,
            Semester::Summer => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Semester::First),
            2 => Some(Semester::Second),
            3 => Some(Semester::Summer),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Semester::First => "S1",
            Semester::Second => "S2",
            Semester::Summer => "Summer",
        }
    }
}

impl Default for Semester {
    fn default() -> Self {
        Semester::First
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Semester {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let digits = normalized.strip_prefix('s').unwrap_or(&normalized);

        if let Ok(n) = digits.parse::<u8>() {
            return Semester::from_number(n).ok_or_else(|| InputError::InvalidSemester(s.to_string()));
        }

        match normalized.as_str() {
            "summer" | "été" | "ete" => Ok(Semester::Summer),
            _ => Err(InputError::InvalidSemester(s.to_string())),
        }
    }
}

/// A school year and one of its terms.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    pub year: i32,
    pub semester: Semester,
}

impl Period {
    pub fn new(year: i32, semester: Semester) -> Self {
        Self { year, semester }
    }

    pub fn current_year() -> i32 {
        Local::now().year()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.semester)
    }
}

/// Accepts `2025/1`, `2025-S2`, `2025 summer` and `2025:3`.
impl FromStr for Period {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year_str, semester_str) = s
            .trim()
            .split_once(|c: char| c == '/' || c == '-' || c == ':' || c.is_whitespace())
            .ok_or_else(|| InputError::InvalidPeriod(s.to_string()))?;

        let year = parse_year(year_str)?;
        let semester = semester_str.parse()?;
        Ok(Period::new(year, semester))
    }
}

pub fn parse_year(input: &str) -> Result<i32, InputError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| InputError::InvalidYear(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_semester() {
        assert_eq!("1".parse::<Semester>().unwrap(), Semester::First);
        assert_eq!("S2".parse::<Semester>().unwrap(), Semester::Second);
        assert_eq!("3".parse::<Semester>().unwrap(), Semester::Summer);
        assert_eq!("summer".parse::<Semester>().unwrap(), Semester::Summer);
        assert_eq!("été".parse::<Semester>().unwrap(), Semester::Summer);

        assert!("4".parse::<Semester>().is_err());
        assert!("spring".parse::<Semester>().is_err());
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("2025/1".parse::<Period>().unwrap(), Period::new(2025, Semester::First));
        assert_eq!("2024-S2".parse::<Period>().unwrap(), Period::new(2024, Semester::Second));
        assert_eq!("2023 summer".parse::<Period>().unwrap(), Period::new(2023, Semester::Summer));

        assert!("2025".parse::<Period>().is_err());
        assert!("twenty/1".parse::<Period>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::new(2025, Semester::First).to_string(), "2025 S1");
        assert_eq!(Period::new(2025, Semester::Summer).to_string(), "2025 Summer");
    }
}
