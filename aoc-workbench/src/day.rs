//! Day and part identifiers

use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Days per event (1-25)
pub const DAYS: u8 = 25;

/// A validated puzzle day in `1..=25`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub fn new(day: u8) -> Result<Self, InputError> {
        if (1..=DAYS).contains(&day) {
            Ok(Self(day))
        } else {
            Err(InputError::InvalidDay(day.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-padded form used in unit file names (`01`..`25`)
    pub fn padded(self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Day {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| InputError::InvalidDay(s.to_string()))
            .and_then(|day| Day::new(day).map_err(|_| InputError::InvalidDay(s.to_string())))
    }
}

impl TryFrom<i64> for Day {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| InputError::InvalidDay(value.to_string()))
            .and_then(Day::new)
    }
}

/// One of the two puzzle parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    /// Name of the script function implementing this part
    pub fn function_name(self) -> &'static str {
        match self {
            Part::One => "part1",
            Part::Two => "part2",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Requested parts: a single part or both
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartSelection {
    #[default]
    All,
    Only(Part),
}

impl PartSelection {
    /// Parts to run, in ascending order
    pub fn parts(self) -> &'static [Part] {
        match self {
            PartSelection::All => &[Part::One, Part::Two],
            PartSelection::Only(Part::One) => &[Part::One],
            PartSelection::Only(Part::Two) => &[Part::Two],
        }
    }
}

impl FromStr for PartSelection {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(PartSelection::All),
            "1" => Ok(PartSelection::Only(Part::One)),
            "2" => Ok(PartSelection::Only(Part::Two)),
            other => Err(InputError::InvalidPart(other.to_string())),
        }
    }
}
