use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chip {
    Red,
    Black,
}

impl Chip {
    /// Get the opposing color
    pub fn other(self) -> Chip {
        match self {
            Chip::Red => Chip::Black,
            Chip::Black => Chip::Red,
        }
    }

    /// Get chip name for display
    pub fn name(self) -> &'static str {
        match self {
            Chip::Red => "Red",
            Chip::Black => "Black",
        }
    }

    /// Single-character symbol used when rendering a board
    pub fn symbol(self) -> char {
        match self {
            Chip::Red => 'R',
            Chip::Black => 'B',
        }
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chip {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Chip::Red),
            "black" | "b" => Ok(Chip::Black),
            _ => Err(ParseError::UnknownChip(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_chip() {
        assert_eq!(Chip::Red.other(), Chip::Black);
        assert_eq!(Chip::Black.other(), Chip::Red);
    }

    #[test]
    fn test_chip_name() {
        assert_eq!(Chip::Red.name(), "Red");
        assert_eq!(Chip::Black.to_string(), "Black");
    }

    #[test]
    fn test_parse_chip() {
        assert_eq!("red".parse::<Chip>(), Ok(Chip::Red));
        assert_eq!("BLACK".parse::<Chip>(), Ok(Chip::Black));
        assert_eq!("b".parse::<Chip>(), Ok(Chip::Black));
        assert_eq!(
            "yellow".parse::<Chip>(),
            Err(ParseError::UnknownChip("yellow".to_string()))
        );
    }
}
