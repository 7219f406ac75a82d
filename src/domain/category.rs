use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Violation category of a disclosure record.
///
/// Closed set: every published list maps onto exactly one of these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Products endangering health
    Saglik,
    /// Counterfeit or adulterated products, first list
    Taklit1,
    /// Counterfeit or adulterated products, second list
    Taklit2,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Saglik, Self::Taklit1, Self::Taklit2];

    /// The code stored in the `category` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saglik => "saglik",
            Self::Taklit1 => "taklit1",
            Self::Taklit2 => "taklit2",
        }
    }

    /// Display label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Saglik => "Sağlık",
            Self::Taklit1 => "Taklit 1",
            Self::Taklit2 => "Taklit 2",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| format!("{} is not a known category", value))
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
