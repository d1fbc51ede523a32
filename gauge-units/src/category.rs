//! Physical quantity categories

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::ConversionError;

/// Top-level physical quantity partitioning the unit space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Temperature,
    Length,
    Volume,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Temperature, Category::Length, Category::Volume];

    pub const fn name(self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Length => "length",
            Category::Volume => "volume",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_category(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.to_string()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Volume".parse::<Category>().unwrap(), Category::Volume);
        assert!("mass".parse::<Category>().is_err());
    }
}
