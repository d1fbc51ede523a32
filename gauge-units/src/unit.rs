//! Units scoped to their category

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::{Category, ConversionError, LengthUnit, TemperatureUnit, VolumeUnit};

/// A measurement scale belonging to exactly one category
///
/// The category is carried by the variant, so a unit can never be
/// confused with a unit from another category of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Unit {
    Temperature(TemperatureUnit),
    Length(LengthUnit),
    Volume(VolumeUnit),
}

impl Unit {
    pub const fn category(self) -> Category {
        match self {
            Unit::Temperature(_) => Category::Temperature,
            Unit::Length(_) => Category::Length,
            Unit::Volume(_) => Category::Volume,
        }
    }

    /// Canonical name, also used for serialization
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Temperature(u) => u.name(),
            Unit::Length(u) => u.name(),
            Unit::Volume(u) => u.name(),
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Temperature(u) => u.symbol(),
            Unit::Length(u) => u.symbol(),
            Unit::Volume(u) => u.symbol(),
        }
    }

    /// Convert `value` from this unit to `target`, within this unit's category
    pub fn convert_to(self, target: Unit, value: f64) -> Result<f64, ConversionError> {
        crate::convert(self.category(), self, target, value)
    }
}

impl From<TemperatureUnit> for Unit {
    fn from(u: TemperatureUnit) -> Self {
        Unit::Temperature(u)
    }
}

impl From<LengthUnit> for Unit {
    fn from(u: LengthUnit) -> Self {
        Unit::Length(u)
    }
}

impl From<VolumeUnit> for Unit {
    fn from(u: VolumeUnit) -> Self {
        Unit::Volume(u)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_unit(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_follows_variant() {
        assert_eq!(Unit::from(TemperatureUnit::Kelvin).category(), Category::Temperature);
        assert_eq!(Unit::from(LengthUnit::Feet).category(), Category::Length);
        assert_eq!(Unit::from(VolumeUnit::Pints).category(), Category::Volume);
    }

    #[test]
    fn test_serialize_as_name() {
        let unit = Unit::from(VolumeUnit::Milliliters);
        assert_eq!(serde_json::to_string(&unit).unwrap(), "\"ml\"");

        let parsed: Unit = serde_json::from_str("\"miles\"").unwrap();
        assert_eq!(parsed, Unit::Length(LengthUnit::Miles));

        assert!(serde_json::from_str::<Unit>("\"furlongs\"").is_err());
    }

    #[test]
    fn test_convert_to_rejects_other_category() {
        let celsius = Unit::from(TemperatureUnit::Celsius);
        assert_eq!(celsius.convert_to(TemperatureUnit::Fahrenheit.into(), 0.0), Ok(32.0));
        assert!(matches!(
            celsius.convert_to(LengthUnit::Meters.into(), 1.0),
            Err(ConversionError::InvalidUnitForCategory { .. })
        ));
    }
}
