//! Name parsing - text to typed categories and units
//!
//! Accepts canonical names, singular and plural spellings, and symbols,
//! case-insensitively.

use crate::{registry, Category, ConversionError, LengthUnit, TemperatureUnit, Unit, VolumeUnit};

pub fn parse_category(s: &str) -> Result<Category, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "temperature" | "temp" => Ok(Category::Temperature),
        "length" | "distance" => Ok(Category::Length),
        "volume" => Ok(Category::Volume),
        _ => Err(ConversionError::UnknownCategory(s.trim().to_string())),
    }
}

pub fn parse_unit(s: &str) -> Result<Unit, ConversionError> {
    let unit: Unit = match s.trim().to_lowercase().as_str() {
        "celsius" | "c" | "°c" => TemperatureUnit::Celsius.into(),
        "fahrenheit" | "f" | "°f" => TemperatureUnit::Fahrenheit.into(),
        "kelvin" | "k" => TemperatureUnit::Kelvin.into(),

        "meters" | "meter" | "metres" | "metre" | "m" => LengthUnit::Meters.into(),
        "feet" | "foot" | "ft" => LengthUnit::Feet.into(),
        "miles" | "mile" | "mi" => LengthUnit::Miles.into(),

        "ml" | "milliliters" | "milliliter" | "millilitres" | "millilitre" => VolumeUnit::Milliliters.into(),
        "pints" | "pint" | "pt" => VolumeUnit::Pints.into(),
        "gallons" | "gallon" | "gal" => VolumeUnit::Gallons.into(),

        _ => return Err(ConversionError::UnknownUnit(s.trim().to_string())),
    };
    Ok(unit)
}

/// Parse a unit and require it to belong to `category`
pub fn parse_unit_in(category: Category, s: &str) -> Result<Unit, ConversionError> {
    let unit = parse_unit(s)?;
    if registry::is_valid(category, unit) {
        Ok(unit)
    } else {
        Err(ConversionError::InvalidUnitForCategory { category, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for category in registry::list_categories() {
            assert_eq!(parse_category(category.name()), Ok(category));
            for unit in registry::units_for(category) {
                assert_eq!(parse_unit(unit.name()), Ok(unit));
            }
        }
    }

    #[test]
    fn test_symbols_parse() {
        for category in registry::list_categories() {
            for unit in registry::units_for(category) {
                assert_eq!(parse_unit(unit.symbol()), Ok(unit), "symbol {}", unit.symbol());
            }
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse_unit(" Mile "), Ok(Unit::Length(LengthUnit::Miles)));
        assert_eq!(parse_unit("Milliliters"), Ok(Unit::Volume(VolumeUnit::Milliliters)));
        assert_eq!(parse_unit("°F"), Ok(Unit::Temperature(TemperatureUnit::Fahrenheit)));
        assert_eq!(parse_category("TEMP"), Ok(Category::Temperature));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(parse_unit("furlong"), Err(ConversionError::UnknownUnit("furlong".into())));
        assert_eq!(parse_category("mass"), Err(ConversionError::UnknownCategory("mass".into())));
    }

    #[test]
    fn test_parse_unit_in() {
        assert_eq!(parse_unit_in(Category::Volume, "gal"), Ok(Unit::Volume(VolumeUnit::Gallons)));
        assert!(matches!(
            parse_unit_in(Category::Volume, "feet"),
            Err(ConversionError::InvalidUnitForCategory { category: Category::Volume, .. })
        ));
    }
}
