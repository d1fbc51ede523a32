//! Unit registry - the closed set of categories and their units
//!
//! Declared order is display order, and the first unit of a category
//! is its default.

use crate::{Category, LengthUnit, TemperatureUnit, Unit, VolumeUnit};

/// All categories in display order
pub const fn list_categories() -> [Category; 3] {
    Category::ALL
}

/// The three units of a category in display order
pub const fn units_for(category: Category) -> [Unit; 3] {
    match category {
        Category::Temperature => [
            Unit::Temperature(TemperatureUnit::Celsius),
            Unit::Temperature(TemperatureUnit::Fahrenheit),
            Unit::Temperature(TemperatureUnit::Kelvin),
        ],
        Category::Length => [
            Unit::Length(LengthUnit::Meters),
            Unit::Length(LengthUnit::Feet),
            Unit::Length(LengthUnit::Miles),
        ],
        Category::Volume => [
            Unit::Volume(VolumeUnit::Milliliters),
            Unit::Volume(VolumeUnit::Pints),
            Unit::Volume(VolumeUnit::Gallons),
        ],
    }
}

/// First unit of the category
pub const fn default_unit(category: Category) -> Unit {
    units_for(category)[0]
}

pub fn is_valid(category: Category, unit: Unit) -> bool {
    units_for(category).contains(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_unit() {
        for category in list_categories() {
            assert_eq!(default_unit(category), units_for(category)[0]);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_unit(Category::Temperature), Unit::Temperature(TemperatureUnit::Celsius));
        assert_eq!(default_unit(Category::Length), Unit::Length(LengthUnit::Meters));
        assert_eq!(default_unit(Category::Volume), Unit::Volume(VolumeUnit::Milliliters));
    }

    #[test]
    fn test_units_stay_in_their_category() {
        for category in list_categories() {
            for unit in units_for(category) {
                assert_eq!(unit.category(), category);
                assert!(is_valid(category, unit));
            }
        }
    }

    #[test]
    fn test_cross_category_is_invalid() {
        assert!(!is_valid(Category::Length, Unit::Temperature(TemperatureUnit::Kelvin)));
        assert!(!is_valid(Category::Temperature, Unit::Volume(VolumeUnit::Pints)));
    }

    #[test]
    fn test_matches_per_category_order() {
        let temperature: Vec<Unit> = TemperatureUnit::ALL.into_iter().map(Unit::from).collect();
        assert_eq!(units_for(Category::Temperature).to_vec(), temperature);

        let length: Vec<Unit> = LengthUnit::ALL.into_iter().map(Unit::from).collect();
        assert_eq!(units_for(Category::Length).to_vec(), length);

        let volume: Vec<Unit> = VolumeUnit::ALL.into_iter().map(Unit::from).collect();
        assert_eq!(units_for(Category::Volume).to_vec(), volume);
    }
}
