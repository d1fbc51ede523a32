//! Gauge Units - Conversions within a quantity category
//!
//! Three fixed categories, three units each:
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Length (meters, feet, miles)
//! - Volume (ml, pints, gallons)
//!
//! Every pair of units inside a category has its own direct formula.
//! Units carry their category, and conversions that mix categories fail
//! with [`ConversionError::InvalidUnitForCategory`].

mod category;
mod unit;
mod error;
mod temperature;
mod length;
mod volume;
mod registry;
mod convert;
mod selection;
mod parse;
mod helpers;
mod functions;

pub use category::Category;
pub use unit::Unit;
pub use error::ConversionError;
pub use temperature::TemperatureUnit;
pub use length::LengthUnit;
pub use volume::VolumeUnit;
pub use registry::{list_categories, units_for, default_unit, is_valid};
pub use convert::{convert, ConversionRequest};
pub use selection::Selection;
pub use parse::{parse_category, parse_unit, parse_unit_in};

use gauge_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Registry (4 functions)
        .with_function(functions::ListCategories)
        .with_function(functions::ListUnits)
        .with_function(functions::DefaultUnit)
        .with_function(functions::IsValidUnit)

        // Conversion (1 function)
        .with_function(functions::Convert)

        // Inspection (1 function)
        .with_function(functions::UnitInfo)
}

/// Registry with every unit function loaded
pub fn standard_registry() -> PluginRegistry {
    load_units_library(PluginRegistry::new())
}
