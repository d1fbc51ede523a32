//! Conversion errors

use gauge_core::GaugeError;
use thiserror::Error;
use crate::{Category, Unit};

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// A unit was used with a category it does not belong to
    #[error("unit '{unit}' does not belong to category '{category}'")]
    InvalidUnitForCategory { category: Category, unit: Unit },

    /// NaN or infinite input under the reject policy
    #[error("input must be finite, got {0}")]
    NonFiniteInput(f64),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl From<ConversionError> for GaugeError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidUnitForCategory { category, unit } => {
                GaugeError::invalid_unit_for_category(unit.name(), category.name())
            }
            ConversionError::NonFiniteInput(v) => GaugeError::non_finite(v),
            ConversionError::UnknownUnit(name) => GaugeError::unknown_unit(&name),
            ConversionError::UnknownCategory(name) => GaugeError::unknown_category(&name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LengthUnit;
    use gauge_core::codes;

    #[test]
    fn test_display() {
        let err = ConversionError::InvalidUnitForCategory {
            category: Category::Volume,
            unit: Unit::Length(LengthUnit::Feet),
        };
        assert_eq!(err.to_string(), "unit 'feet' does not belong to category 'volume'");
    }

    #[test]
    fn test_into_gauge_error() {
        let err: GaugeError = ConversionError::NonFiniteInput(f64::NAN).into();
        assert_eq!(err.code, codes::NON_FINITE);

        let err: GaugeError = ConversionError::UnknownCategory("mass".into()).into();
        assert_eq!(err.code, codes::UNKNOWN_CATEGORY);
    }
}
