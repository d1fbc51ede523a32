//! Conversion engine
//!
//! Conversions are direct pairwise formulas between two units of the same
//! category. Converting a unit to itself returns the input unchanged;
//! pairing units from different categories is rejected.

use gauge_core::{ConvertConfig, NonFinitePolicy};
use crate::{registry, Category, ConversionError, Unit};

/// A single conversion, built fresh for every evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub category: Category,
    pub source: Unit,
    pub target: Unit,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(category: Category, source: Unit, target: Unit, value: f64) -> Self {
        ConversionRequest { category, source, target, value }
    }

    /// Check that both units belong to the request's category
    pub fn validate(&self) -> Result<(), ConversionError> {
        for unit in [self.source, self.target] {
            if !registry::is_valid(self.category, unit) {
                tracing::warn!(
                    category = %self.category,
                    unit = %unit,
                    "rejected conversion with unit from another category"
                );
                return Err(ConversionError::InvalidUnitForCategory {
                    category: self.category,
                    unit,
                });
            }
        }
        Ok(())
    }

    /// Evaluate with the default configuration (non-finite input rejected)
    pub fn evaluate(&self) -> Result<f64, ConversionError> {
        self.evaluate_with(&ConvertConfig::default())
    }

    pub fn evaluate_with(&self, config: &ConvertConfig) -> Result<f64, ConversionError> {
        self.validate()?;

        if !self.value.is_finite() && config.non_finite == NonFinitePolicy::Reject {
            tracing::warn!(value = self.value, "rejected non-finite input");
            return Err(ConversionError::NonFiniteInput(self.value));
        }

        let result = apply(self.source, self.target, self.value)
            .ok_or_else(|| ConversionError::InvalidUnitForCategory {
                category: self.category,
                unit: self.target,
            })?;

        tracing::debug!(
            category = %self.category,
            from = %self.source,
            to = %self.target,
            input = self.value,
            output = result,
            "converted"
        );
        Ok(result)
    }
}

/// Convert `value` from `source` to `target`, both units of `category`
pub fn convert(category: Category, source: Unit, target: Unit, value: f64) -> Result<f64, ConversionError> {
    ConversionRequest::new(category, source, target, value).evaluate()
}

/// Dispatch to the source category's formulas; `None` for mixed categories
fn apply(source: Unit, target: Unit, v: f64) -> Option<f64> {
    match (source, target) {
        (Unit::Temperature(from), Unit::Temperature(to)) => Some(from.convert(to, v)),
        (Unit::Length(from), Unit::Length(to)) => Some(from.convert(to, v)),
        (Unit::Volume(from), Unit::Volume(to)) => Some(from.convert(to, v)),
        _ => None,
    }
}
