//! Caller-owned converter state
//!
//! Keeps the chosen category, the two units and the input consistent:
//! switching category always resets both units to the category default,
//! and units from another category are refused.

use gauge_core::ConvertConfig;
use serde::Serialize;
use crate::{registry, Category, ConversionError, ConversionRequest, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Selection {
    category: Category,
    source: Unit,
    target: Unit,
    input: f64,
}

impl Selection {
    /// Category with both units at its default and a zero input
    pub fn new(category: Category) -> Self {
        let unit = registry::default_unit(category);
        Selection { category, source: unit, target: unit, input: 0.0 }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn source(&self) -> Unit {
        self.source
    }

    pub fn target(&self) -> Unit {
        self.target
    }

    pub fn input(&self) -> f64 {
        self.input
    }

    /// Switch category, resetting both units to its default
    pub fn select_category(&mut self, category: Category) {
        let unit = registry::default_unit(category);
        tracing::debug!(from = %self.category, to = %category, default = %unit, "category changed");
        self.category = category;
        self.source = unit;
        self.target = unit;
    }

    pub fn set_source(&mut self, unit: Unit) -> Result<(), ConversionError> {
        self.source = self.check(unit)?;
        Ok(())
    }

    pub fn set_target(&mut self, unit: Unit) -> Result<(), ConversionError> {
        self.target = self.check(unit)?;
        Ok(())
    }

    pub fn set_input(&mut self, value: f64) {
        self.input = value;
    }

    /// Exchange source and target
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.category, self.source, self.target, self.input)
    }

    /// Recompute the converted value for the current state
    pub fn output(&self) -> Result<f64, ConversionError> {
        self.request().evaluate()
    }

    pub fn output_with(&self, config: &ConvertConfig) -> Result<f64, ConversionError> {
        self.request().evaluate_with(config)
    }

    fn check(&self, unit: Unit) -> Result<Unit, ConversionError> {
        if registry::is_valid(self.category, unit) {
            Ok(unit)
        } else {
            tracing::warn!(category = %self.category, unit = %unit, "refused unit from another category");
            Err(ConversionError::InvalidUnitForCategory { category: self.category, unit })
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::new(Category::Temperature)
    }
}
