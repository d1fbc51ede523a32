//! Volume units and pairwise formulas

use serde::{Deserialize, Serialize};

pub const MILLILITERS_PER_PINT: f64 = 473.2;
pub const MILLILITERS_PER_GALLON: f64 = 3785.0;
pub const PINTS_PER_GALLON: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[serde(rename = "ml")]
    Milliliters,
    Pints,
    Gallons,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 3] = [VolumeUnit::Milliliters, VolumeUnit::Pints, VolumeUnit::Gallons];

    pub const fn name(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "ml",
            VolumeUnit::Pints => "pints",
            VolumeUnit::Gallons => "gallons",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "mL",
            VolumeUnit::Pints => "pt",
            VolumeUnit::Gallons => "gal",
        }
    }

    /// Convert `v` from this unit to `to`
    pub fn convert(self, to: VolumeUnit, v: f64) -> f64 {
        use VolumeUnit::*;

        match (self, to) {
            (Milliliters, Pints) => v / MILLILITERS_PER_PINT,
            (Milliliters, Gallons) => v / MILLILITERS_PER_GALLON,
            (Pints, Milliliters) => v * MILLILITERS_PER_PINT,
            (Pints, Gallons) => v / PINTS_PER_GALLON,
            (Gallons, Milliliters) => v * MILLILITERS_PER_GALLON,
            (Gallons, Pints) => v * PINTS_PER_GALLON,
            _ => v,
        }
    }
}
