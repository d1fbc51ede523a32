//! Length units and pairwise formulas

use serde::{Deserialize, Serialize};

pub const FEET_PER_METER: f64 = 3.281;
pub const METERS_PER_MILE: f64 = 1609.0;
pub const FEET_PER_MILE: f64 = 5280.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Feet,
    Miles,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 3] = [LengthUnit::Meters, LengthUnit::Feet, LengthUnit::Miles];

    pub const fn name(self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Feet => "feet",
            LengthUnit::Miles => "miles",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Feet => "ft",
            LengthUnit::Miles => "mi",
        }
    }

    /// Convert `v` from this unit to `to`
    pub fn convert(self, to: LengthUnit, v: f64) -> f64 {
        use LengthUnit::*;

        match (self, to) {
            (Meters, Feet) => v * FEET_PER_METER,
            (Meters, Miles) => v / METERS_PER_MILE,
            (Feet, Meters) => v / FEET_PER_METER,
            (Feet, Miles) => v / FEET_PER_MILE,
            (Miles, Meters) => v * METERS_PER_MILE,
            (Miles, Feet) => v * FEET_PER_MILE,
            _ => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LengthUnit::*;

    #[test]
    fn test_known_values() {
        assert_eq!(Meters.convert(Feet, 1.0), 3.281);
        assert_eq!(Miles.convert(Feet, 1.0), 5280.0);
        assert_eq!(Miles.convert(Meters, 2.0), 3218.0);
        assert_eq!(Feet.convert(Miles, 10560.0), 2.0);
        assert_eq!(Meters.convert(Miles, 1609.0), 1.0);
    }

    #[test]
    fn test_constants_are_not_mutually_consistent() {
        // 1609 m and 5280 ft both claim to be a mile
        let via_meters = Meters.convert(Feet, Miles.convert(Meters, 1.0));
        assert!((via_meters - 5280.0).abs() < 1.0);
        assert_ne!(via_meters, 5280.0);
    }

    #[test]
    fn test_inverse_pairs() {
        for from in LengthUnit::ALL {
            for to in LengthUnit::ALL {
                for v in [0.0, 1.0, 42.5, 10_000.0] {
                    let back = to.convert(from, from.convert(to, v));
                    assert!((back - v).abs() < 1e-2);
                }
            }
        }
    }
}
