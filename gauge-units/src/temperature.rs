//! Temperature units and pairwise formulas

use serde::{Deserialize, Serialize};

/// Offset between the Celsius and Kelvin scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Water freezing point on the Fahrenheit scale
const FAHRENHEIT_FREEZING: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// Convert `v` from this scale to `to`
    ///
    /// Each pair has its own formula; there is no intermediate scale.
    pub fn convert(self, to: TemperatureUnit, v: f64) -> f64 {
        use TemperatureUnit::*;

        match (self, to) {
            (Celsius, Fahrenheit) => v * 9.0 / 5.0 + FAHRENHEIT_FREEZING,
            (Celsius, Kelvin) => v + KELVIN_OFFSET,
            (Fahrenheit, Celsius) => (v - FAHRENHEIT_FREEZING) * 5.0 / 9.0,
            (Fahrenheit, Kelvin) => (v - FAHRENHEIT_FREEZING) * 5.0 / 9.0 + KELVIN_OFFSET,
            (Kelvin, Celsius) => v - KELVIN_OFFSET,
            (Kelvin, Fahrenheit) => (v - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_FREEZING,
            // same scale
            _ => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::*;

    #[test]
    fn test_freezing_point() {
        assert_eq!(Celsius.convert(Fahrenheit, 0.0), 32.0);
        assert_eq!(Celsius.convert(Kelvin, 0.0), 273.15);
        assert_eq!(Fahrenheit.convert(Celsius, 32.0), 0.0);
        assert_eq!(Kelvin.convert(Celsius, 273.15), 0.0);
    }

    #[test]
    fn test_boiling_point() {
        assert_eq!(Celsius.convert(Fahrenheit, 100.0), 212.0);
        assert!((Fahrenheit.convert(Kelvin, 212.0) - 373.15).abs() < 1e-9);
        assert!((Kelvin.convert(Fahrenheit, 373.15) - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_minus_forty_is_shared() {
        assert_eq!(Celsius.convert(Fahrenheit, -40.0), -40.0);
        assert_eq!(Fahrenheit.convert(Celsius, -40.0), -40.0);
    }

    #[test]
    fn test_inverse_pairs() {
        for from in TemperatureUnit::ALL {
            for to in TemperatureUnit::ALL {
                for v in [-459.67, -40.0, 0.0, 21.5, 1000.0] {
                    let back = to.convert(from, from.convert(to, v));
                    assert!((back - v).abs() < 1e-9, "{:?} -> {:?} -> {:?} drifted for {}", from, to, from, v);
                }
            }
        }
    }
}
