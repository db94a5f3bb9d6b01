//! Thermal expansion correction of fill levels.
//!
//! Liquid fuels expand as they warm, so a tank holding a fixed mass of fuel
//! reads fuller on a hot day. Compensation divides the measured level by the
//! linear expansion factor `1 + β (T − T_ref)` to report the level the same
//! liquid would have at the reference temperature.

use std::fmt;

use thiserror::Error;
use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::{degree_celsius as delta_celsius, degree_fahrenheit as delta_fahrenheit},
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
};

use crate::support::units::TemperatureDifference;

/// Volumetric expansion coefficient per degree Fahrenheit.
pub const EXPANSION_PER_DEGREE_FAHRENHEIT: f64 = 0.00205;

/// Volumetric expansion coefficient per degree Celsius.
pub const EXPANSION_PER_DEGREE_CELSIUS: f64 = 0.00369;

/// Temperature scale a reading was reported in.
///
/// Each scale carries its own reference temperature and calibrated
/// expansion coefficient; coefficients are never converted between scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Returns the reference temperature: 60 °F or 15 °C.
    #[must_use]
    pub fn reference(self) -> ThermodynamicTemperature {
        match self {
            Self::Fahrenheit => ThermodynamicTemperature::new::<degree_fahrenheit>(60.0),
            Self::Celsius => ThermodynamicTemperature::new::<degree_celsius>(15.0),
        }
    }

    /// Returns the expansion coefficient β, per degree of this scale.
    #[must_use]
    pub fn expansion_coefficient(self) -> f64 {
        match self {
            Self::Fahrenheit => EXPANSION_PER_DEGREE_FAHRENHEIT,
            Self::Celsius => EXPANSION_PER_DEGREE_CELSIUS,
        }
    }

    fn degrees(self, interval: TemperatureInterval) -> f64 {
        match self {
            Self::Fahrenheit => interval.get::<delta_fahrenheit>(),
            Self::Celsius => interval.get::<delta_celsius>(),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }
}

/// A liquid temperature reading with its declared scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    value: f64,
    unit: TemperatureUnit,
}

impl TemperatureReading {
    #[must_use]
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    #[must_use]
    pub fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// Expresses a temperature on the given scale.
    #[must_use]
    pub fn from_temperature(temperature: ThermodynamicTemperature, unit: TemperatureUnit) -> Self {
        let value = match unit {
            TemperatureUnit::Fahrenheit => temperature.get::<degree_fahrenheit>(),
            TemperatureUnit::Celsius => temperature.get::<degree_celsius>(),
        };
        Self::new(value, unit)
    }

    /// Returns the reading in its declared scale.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Returns the reading as an absolute temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        match self.unit {
            TemperatureUnit::Fahrenheit => {
                ThermodynamicTemperature::new::<degree_fahrenheit>(self.value)
            }
            TemperatureUnit::Celsius => ThermodynamicTemperature::new::<degree_celsius>(self.value),
        }
    }

    /// Returns the expansion factor `1 + β (T − T_ref)` for this reading.
    ///
    /// # Errors
    ///
    /// Returns [`CompensationError::NonPositiveFactor`] if the factor is zero,
    /// negative, or NaN.
    pub fn expansion_factor(&self) -> Result<f64, CompensationError> {
        let unit = self.unit;
        let delta_t = unit.degrees(self.temperature().minus(unit.reference()));
        let factor = 1.0 + unit.expansion_coefficient() * delta_t;

        if factor > 0.0 {
            Ok(factor)
        } else {
            Err(CompensationError::NonPositiveFactor {
                factor,
                reading: *self,
            })
        }
    }
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// Errors that can occur while compensating a fill level for temperature.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CompensationError {
    /// The expansion factor is not positive, so dividing by it is meaningless.
    ///
    /// This only happens for physically implausible readings, hundreds of
    /// degrees below the reference temperature.
    #[error("expansion factor {factor} at {reading} is not positive")]
    NonPositiveFactor {
        factor: f64,
        reading: TemperatureReading,
    },
}

/// Corrects a fill level to the reference temperature of `reading`'s scale.
///
/// The result is not clamped; a cold tank near full can compensate to
/// more than 100%.
///
/// # Errors
///
/// Returns [`CompensationError`] if the expansion factor is not positive.
///
/// # Example
///
/// ```
/// use tank_volume::models::storage::horizontal_tank::{TemperatureReading, compensate};
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// let level = Ratio::new::<percent>(50.0);
///
/// let warm = compensate(level, TemperatureReading::fahrenheit(80.0)).unwrap();
/// assert!((warm.get::<percent>() - 48.03).abs() < 0.01);
///
/// let reference = compensate(level, TemperatureReading::celsius(15.0)).unwrap();
/// assert_eq!(reference, level);
/// ```
pub fn compensate(level: Ratio, reading: TemperatureReading) -> Result<Ratio, CompensationError> {
    Ok(level / reading.expansion_factor()?)
}
