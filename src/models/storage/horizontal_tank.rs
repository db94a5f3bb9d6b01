//! Horizontal cylindrical tank model.
//!
//! This module provides a [`twine_core::Model`] that maps a measured fill
//! height, and optionally a liquid temperature, to the tank's fill level.
//! The computational core is in the internal [`core`] module.
//!
//! # Example
//!
//! ```
//! use tank_volume::models::storage::horizontal_tank::{
//!     HorizontalTank, TankInput, TankPreset, TemperatureReading,
//! };
//! use twine_core::Model;
//! use uom::si::{f64::Length, length::inch};
//!
//! let tank = HorizontalTank::new(TankPreset::Gal500.geometry().unwrap());
//!
//! let level = tank
//!     .call(&TankInput {
//!         fill_height: Length::new::<inch>(18.75),
//!         temperature: Some(TemperatureReading::fahrenheit(80.0)),
//!     })
//!     .unwrap();
//!
//! assert!((level.fill_percent() - 50.0).abs() < 1e-9);
//! assert!(level.applied_compensation());
//! assert!(level.compensated_percent().unwrap() < 50.0);
//! ```

pub(crate) mod core;

pub use self::core::{
    CompensationError, EXPANSION_PER_DEGREE_CELSIUS, EXPANSION_PER_DEGREE_FAHRENHEIT, EndCapKind,
    EndCaps, FillHeightConfig, FillHeightError, FillLevel, GeometryError, LevelError,
    TankGeometry, TankPreset, TemperatureReading, TemperatureUnit, circle_area, compensate,
    fill_level, full_head_volume, head_volume, segment_area,
};

use twine_core::Model;
use uom::si::f64::{Length, Ratio, Volume};

use crate::support::constraint::{Constrained, UnitInterval};

/// A horizontal cylindrical tank with fixed geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalTank {
    geometry: TankGeometry,
}

/// Input to [`HorizontalTank`]: one sensor reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankInput {
    /// Liquid height above the tank bottom.
    pub fill_height: Length,

    /// Liquid temperature, if temperature compensation is wanted.
    pub temperature: Option<TemperatureReading>,
}

impl HorizontalTank {
    #[must_use]
    pub fn new(geometry: TankGeometry) -> Self {
        Self { geometry }
    }

    #[must_use]
    pub fn geometry(&self) -> &TankGeometry {
        &self.geometry
    }

    /// Returns the total internal volume, if the tank length is known.
    #[must_use]
    pub fn capacity(&self) -> Option<Volume> {
        self.geometry.capacity()
    }

    /// Computes the fill level at `fill_height`.
    ///
    /// # Errors
    ///
    /// See [`fill_level`].
    pub fn fill_level(
        &self,
        fill_height: Length,
        temperature: Option<TemperatureReading>,
    ) -> Result<FillLevel, LevelError> {
        self::core::fill_level(&self.geometry, fill_height, temperature)
    }

    /// Finds the fill height at which the tank holds the `target` fraction.
    ///
    /// # Errors
    ///
    /// Returns [`FillHeightError`] if the solver does not converge.
    pub fn fill_height_for(
        &self,
        target: Constrained<Ratio, UnitInterval>,
        config: FillHeightConfig,
    ) -> Result<Length, FillHeightError> {
        self::core::fill_height(&self.geometry, target, config)
    }
}

impl From<TankGeometry> for HorizontalTank {
    fn from(geometry: TankGeometry) -> Self {
        Self::new(geometry)
    }
}

impl Model for HorizontalTank {
    type Input = TankInput;
    type Output = FillLevel;
    type Error = LevelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.fill_level(input.fill_height, input.temperature)
    }
}
