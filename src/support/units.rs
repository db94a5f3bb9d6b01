//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (lengths, volumes,
//! temperatures). This module provides extensions that aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus)
//! method for subtracting one absolute temperature from another to get a
//! temperature interval. Temperature compensation uses it to measure how far
//! a liquid is from its reference temperature:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::degree_fahrenheit as delta_fahrenheit;
//! use uom::si::thermodynamic_temperature::degree_fahrenheit;
//! use tank_volume::support::units::TemperatureDifference;
//!
//! let liquid = ThermodynamicTemperature::new::<degree_fahrenheit>(80.0);
//! let reference = ThermodynamicTemperature::new::<degree_fahrenheit>(60.0);
//! let delta_t = liquid.minus(reference);
//! assert!((delta_t.get::<delta_fahrenheit>() - 20.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
