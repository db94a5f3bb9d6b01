//! # Tank Volume
//!
//! Fill level models for horizontal cylindrical storage tanks, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A level sensor reports how high the liquid stands in a tank. This crate
//! turns that height into the fraction of the tank volume that is filled,
//! accounting for flat or semi-ellipsoidal end caps, and optionally corrects
//! the result for thermal expansion of the liquid.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: clamped heights at `debug`,
//! computed levels and solver results at `trace`. No logger is installed.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Utility code starts in a model's internal `core` module and only moves to
//! [`support`] once more than one model needs it.

pub mod models;
pub mod support;
