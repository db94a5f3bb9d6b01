//! Closed-form volume model for horizontal cylindrical tanks.
//!
//! A fill height is turned into a fill fraction by integrating the liquid
//! cross-section over the tank. The cylindrical body contributes a circular
//! segment times its length, and each semi-ellipsoidal head contributes a
//! cubic in the fill height. Both are normalized by the full tank volume.
//! Flat-ended tanks reduce to the segment area over the circle area, which
//! does not depend on length.

mod capacity;
mod compensation;
mod error;
mod fill_height;
mod geometry;
mod head;
mod level;
mod preset;
mod segment;

pub use compensation::{
    CompensationError, EXPANSION_PER_DEGREE_CELSIUS, EXPANSION_PER_DEGREE_FAHRENHEIT,
    TemperatureReading, TemperatureUnit, compensate,
};
pub use error::LevelError;
pub use fill_height::{FillHeightConfig, FillHeightError};
pub use geometry::{EndCapKind, EndCaps, GeometryError, TankGeometry};
pub use head::{full_head_volume, head_volume};
pub use level::FillLevel;
pub use preset::TankPreset;
pub use segment::{circle_area, segment_area};

pub(crate) use fill_height::fill_height;

use log::trace;
use uom::si::{
    f64::{Length, Ratio},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, UnitInterval};

/// Computes the fill level of a tank at `fill_height`.
///
/// Heights below the bottom or above the top are clamped to the tank.
/// If a temperature reading is given, the level is also corrected to the
/// reference temperature of the reading's scale and clamped to `[0, 1]`.
///
/// # Errors
///
/// Returns [`LevelError::HeightNotANumber`] for a NaN height, or
/// [`LevelError::Compensation`] if the temperature is outside the range the
/// linear expansion model can represent.
pub fn fill_level(
    geometry: &TankGeometry,
    fill_height: Length,
    temperature: Option<TemperatureReading>,
) -> Result<FillLevel, LevelError> {
    if fill_height.is_nan() {
        return Err(LevelError::HeightNotANumber);
    }

    let fill = unit_fraction(Ratio::new::<ratio>(geometry.fill_fraction(fill_height)));
    let volume = geometry.liquid_volume(fill_height);

    let compensated = match temperature {
        Some(reading) => Some(unit_fraction(compensate(fill.into_inner(), reading)?)),
        None => None,
    };

    let level = FillLevel::new(fill, volume, compensated);
    trace!("fill height {fill_height:?} -> {level:?}");

    Ok(level)
}

/// Clamps a fraction into `[0, 1]`.
///
/// Fractions reaching this point are never NaN: the height was checked and
/// the expansion factor is positive and finite.
fn unit_fraction(value: Ratio) -> Constrained<Ratio, UnitInterval> {
    UnitInterval::clamped(value).unwrap_or_else(|_| UnitInterval::zero())
}
