use uom::si::{
    f64::{Ratio, Volume},
    ratio::percent,
};

use crate::support::constraint::{Constrained, UnitInterval};

/// The fill state of a tank at one height reading.
///
/// The fill fraction and the compensated fraction always lie in `[0, 1]`.
/// Whether compensation ran is reported by [`FillLevel::applied_compensation`],
/// never inferred from the two values being equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillLevel {
    fill: Constrained<Ratio, UnitInterval>,
    volume: Option<Volume>,
    compensated: Option<Constrained<Ratio, UnitInterval>>,
}

impl FillLevel {
    pub(super) fn new(
        fill: Constrained<Ratio, UnitInterval>,
        volume: Option<Volume>,
        compensated: Option<Constrained<Ratio, UnitInterval>>,
    ) -> Self {
        Self {
            fill,
            volume,
            compensated,
        }
    }

    /// Returns the filled fraction of the tank volume.
    #[must_use]
    pub fn fill(&self) -> Ratio {
        self.fill.into_inner()
    }

    /// Returns the filled fraction as a percentage in `[0, 100]`.
    #[must_use]
    pub fn fill_percent(&self) -> f64 {
        self.fill().get::<percent>()
    }

    /// Returns the liquid volume, if the tank length is known.
    #[must_use]
    pub fn volume(&self) -> Option<Volume> {
        self.volume
    }

    /// Returns the temperature-compensated fill fraction, if a reading was given.
    #[must_use]
    pub fn compensated(&self) -> Option<Ratio> {
        self.compensated.map(Constrained::into_inner)
    }

    /// Returns the compensated fill as a percentage in `[0, 100]`.
    #[must_use]
    pub fn compensated_percent(&self) -> Option<f64> {
        self.compensated().map(|fill| fill.get::<percent>())
    }

    #[must_use]
    pub fn applied_compensation(&self) -> bool {
        self.compensated.is_some()
    }
}
