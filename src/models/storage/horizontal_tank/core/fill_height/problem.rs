//! Problem formulation for the fill height search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::models::storage::horizontal_tank::core::{FillLevel, LevelError, TankGeometry, fill_level};

/// Model adapter exposing the fill height as the sole input variable.
pub(super) struct FillHeightModel<'a> {
    geometry: &'a TankGeometry,
}

impl<'a> FillHeightModel<'a> {
    pub(super) fn new(geometry: &'a TankGeometry) -> Self {
        Self { geometry }
    }
}

impl Model for FillHeightModel<'_> {
    type Input = Length;
    type Output = FillLevel;
    type Error = LevelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        fill_level(self.geometry, *input, None)
    }
}

/// Equation problem definition for fill level matching.
///
/// Computes the residual as `achieved_fill - target_fill`.
pub(super) struct FillHeightProblem {
    target: Ratio,
}

impl FillHeightProblem {
    pub(super) fn new(target: Ratio) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for FillHeightProblem {
    type Input = Length;
    type Output = FillLevel;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let fill = output.fill().get::<ratio>();
        let target = self.target.get::<ratio>();
        Ok([fill - target])
    }
}
