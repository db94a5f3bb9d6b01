//! Iterative solver for the fill height at a target level.
//!
//! The height-to-fill mapping is monotonic over `[0, diameter]`, so a
//! bisection over that bracket always finds the height at which the tank
//! reaches a given fill fraction.

mod config;
mod error;
mod problem;

pub use config::FillHeightConfig;
pub use error::FillHeightError;

use log::trace;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Length, Ratio},
        length::meter,
        ratio::ratio,
    },
};

use crate::support::constraint::{Constrained, UnitInterval};

use super::TankGeometry;

use problem::{FillHeightModel, FillHeightProblem};

/// Finds the fill height at which `geometry` holds the `target` fraction.
///
/// An empty target returns the tank bottom and a full target returns the
/// tank top without iterating.
///
/// # Errors
///
/// Returns [`FillHeightError`] if the solver fails or does not converge
/// within the configured iteration limit.
pub(crate) fn fill_height(
    geometry: &TankGeometry,
    target: Constrained<Ratio, UnitInterval>,
    config: FillHeightConfig,
) -> Result<Length, FillHeightError> {
    let target = target.into_inner();
    let diameter = geometry.diameter();

    if target.get::<ratio>() <= 0.0 {
        return Ok(Length::ZERO);
    }
    if target.get::<ratio>() >= 1.0 {
        return Ok(diameter);
    }

    let model = FillHeightModel::new(geometry);
    let problem = FillHeightProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, diameter.get::<meter>()],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(FillHeightError::MaxIters {
            residual: Ratio::new::<ratio>(solution.residual),
            iters: solution.iters,
        });
    }

    let height = solution.snapshot.input;
    trace!(
        "fill height {height:?} reaches {target:?} after {} iterations",
        solution.iters
    );

    Ok(height)
}
