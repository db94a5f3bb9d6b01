use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Ratio;

/// Errors that can occur while solving for the height at a target fill level.
#[derive(Debug, Error)]
pub enum FillHeightError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best fill residual achieved.
        residual: Ratio,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
