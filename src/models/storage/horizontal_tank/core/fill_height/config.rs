use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, Ratio},
    length::meter,
    ratio::ratio,
};

/// Solver configuration for finding the height at a target fill level.
#[derive(Debug, Clone, Copy)]
pub struct FillHeightConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the fill height search variable.
    pub height_tol: Length,

    /// Absolute tolerance for the fill residual (achieved - target).
    pub fill_tol: Ratio,
}

impl Default for FillHeightConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            height_tol: Length::new::<meter>(1e-12),
            fill_tol: Ratio::new::<ratio>(1e-12),
        }
    }
}

impl FillHeightConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.height_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.fill_tol.get::<ratio>(),
        }
    }
}
