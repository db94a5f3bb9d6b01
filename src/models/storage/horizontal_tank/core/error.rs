use thiserror::Error;

use super::CompensationError;

/// Errors that can occur while computing a fill level.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum LevelError {
    /// The fill height is NaN.
    #[error("fill height is not a number")]
    HeightNotANumber,

    /// Temperature compensation failed.
    #[error("temperature compensation failed")]
    Compensation(#[from] CompensationError),
}
