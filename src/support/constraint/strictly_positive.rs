use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Tank diameters, cylinder lengths, and head depths all carry this
/// constraint.
///
/// # Examples
///
/// ```
/// use tank_volume::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::inch};
///
/// // Generic constructor:
/// let x = Constrained::<_, StrictlyPositive>::new(Length::new::<inch>(101.25)).unwrap();
/// assert_eq!(x.into_inner().get::<inch>(), 101.25);
///
/// // Associated constructor:
/// let y = StrictlyPositive::new(9.375).unwrap();
/// assert_eq!(y.into_inner(), 9.375);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(Length::new::<inch>(0.0)).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::inch};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert!(matches!(
            StrictlyPositive::new(0.0),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            StrictlyPositive::new(-5.0),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn lengths() {
        assert!(StrictlyPositive::new(Length::new::<inch>(37.5)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<inch>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<inch>(-24.0)).is_err());
    }
}
