use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Types with a natural zero and one, usable with [`UnitInterval`].
pub trait UnitBounds: PartialOrd + Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }

    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// # Examples
///
/// ```
/// use rilem_core::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::ratio};
///
/// let h = UnitInterval::new(Ratio::new::<ratio>(0.5)).unwrap();
/// assert_eq!(h.as_ref().get::<ratio>(), 0.5);
///
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert!(UnitInterval::new(1.01).is_err());
/// assert!(UnitInterval::new(-0.1).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let (Some(lower), Some(upper)) = (
            value.partial_cmp(&T::zero()),
            value.partial_cmp(&T::one()),
        ) else {
            return Err(ConstraintError::NotANumber);
        };

        if lower.is_lt() {
            Err(ConstraintError::BelowMinimum)
        } else if upper.is_gt() {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}
