use std::cmp::Ordering;

use uom::ConstZero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Applies to any `uom` quantity, since every quantity is ordered and has a
/// constant zero.
///
/// # Examples
///
/// ```
/// use rilem_core::constraint::StrictlyPositive;
/// use uom::si::{f64::Time, time::day};
///
/// let age = StrictlyPositive::new(Time::new::<day>(28.0)).unwrap();
/// assert_eq!(age.into_inner().get::<day>(), 28.0);
///
/// assert!(StrictlyPositive::new(Time::new::<day>(0.0)).is_err());
/// assert!(StrictlyPositive::new(Time::new::<day>(-3.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Fails if the value is zero, negative, or NaN.
    pub fn new<T: PartialOrd + ConstZero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + ConstZero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::ZERO) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
