use rilem_core::constraint::{Constrained, StrictlyPositive};
use uom::si::{f64::Time, time::day};

use crate::ModelError;

/// Concrete ages that define one evaluation.
///
/// Physically, drying starts no later than loading, and loading happens no
/// later than the evaluation instant. That ordering is not enforced here;
/// the validator reports it and the models fail with a domain error where a
/// violation makes a formula undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    drying_start: Constrained<Time, StrictlyPositive>,
    loading: Constrained<Time, StrictlyPositive>,
    evaluation: Constrained<Time, StrictlyPositive>,
}

impl Schedule {
    /// Creates a schedule from the ages `t0` (drying starts), `tp` (load
    /// applied) and `t` (evaluation).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if any age is not strictly positive.
    pub fn new(drying_start: Time, loading: Time, evaluation: Time) -> Result<Self, ModelError> {
        Ok(Self {
            drying_start: StrictlyPositive::new(drying_start)
                .map_err(|e| ModelError::constraint("age when drying begins", e))?,
            loading: StrictlyPositive::new(loading)
                .map_err(|e| ModelError::constraint("age at loading", e))?,
            evaluation: StrictlyPositive::new(evaluation)
                .map_err(|e| ModelError::constraint("age at evaluation", e))?,
        })
    }

    /// Age when drying begins, `t0`.
    #[must_use]
    pub fn drying_start(&self) -> Time {
        self.drying_start.into_inner()
    }

    /// Age at load application, `tp`.
    #[must_use]
    pub fn loading(&self) -> Time {
        self.loading.into_inner()
    }

    /// Age at evaluation, `t`.
    #[must_use]
    pub fn evaluation(&self) -> Time {
        self.evaluation.into_inner()
    }

    /// Returns `true` if `t0 ≤ tp ≤ t`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.drying_start() <= self.loading() && self.loading() <= self.evaluation()
    }

    pub(crate) fn days(&self) -> (f64, f64, f64) {
        (
            self.drying_start().get::<day>(),
            self.loading().get::<day>(),
            self.evaluation().get::<day>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(t0: f64, tp: f64, t: f64) -> Result<Schedule, ModelError> {
        Schedule::new(
            Time::new::<day>(t0),
            Time::new::<day>(tp),
            Time::new::<day>(t),
        )
    }

    #[test]
    fn ordering() {
        assert!(days(28.0, 28.0, 112.0).unwrap().is_ordered());
        assert!(days(7.0, 14.0, 365.0).unwrap().is_ordered());
        assert!(!days(28.0, 14.0, 112.0).unwrap().is_ordered());
        assert!(!days(28.0, 28.0, 21.0).unwrap().is_ordered());
    }

    #[test]
    fn ages_must_be_positive() {
        let err = days(0.0, 28.0, 112.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidInput {
                input: "age when drying begins",
                ..
            }
        ));
    }

    #[test]
    fn ages_in_days() {
        assert_eq!(days(28.0, 28.0, 112.0).unwrap().days(), (28.0, 28.0, 112.0));
    }
}
