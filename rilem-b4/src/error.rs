use rilem_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors that prevent a model evaluation from producing a result.
///
/// Inputs outside a model's calibration range are not errors; they are
/// reported as [`ApplicabilityWarning`](crate::ApplicabilityWarning)s instead.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// An input is unrecognized or physically impossible.
    ///
    /// The caller must fix the input before retrying.
    #[error("invalid {input}: {reason}")]
    InvalidInput { input: &'static str, reason: String },

    /// A derived value left the domain of the operation that consumes it.
    ///
    /// Typically caused by an inconsistent schedule, such as an evaluation
    /// age before the loading age.
    #[error("`{quantity}` is undefined or out of domain (value = {value})")]
    Domain { quantity: &'static str, value: f64 },
}

impl ModelError {
    pub(crate) fn invalid(input: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input,
            reason: reason.into(),
        }
    }

    pub(crate) fn constraint(input: &'static str, source: ConstraintError) -> Self {
        Self::invalid(input, source.to_string())
    }
}

/// Returns `value` if it is finite and strictly positive.
///
/// Power laws, logarithms and square roots throughout the models need this
/// of their arguments.
pub(crate) fn positive(quantity: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::Domain { quantity, value })
    }
}

/// Returns `value` if it is finite.
pub(crate) fn finite(quantity: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::Domain { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_negative_and_nan() {
        assert_eq!(positive("tt", 84.0), Ok(84.0));
        assert!(matches!(
            positive("tt", 0.0),
            Err(ModelError::Domain { quantity: "tt", .. })
        ));
        assert!(positive("tt", -1.0).is_err());
        assert!(positive("tt", f64::NAN).is_err());
        assert!(finite("J", f64::INFINITY).is_err());
    }

    #[test]
    fn messages_name_the_input() {
        let err = ModelError::constraint("relative humidity", ConstraintError::AboveMaximum);
        assert_eq!(
            err.to_string(),
            "invalid relative humidity: value is above the maximum allowed"
        );
    }
}
