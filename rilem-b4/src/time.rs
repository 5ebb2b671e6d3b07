//! Temperature-adjusted equivalent ages.
//!
//! Hydration and moisture transport speed up with temperature. Real ages are
//! rescaled by an Arrhenius factor relative to a 20 °C reference so that the
//! model equations can be written for a single reference temperature.

use crate::{Environment, ModelError, Schedule, error::positive};

/// Reference temperature of the Arrhenius factor, in K.
const REFERENCE_TEMPERATURE: f64 = 293.0;

/// Offset from °C to K used by the published equations.
const CELSIUS_OFFSET: f64 = 273.0;

/// Arrhenius factor `β(T) = exp(U/R · (1/293 − 1/(T + 273)))`, with `T` in °C.
///
/// # Errors
///
/// Returns [`ModelError::Domain`] if `T + 273` is not strictly positive.
pub fn arrhenius_factor(activation_ratio: f64, celsius: f64) -> Result<f64, ModelError> {
    let absolute = positive("absolute temperature", celsius + CELSIUS_OFFSET)?;
    let exponent = activation_ratio * (1.0 / REFERENCE_TEMPERATURE - 1.0 / absolute);
    Ok(exponent.exp())
}

/// Arrhenius factors for the two temperature regimes of a schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrheniusFactors {
    /// Factor at the curing temperature, applied before drying starts.
    pub curing: f64,
    /// Factor at the average ambient temperature, applied afterwards.
    pub ambient: f64,
}

impl ArrheniusFactors {
    /// Evaluates both factors for an environment.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if either temperature is at or below 0 K.
    pub fn new(environment: &Environment) -> Result<Self, ModelError> {
        let ratio = environment.activation_kelvin();
        Ok(Self {
            curing: arrhenius_factor(ratio, environment.curing_celsius())?,
            ambient: arrhenius_factor(ratio, environment.ambient_celsius())?,
        })
    }
}

/// Equivalent ages and durations, all in days.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquivalentTimes {
    /// Drying duration `tt = (t − t0)·β_avg`.
    pub drying_duration: f64,
    /// Age when drying begins `t0t = t0·β_cur`.
    pub drying_start: f64,
    /// Age at loading `tpd = t0·β_cur + (tp − t0)·β_avg`.
    pub loading: f64,
    /// Age at evaluation `td = tpd + (t − tp)·β_avg`.
    pub evaluation: f64,
}

impl EquivalentTimes {
    /// Converts a schedule into equivalent ages.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if any equivalent age is not strictly
    /// positive, which happens when the evaluation age precedes drying or the
    /// load is applied long before drying starts.
    pub fn new(schedule: &Schedule, factors: &ArrheniusFactors) -> Result<Self, ModelError> {
        let (t0, tp, t) = schedule.days();
        let ArrheniusFactors { curing, ambient } = *factors;

        let loading = t0 * curing + (tp - t0) * ambient;

        let times = Self {
            drying_duration: positive("tt", (t - t0) * ambient)?,
            drying_start: positive("t0t", t0 * curing)?,
            loading: positive("tpd", loading)?,
            evaluation: positive("td", loading + (t - tp) * ambient)?,
        };

        tracing::debug!(
            tt = times.drying_duration,
            t0t = times.drying_start,
            tpd = times.loading,
            td = times.evaluation,
            "equivalent times"
        );

        Ok(times)
    }

    /// Equivalent age at which drying creep starts, `t0pd = max(tpd, t0t)`.
    #[must_use]
    pub fn drying_creep_start(&self) -> f64 {
        self.loading.max(self.drying_start)
    }

    /// Equivalent load duration `td − tpd`.
    #[must_use]
    pub fn load_duration(&self) -> f64 {
        self.evaluation - self.loading
    }
}
