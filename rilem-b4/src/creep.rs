//! Creep compliance.
//!
//! The compliance function `J = q1 + R_t·C0 + Cd` combines the instantaneous
//! response `q1`, basic creep `C0` (scaled by the Arrhenius factor `R_t` of
//! the average temperature) and drying creep `Cd`. All compliances here are
//! in 1/MPa and all ages are equivalent ages in days.

use crate::{
    ModelError,
    error::{finite, positive},
    time::EquivalentTimes,
};

/// Converts coefficients tabulated in 1/GPa to 1/MPa.
pub(crate) const PER_GIGAPASCAL: f64 = 1e-3;

/// Compliance coefficients of one evaluation, in 1/MPa.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreepTerms {
    /// Instantaneous compliance.
    pub q1: f64,
    /// Ageing viscoelastic compliance.
    pub q2: f64,
    /// Non-ageing viscoelastic compliance.
    pub q3: f64,
    /// Flow compliance.
    pub q4: f64,
    /// Drying creep compliance.
    pub q5: f64,
    /// Dimensionless drying creep exponent `p5H`.
    pub p5_h: f64,
}

/// The creep compliance function evaluated at one age.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreepCompliance {
    /// Basic creep compliance `C0`.
    pub basic: f64,
    /// Drying creep compliance `Cd`.
    pub drying: f64,
    /// Total compliance `J`.
    pub total: f64,
}

impl CreepCompliance {
    /// Evaluates `J = q1 + R_t·C0 + Cd`.
    ///
    /// `humidity` is the relative humidity, `halftime` the drying shrinkage
    /// halftime `τ_sh` and `temperature_factor` the Arrhenius factor `R_t` of
    /// the average ambient temperature.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if the load duration is not strictly
    /// positive or the result is not finite.
    pub fn evaluate(
        terms: &CreepTerms,
        times: &EquivalentTimes,
        humidity: f64,
        halftime: f64,
        temperature_factor: f64,
    ) -> Result<Self, ModelError> {
        let basic = basic_compliance(terms, times)?;
        let drying = drying_compliance(terms, times, humidity, halftime);
        let total = finite("J", terms.q1 + temperature_factor * basic + drying)?;

        tracing::debug!(C0 = basic, Cd = drying, J = total, "creep compliance");

        Ok(Self {
            basic,
            drying,
            total,
        })
    }
}

/// Basic creep compliance `C0(td, tpd)`.
///
/// # Errors
///
/// Returns [`ModelError::Domain`] if the equivalent load duration `td − tpd`
/// is not strictly positive.
pub fn basic_compliance(terms: &CreepTerms, times: &EquivalentTimes) -> Result<f64, ModelError> {
    let tpd = times.loading;
    let td = times.evaluation;
    let duration = positive("td - tpd", times.load_duration())?;

    let log_duration = (1.0 + duration.powf(0.1)).ln();

    let q_final = 1.0 / (0.086 * tpd.powf(2.0 / 9.0) + 1.21 * tpd.powf(4.0 / 9.0));
    let z = tpd.powf(-0.5) * log_duration;
    let r = 1.7 * tpd.powf(0.12) + 8.0;
    let q = q_final * (1.0 + (q_final / z).powf(r)).powf(-1.0 / r);

    finite(
        "C0",
        terms.q2 * q + terms.q3 * log_duration + terms.q4 * (td / tpd).ln(),
    )
}

/// Drying creep compliance `Cd`.
///
/// Zero until the concrete is both loaded and drying, that is while
/// `td < t0pd = max(tpd, t0t)`.
#[must_use]
pub fn drying_compliance(
    terms: &CreepTerms,
    times: &EquivalentTimes,
    humidity: f64,
    halftime: f64,
) -> f64 {
    let start = times.drying_creep_start();
    if times.evaluation < start {
        return 0.0;
    }

    let pore_humidity = |age: f64| {
        1.0 - (1.0 - humidity) * ((age - times.drying_start) / halftime).sqrt().tanh()
    };

    let now = (-terms.p5_h * pore_humidity(times.evaluation)).exp();
    let initial = (-terms.p5_h * pore_humidity(start)).exp();

    // Rounding can push the difference slightly below zero.
    terms.q5 * (now - initial).max(0.0).sqrt()
}
