//! Drying and autogenous shrinkage.
//!
//! Drying shrinkage follows a `tanh(√(t/τ))` curve whose halftime grows with
//! the square of the specimen thickness. Its final value is corrected for the
//! stiffening of the concrete while it dries. The autogenous evolution depends
//! on the model variant and is computed there; this module holds the shared
//! pieces and the result types.

use crate::{
    ModelError,
    coefficients::AggregateFactors,
    error::{finite, positive},
    time::{ArrheniusFactors, EquivalentTimes},
};

/// Mean 28-day elastic modulus `E28 = 4734·√fcm`, in MPa for `fcm` in MPa.
#[must_use]
pub fn elastic_modulus_28(strength: f64) -> f64 {
    4734.0 * strength.sqrt()
}

/// Age-dependent elastic modulus `E(t) = E28·√(t / (4 + 6/7·t))`, in the unit of `e28`.
#[must_use]
pub fn elastic_modulus(e28: f64, age: f64) -> f64 {
    e28 * (age / (4.0 + 6.0 / 7.0 * age)).sqrt()
}

/// Humidity dependence `k_h` of drying shrinkage.
///
/// Below 98 % relative humidity `k_h = 1 − h³`. Between 98 % and saturation
/// the concrete swells and `k_h` falls linearly to `−0.2`.
///
/// # Errors
///
/// Returns [`ModelError::InvalidInput`] if `h` lies outside `[0, 1]`.
pub fn humidity_factor(h: f64) -> Result<f64, ModelError> {
    if (0.0..=0.98).contains(&h) {
        Ok(1.0 - h.powi(3))
    } else if h > 0.98 && h <= 1.0 {
        Ok(12.94 * (1.0 - h) - 0.2)
    } else {
        Err(ModelError::invalid(
            "relative humidity",
            format!("{h} is outside [0, 1]"),
        ))
    }
}

/// Variant-specific inputs to the drying shrinkage equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryingShrinkageBase {
    /// Halftime base `τ0`, in days/mm².
    pub halftime: f64,
    /// Magnitude of the final shrinkage base `ε0`.
    pub final_shrinkage: f64,
    pub aggregate: AggregateFactors,
}

/// Drying shrinkage at the evaluation age.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DryingShrinkage {
    /// Halftime `τ_sh`, in days.
    pub halftime: f64,
    /// Final drying shrinkage `ε_sh∞`, negative for shrinkage.
    pub final_strain: f64,
    /// Time curve `S(t)`, within `[0, 1)`.
    pub time_curve: f64,
    /// Drying shrinkage strain `ε_sh = ε_sh∞·k_h·S(t)`.
    pub strain: f64,
}

impl DryingShrinkage {
    /// Evaluates drying shrinkage.
    ///
    /// `shape_factor` is `k_s`, `thickness` the effective thickness `D` in mm,
    /// `e28` the 28-day modulus and `humidity_factor` is `k_h`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if the halftime is not strictly positive
    /// or the stiffness correction is undefined.
    pub fn evaluate(
        base: &DryingShrinkageBase,
        shape_factor: f64,
        thickness: f64,
        times: &EquivalentTimes,
        factors: &ArrheniusFactors,
        e28: f64,
        humidity_factor: f64,
    ) -> Result<Self, ModelError> {
        let halftime = positive(
            "tau_sh",
            base.halftime * base.aggregate.halftime * (shape_factor * thickness).powi(2),
        )?;

        let stiff = elastic_modulus(e28, 7.0 * factors.curing + 600.0 * factors.ambient);
        let drying = positive(
            "E(t0t + tau_sh)",
            elastic_modulus(e28, times.drying_start + halftime * factors.ambient),
        )?;
        let final_strain = finite(
            "eps_sh_inf",
            -base.final_shrinkage * base.aggregate.final_shrinkage * (stiff / drying),
        )?;

        let time_curve = (times.drying_duration / halftime).sqrt().tanh();
        let strain = final_strain * humidity_factor * time_curve;

        tracing::debug!(
            tau_sh = halftime,
            eps_sh_inf = final_strain,
            k_h = humidity_factor,
            eps_sh = strain,
            "drying shrinkage"
        );

        Ok(Self {
            halftime,
            final_strain,
            time_curve,
            strain,
        })
    }
}

/// Autogenous shrinkage at the evaluation age.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutogenousShrinkage {
    /// Halftime `τ_au`, in days.
    pub halftime: f64,
    /// Final autogenous shrinkage `ε_au∞`.
    pub final_strain: f64,
    /// Autogenous shrinkage strain `ε_au`.
    pub strain: f64,
}

impl AutogenousShrinkage {
    /// Evaluates `ε_au = ε_au∞·(1 + (τ_au/x)^α)^r_t`.
    ///
    /// The elapsed time `x` is defined differently by each model variant.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if `x` is not strictly positive.
    pub(crate) fn evaluate(
        halftime: f64,
        final_strain: f64,
        elapsed: f64,
        alpha: f64,
        r_t: f64,
    ) -> Result<Self, ModelError> {
        let elapsed = positive("autogenous elapsed time", elapsed)?;
        let strain = finite(
            "eps_au",
            final_strain * (1.0 + (halftime / elapsed).powf(alpha)).powf(r_t),
        )?;

        tracing::debug!(
            tau_au = halftime,
            eps_au_inf = final_strain,
            eps_au = strain,
            "autogenous shrinkage"
        );

        Ok(Self {
            halftime,
            final_strain,
            strain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn humidity_factor_branches_meet_at_98_percent() {
        let below = humidity_factor(0.98).unwrap();
        let above = humidity_factor(0.98 + 1e-12).unwrap();

        // 1 − 0.98³ = 0.058808 and 12.94·0.02 − 0.2 = 0.0588.
        assert_relative_eq!(below, 0.058_808, max_relative = 1e-12);
        assert_relative_eq!(below, above, epsilon = 1e-5);
    }

    #[test]
    fn humidity_factor_decreases_with_humidity() {
        let factors: Vec<f64> = (0..=98)
            .map(|p| humidity_factor(f64::from(p) / 100.0).unwrap())
            .collect();

        assert!(factors.windows(2).all(|pair| pair[1] < pair[0]));
        assert_relative_eq!(humidity_factor(1.0).unwrap(), -0.2);
        assert!(humidity_factor(1.01).is_err());
        assert!(humidity_factor(-0.01).is_err());
    }

    #[test]
    fn elastic_modulus_at_28_days() {
        let e28 = elastic_modulus_28(27.6);
        assert_relative_eq!(e28, 4734.0 * 27.6_f64.sqrt());

        // The ageing law is normalized to be exactly E28 at 28 days.
        assert_relative_eq!(elastic_modulus(e28, 28.0), e28, max_relative = 1e-12);
        assert!(elastic_modulus(e28, 7.0) < e28);
        assert!(elastic_modulus(e28, 365.0) > e28);
    }

    #[test]
    fn drying_shrinkage_for_reference_mix() {
        let base = DryingShrinkageBase {
            halftime: 0.016 * (7.0_f64 / 6.0).powf(-0.33)
                * (0.6_f64 / 0.38).powf(-0.06)
                * (6.5 * 0.2193_f64 / 2.35).powf(-0.10),
            final_shrinkage: 360e-6
                * (7.0_f64 / 6.0).powf(-0.80)
                * (0.6_f64 / 0.38).powf(1.10)
                * (6.5 * 0.2193_f64 / 2.35).powf(0.11),
            aggregate: AggregateFactors::NEUTRAL,
        };
        let times = EquivalentTimes {
            drying_duration: 84.0,
            drying_start: 28.0,
            loading: 28.0,
            evaluation: 112.0,
        };
        let factors = ArrheniusFactors {
            curing: 1.0,
            ambient: 1.0,
        };

        let drying = DryingShrinkage::evaluate(
            &base,
            1.0,
            38.0,
            &times,
            &factors,
            elastic_modulus_28(27.6),
            0.875,
        )
        .unwrap();

        assert_relative_eq!(drying.halftime, 22.459_716_161_042_77, max_relative = 1e-9);
        assert_relative_eq!(
            drying.final_strain,
            -5.183_355_876_090_46e-4,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            drying.strain,
            -4.349_704_453_629_027e-4,
            max_relative = 1e-9
        );
    }

    #[test]
    fn autogenous_requires_positive_elapsed_time() {
        let err = AutogenousShrinkage::evaluate(1.0, -1e-4, 0.0, 1.0, -4.5).unwrap_err();
        assert!(matches!(err, ModelError::Domain { .. }));
    }
}
