use crate::{
    MixDesign, ModelError, Schedule,
    coefficients::{AggregateFactors, b4s},
    creep::{CreepTerms, PER_GIGAPASCAL},
    error::positive,
    shrinkage::{AutogenousShrinkage, DryingShrinkageBase},
    time::EquivalentTimes,
};

use super::Formulation;

/// Strength all B4s parameters are normalized by, in MPa.
const REFERENCE_STRENGTH: f64 = 40.0;

/// Model B4s, parameterized by the strength ratio `f = fcm / 40 MPa`.
///
/// Aggregate corrections are not part of the simplified model.
#[derive(Debug, Clone, Copy)]
pub(crate) struct B4s {
    drying: b4s::DryingShrinkage,
    creep: b4s::Creep,
    strength_ratio: f64,
}

impl B4s {
    pub(crate) fn new(mix: &MixDesign) -> Self {
        Self {
            drying: b4s::drying_shrinkage(mix.cement()),
            creep: b4s::creep(mix.cement()),
            strength_ratio: mix.strength_mpa() / REFERENCE_STRENGTH,
        }
    }
}

impl Formulation for B4s {
    fn drying_shrinkage(&self) -> DryingShrinkageBase {
        let p = &self.drying;
        let f = self.strength_ratio;

        DryingShrinkageBase {
            halftime: p.tau_cem * f.powf(p.s_tau_f),
            final_shrinkage: p.eps_cem * f.powf(p.s_eps_f),
            aggregate: AggregateFactors::NEUTRAL,
        }
    }

    /// Elapsed time is `t + t0` in real days rather than an equivalent age.
    fn autogenous(
        &self,
        schedule: &Schedule,
        _times: &EquivalentTimes,
    ) -> Result<AutogenousShrinkage, ModelError> {
        let p = &b4s::AUTOGENOUS;
        let f = self.strength_ratio;
        let (t0, _, t) = schedule.days();

        AutogenousShrinkage::evaluate(
            p.tau_cem * f.powf(p.r_tau_f),
            -p.eps_cem * f.powf(p.r_eps_f),
            t + t0,
            p.alpha,
            p.r_t,
        )
    }

    fn creep_terms(&self, e28: f64, drying_intensity: f64) -> Result<CreepTerms, ModelError> {
        let p = &self.creep;
        let f = self.strength_ratio;
        let intensity = positive("|k_h eps_sh_inf|", drying_intensity)?;

        let q2 = p.s2 * PER_GIGAPASCAL * f.powf(p.s2_f);

        Ok(CreepTerms {
            q1: p.p1 / e28,
            q2,
            q3: p.s3 * q2 * f.powf(p.s3_f),
            q4: p.s4 * PER_GIGAPASCAL * f.powf(p.s4_f),
            q5: p.s5 * PER_GIGAPASCAL * f.powf(p.s5_f) * intensity.powf(b4s::P5_EPS),
            p5_h: p.p5_h,
        })
    }
}
