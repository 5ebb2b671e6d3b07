use crate::{
    AggregateType, MixDesign, ModelError, Schedule,
    coefficients::{AggregateFactors, b4},
    creep::{CreepTerms, PER_GIGAPASCAL},
    error::positive,
    shrinkage::{AutogenousShrinkage, DryingShrinkageBase},
    time::EquivalentTimes,
};

use super::Formulation;

/// Model B4, parameterized by the normalized mix proportions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct B4 {
    drying: b4::DryingShrinkage,
    autogenous: b4::Autogenous,
    creep: b4::Creep,
    aggregate: Option<AggregateType>,
    /// `w/c / 0.38`
    water: f64,
    /// `a/c / 6`
    aggregate_ratio: f64,
    /// `6.5·c/ρ`
    cement: f64,
}

impl B4 {
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if the mix has no composition.
    pub(crate) fn new(mix: &MixDesign) -> Result<Self, ModelError> {
        let composition = mix.composition().ok_or_else(|| {
            ModelError::invalid(
                "mix composition",
                "Model B4 needs cement content, w/c, a/c and density",
            )
        })?;
        let cement_type = mix.cement();

        Ok(Self {
            drying: b4::drying_shrinkage(cement_type),
            autogenous: b4::autogenous(cement_type),
            creep: b4::creep(cement_type),
            aggregate: composition.aggregate(),
            water: composition.water_cement_value() / 0.38,
            aggregate_ratio: composition.aggregate_cement_value() / 6.0,
            cement: 6.5 * composition.cement_fraction(),
        })
    }
}

impl Formulation for B4 {
    fn drying_shrinkage(&self) -> DryingShrinkageBase {
        let p = &self.drying;
        let (a, w, c) = (self.aggregate_ratio, self.water, self.cement);

        DryingShrinkageBase {
            halftime: p.tau_cem * a.powf(p.p_tau_a) * w.powf(p.p_tau_w) * c.powf(p.p_tau_c),
            final_shrinkage: p.eps_cem * a.powf(p.p_eps_a) * w.powf(p.p_eps_w) * c.powf(p.p_eps_c),
            aggregate: AggregateFactors::for_aggregate(self.aggregate),
        }
    }

    fn autogenous(
        &self,
        _schedule: &Schedule,
        times: &EquivalentTimes,
    ) -> Result<AutogenousShrinkage, ModelError> {
        let p = &self.autogenous;
        let (a, w) = (self.aggregate_ratio, self.water);

        AutogenousShrinkage::evaluate(
            p.tau_cem * w.powf(p.r_tau_w),
            -p.eps_cem * a.powf(p.r_eps_a) * w.powf(p.r_eps_w),
            times.drying_duration - times.drying_start,
            p.r_alpha * w,
            p.r_t,
        )
    }

    fn creep_terms(&self, e28: f64, drying_intensity: f64) -> Result<CreepTerms, ModelError> {
        let p = &self.creep;
        let x = &b4::CREEP_EXPONENTS;
        let (a, w) = (self.aggregate_ratio, self.water);
        let intensity = positive("|k_h eps_sh_inf|", drying_intensity)?;

        let q2 = p.p2 * PER_GIGAPASCAL * w.powf(x.p2_w);

        Ok(CreepTerms {
            q1: p.p1 / e28,
            q2,
            q3: p.p3 * q2 * a.powf(x.p3_a) * w.powf(x.p3_w),
            q4: p.p4 * PER_GIGAPASCAL * a.powf(x.p4_a) * w.powf(x.p4_w),
            q5: p.p5
                * PER_GIGAPASCAL
                * a.powf(x.p5_a)
                * w.powf(x.p5_w)
                * intensity.powf(x.p5_eps),
            p5_h: p.p5_h,
        })
    }
}
