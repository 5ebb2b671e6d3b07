//! Entry points that run a full model evaluation.

use rilem_core::{Component, units::compliance_per_megapascal};
use uom::si::{f64::Ratio, length::millimeter, ratio::ratio};

use crate::{
    ApplicabilityWarning, ModelError, ModelInput, ModelVariant,
    coefficients::shape_factor,
    creep::{CreepCompliance, CreepTerms},
    shrinkage::{AutogenousShrinkage, DryingShrinkage, elastic_modulus_28, humidity_factor},
    strain::{StrainResult, creep_strain, thermal_strain},
    time::{ArrheniusFactors, EquivalentTimes},
    validate,
    variant::{B4, B4s, Formulation},
};

/// The outcome of one evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub variant: ModelVariant,
    pub strain: StrainResult,
    /// Intermediate values of the evaluation.
    pub details: Details,
    /// Inputs outside the calibration range of `variant`.
    pub warnings: Vec<ApplicabilityWarning>,
}

/// Intermediate values engineers inspect alongside the strains.
///
/// Plain `f64`s in the units the published equations use: days, MPa and 1/MPa.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Details {
    pub arrhenius: ArrheniusFactors,
    pub times: EquivalentTimes,
    /// Humidity dependence `k_h`.
    pub humidity_factor: f64,
    /// Mean 28-day elastic modulus `E28`, in MPa.
    pub elastic_modulus_28: f64,
    pub drying: DryingShrinkage,
    pub autogenous: AutogenousShrinkage,
    pub creep_terms: CreepTerms,
    pub compliance: CreepCompliance,
}

/// Evaluates `input` with the chosen model variant.
///
/// Applicability warnings are collected first and never stop the evaluation.
///
/// # Errors
///
/// Returns [`ModelError::InvalidInput`] if Model B4 is selected for a mix
/// without a composition, and [`ModelError::Domain`] if the schedule makes an
/// equation undefined.
pub fn evaluate(input: &ModelInput, variant: ModelVariant) -> Result<Evaluation, ModelError> {
    let _span = tracing::debug_span!("evaluate", model = %variant).entered();

    let warnings = validate::check(input, variant);

    let (strain, details) = match variant {
        ModelVariant::B4 => run(input, &B4::new(&input.mix)?)?,
        ModelVariant::B4s => run(input, &B4s::new(&input.mix))?,
    };

    Ok(Evaluation {
        variant,
        strain,
        details,
        warnings,
    })
}

fn run(
    input: &ModelInput,
    model: &impl Formulation,
) -> Result<(StrainResult, Details), ModelError> {
    let ModelInput {
        mix,
        geometry,
        environment,
        schedule,
        load,
    } = input;

    let arrhenius = ArrheniusFactors::new(environment)?;
    let times = EquivalentTimes::new(schedule, &arrhenius)?;

    let humidity = environment.humidity_value();
    let k_h = humidity_factor(humidity)?;
    let e28 = elastic_modulus_28(mix.strength_mpa());

    let drying = DryingShrinkage::evaluate(
        &model.drying_shrinkage(),
        shape_factor(geometry.shape()),
        geometry.effective_thickness().get::<millimeter>(),
        &times,
        &arrhenius,
        e28,
        k_h,
    )?;
    let autogenous = model.autogenous(schedule, &times)?;

    let creep_terms = model.creep_terms(e28, (k_h * drying.final_strain).abs())?;
    let compliance = CreepCompliance::evaluate(
        &creep_terms,
        &times,
        humidity,
        drying.halftime,
        arrhenius.ambient,
    )?;

    let strain = StrainResult::new(
        creep_strain(compliance_per_megapascal(compliance.total), load.stress),
        Ratio::new::<ratio>(drying.strain),
        Ratio::new::<ratio>(autogenous.strain),
        thermal_strain(
            mix.thermal_expansion(),
            environment.evaluation_temperature(),
            environment.ambient_temperature(),
        ),
    );

    Ok((
        strain,
        Details {
            arrhenius,
            times,
            humidity_factor: k_h,
            elastic_modulus_28: e28,
            drying,
            autogenous,
            creep_terms,
            compliance,
        },
    ))
}

/// Model B4 as a [`Component`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelB4;

impl Component for ModelB4 {
    type Input = ModelInput;
    type Output = Evaluation;
    type Error = ModelError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(&input, ModelVariant::B4)
    }
}

/// Model B4s as a [`Component`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelB4s;

impl Component for ModelB4s {
    type Input = ModelInput;
    type Output = Evaluation;
    type Error = ModelError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(&input, ModelVariant::B4s)
    }
}
