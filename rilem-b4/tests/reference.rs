//! Full evaluations checked against values computed from the published equations.

use approx::assert_relative_eq;
use rilem_b4::{
    AggregateType, ApplicabilityWarning, CalibratedInput, CementType, Composition, Environment,
    Evaluation, Geometry, Load, MixDesign, ModelB4, ModelB4s, ModelError, ModelInput,
    ModelVariant, Schedule, SpecimenShape, evaluate,
};
use rilem_core::Component;
use uom::si::{
    area::square_millimeter,
    f64::{Area, MassDensity, Pressure, Ratio, ThermodynamicTemperature, Time, Volume},
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    time::day,
    volume::cubic_millimeter,
};

/// A scenario in engineering units.
#[derive(Debug, Clone, Copy)]
struct Scenario {
    cement: CementType,
    aggregate: Option<AggregateType>,
    strength: f64,
    cement_content: f64,
    water_cement: f64,
    aggregate_cement: f64,
    density: f64,
    shape: SpecimenShape,
    volume: f64,
    surface: f64,
    humidity: f64,
    curing_temperature: f64,
    ambient_temperature: f64,
    evaluation_temperature: f64,
    drying_start: f64,
    loading: f64,
    evaluation: f64,
    stress: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            cement: CementType::Regular,
            aggregate: None,
            strength: 27.6,
            cement_content: 219.3,
            water_cement: 0.6,
            aggregate_cement: 7.0,
            density: 2350.0,
            shape: SpecimenShape::InfiniteSlab,
            volume: 1.9e7,
            surface: 1e6,
            humidity: 0.5,
            curing_temperature: 20.0,
            ambient_temperature: 20.0,
            evaluation_temperature: 20.0,
            drying_start: 28.0,
            loading: 28.0,
            evaluation: 112.0,
            stress: -11.03,
        }
    }
}

impl Scenario {
    fn input(&self) -> ModelInput {
        let celsius = |value| ThermodynamicTemperature::new::<degree_celsius>(value);

        let composition = Composition::new(
            MassDensity::new::<kilogram_per_cubic_meter>(self.cement_content),
            Ratio::new::<ratio>(self.water_cement),
            Ratio::new::<ratio>(self.aggregate_cement),
            MassDensity::new::<kilogram_per_cubic_meter>(self.density),
            self.aggregate,
        )
        .unwrap();

        ModelInput {
            mix: MixDesign::new(self.cement, Pressure::new::<megapascal>(self.strength))
                .unwrap()
                .with_composition(composition),
            geometry: Geometry::new(
                self.shape,
                Volume::new::<cubic_millimeter>(self.volume),
                Area::new::<square_millimeter>(self.surface),
            )
            .unwrap(),
            environment: Environment::new(
                Ratio::new::<ratio>(self.humidity),
                celsius(self.curing_temperature),
                celsius(self.ambient_temperature),
                celsius(self.evaluation_temperature),
            )
            .unwrap(),
            schedule: Schedule::new(
                Time::new::<day>(self.drying_start),
                Time::new::<day>(self.loading),
                Time::new::<day>(self.evaluation),
            )
            .unwrap(),
            load: Load::new(Pressure::new::<megapascal>(self.stress)),
        }
    }

    fn evaluate(&self, variant: ModelVariant) -> Evaluation {
        evaluate(&self.input(), variant).unwrap()
    }
}

/// Expected strains: drying, autogenous, creep, thermal, total.
fn assert_strains(evaluation: &Evaluation, expected: [f64; 5]) {
    let strain = &evaluation.strain;
    let actual = [
        strain.drying_shrinkage,
        strain.autogenous_shrinkage,
        strain.creep,
        strain.thermal,
        strain.total,
    ]
    .map(|r| r.get::<ratio>());

    for (actual, expected) in actual.into_iter().zip(expected) {
        assert_relative_eq!(actual, expected, max_relative = 1e-8, epsilon = 1e-15);
    }
}

#[test]
fn b4_reference_scenario() {
    let evaluation = Scenario::default().evaluate(ModelVariant::B4);

    assert_strains(
        &evaluation,
        [
            -4.349_704_453_629_027e-4,
            -3.535_154_664_179_522e-5,
            -1.870_709_373_866_247_6e-3,
            0.0,
            -2.341_031_365_870_945_4e-3,
        ],
    );

    let details = &evaluation.details;
    assert_relative_eq!(details.humidity_factor, 0.875, max_relative = 1e-12);
    assert_relative_eq!(
        details.drying.final_strain,
        -5.183_355_876_090_46e-4,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        details.compliance.basic,
        5.995_189_748_585_143_4e-5,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        details.compliance.drying,
        8.150_413_349_881_629e-5,
        max_relative = 1e-8
    );
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn b4s_reference_scenario() {
    let evaluation = Scenario::default().evaluate(ModelVariant::B4s);

    assert_strains(
        &evaluation,
        [
            -5.855_712_783_744_037e-4,
            -5.329_910_024_473_421e-5,
            -2.075_508_137_795_313_6e-3,
            0.0,
            -2.714_378_516_414_451_5e-3,
        ],
    );
    assert_relative_eq!(
        evaluation.details.drying.halftime,
        36.065_276_526_823_99,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        evaluation.details.compliance.total,
        1.881_693_687_937_727_8e-4,
        max_relative = 1e-8
    );
}

#[test]
fn b4s_published_check_geometry() {
    // The simplified model's check case gives the slab as V = 19.05 mm³ over S = 1 mm².
    let scenario = Scenario {
        volume: 19.05,
        surface: 1.0,
        ..Scenario::default()
    };
    let evaluation = scenario.evaluate(ModelVariant::B4s);

    assert_strains(
        &evaluation,
        [
            -5.850_665_808_636_272e-4,
            -5.329_910_024_473_421e-5,
            -2.073_964_357_031_349e-3,
            0.0,
            -2.712_330_038_139_710_3e-3,
        ],
    );
    assert_relative_eq!(
        evaluation.details.drying.halftime,
        36.255_343_531_234_764,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        evaluation.details.drying.final_strain,
        -7.355_297_729_843_077e-4,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        evaluation.details.compliance.drying,
        1.045_568_663_686_222_5e-4,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        evaluation.details.compliance.total,
        1.880_294_068_024_795_5e-4,
        max_relative = 1e-8
    );
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn b4_rapid_hardening_limestone_in_warm_exposure() {
    let scenario = Scenario {
        cement: CementType::RapidHardening,
        aggregate: Some(AggregateType::Limestone),
        shape: SpecimenShape::InfiniteCylinder,
        humidity: 0.7,
        curing_temperature: 25.0,
        ambient_temperature: 30.0,
        evaluation_temperature: 35.0,
        loading: 56.0,
        evaluation: 400.0,
        ..Scenario::default()
    };

    let evaluation = scenario.evaluate(ModelVariant::B4);

    assert_strains(
        &evaluation,
        [
            -3.443_420_518_328_828e-4,
            1.130_315_578_399_345_3e-5,
            -1.028_970_834_309_019_6e-3,
            5e-5,
            -1.312_009_730_357_909e-3,
        ],
    );

    let details = &evaluation.details;
    assert_relative_eq!(
        details.times.drying_duration,
        583.737_184_716_537_6,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        details.times.evaluation,
        618.944_815_802_917,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        details.drying.halftime,
        336.793_278_916_760_5,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        details.compliance.drying,
        2.360_790_777_674_259_6e-5,
        max_relative = 1e-8
    );
}

#[test]
fn b4_slow_hardening_near_saturation_swells() {
    let scenario = Scenario {
        cement: CementType::SlowHardening,
        humidity: 0.99,
        ..Scenario::default()
    };

    let evaluation = scenario.evaluate(ModelVariant::B4);

    assert_strains(
        &evaluation,
        [
            4.006_989_183_944_987e-5,
            0.0,
            -1.046_272_921_582_123_3e-3,
            0.0,
            -1.006_203_029_742_673_4e-3,
        ],
    );
    assert!(evaluation.details.humidity_factor < 0.0);
}

#[test]
fn b4s_slow_hardening_high_strength() {
    let scenario = Scenario {
        cement: CementType::SlowHardening,
        strength: 45.0,
        humidity: 0.6,
        drying_start: 7.0,
        loading: 14.0,
        evaluation: 365.0,
        ..Scenario::default()
    };

    let evaluation = scenario.evaluate(ModelVariant::B4s);

    assert_strains(
        &evaluation,
        [
            -4.825_864_617_690_762e-4,
            -8.826_278_709_986_203e-5,
            -5.986_119_216_916_792e-4,
            0.0,
            -1.169_461_170_560_617_4e-3,
        ],
    );
    assert_relative_eq!(
        evaluation.details.compliance.drying,
        7.753_160_329_232_407e-6,
        max_relative = 1e-8
    );
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let input = Scenario::default().input();

    for variant in [ModelVariant::B4, ModelVariant::B4s] {
        let first = evaluate(&input, variant).unwrap();
        let second = evaluate(&input, variant).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn total_is_the_exact_sum_in_order() {
    for variant in [ModelVariant::B4, ModelVariant::B4s] {
        let strain = Scenario {
            ambient_temperature: 25.0,
            evaluation_temperature: 28.0,
            ..Scenario::default()
        }
        .evaluate(variant)
        .strain;

        let sum = strain.creep.get::<ratio>()
            + strain.drying_shrinkage.get::<ratio>()
            + strain.autogenous_shrinkage.get::<ratio>()
            + strain.thermal.get::<ratio>();

        assert_eq!(strain.total.get::<ratio>(), sum);
    }
}

#[test]
fn drier_air_shrinks_more() {
    for variant in [ModelVariant::B4, ModelVariant::B4s] {
        let shrinkage: Vec<f64> = [0.3, 0.5, 0.7, 0.9]
            .into_iter()
            .map(|humidity| {
                Scenario {
                    humidity,
                    ..Scenario::default()
                }
                .evaluate(variant)
                .strain
                .drying_shrinkage
                .get::<ratio>()
                .abs()
            })
            .collect();

        assert!(
            shrinkage.windows(2).all(|pair| pair[0] > pair[1]),
            "{variant}: {shrinkage:?}"
        );
    }
}

#[test]
fn compression_and_drying_give_negative_strains() {
    let evaluation = Scenario::default().evaluate(ModelVariant::B4);

    assert!(evaluation.strain.creep.get::<ratio>() < 0.0);
    assert!(evaluation.strain.drying_shrinkage.get::<ratio>() < 0.0);
    assert!(evaluation.strain.autogenous_shrinkage.get::<ratio>() < 0.0);

    let tension = Scenario {
        stress: 2.0,
        ..Scenario::default()
    }
    .evaluate(ModelVariant::B4);
    assert!(tension.strain.creep.get::<ratio>() > 0.0);
}

#[test]
fn b4s_autogenous_uses_real_ages() {
    // Warm curing changes equivalent ages but not the real ages B4s uses.
    let reference = Scenario::default().evaluate(ModelVariant::B4s);
    let warm = Scenario {
        curing_temperature: 28.0,
        ambient_temperature: 28.0,
        evaluation_temperature: 28.0,
        ..Scenario::default()
    }
    .evaluate(ModelVariant::B4s);

    assert_eq!(
        reference.strain.autogenous_shrinkage,
        warm.strain.autogenous_shrinkage
    );
    assert_ne!(
        reference.details.times.drying_start,
        warm.details.times.drying_start
    );

    // B4 measures autogenous time in equivalent ages, so it does change.
    let b4_reference = Scenario::default().evaluate(ModelVariant::B4);
    let b4_warm = Scenario {
        curing_temperature: 28.0,
        ambient_temperature: 28.0,
        evaluation_temperature: 28.0,
        ..Scenario::default()
    }
    .evaluate(ModelVariant::B4);
    assert_ne!(
        b4_reference.strain.autogenous_shrinkage,
        b4_warm.strain.autogenous_shrinkage
    );
}

#[test]
fn out_of_range_inputs_still_evaluate() {
    let scenario = Scenario {
        strength: 80.0,
        volume: 5e6,
        ..Scenario::default()
    };

    let evaluation = scenario.evaluate(ModelVariant::B4s);

    let inputs: Vec<_> = evaluation
        .warnings
        .iter()
        .filter_map(|warning| match warning {
            ApplicabilityWarning::OutOfRange { input, .. } => Some(*input),
            ApplicabilityWarning::ScheduleOrder { .. } => None,
        })
        .collect();
    assert_eq!(
        inputs,
        [
            CalibratedInput::CompressiveStrength,
            CalibratedInput::VolumeToSurface,
        ]
    );
    assert!(evaluation.strain.total.get::<ratio>().is_finite());
}

#[test]
fn components_evaluate_their_variant() {
    let input = Scenario::default().input();

    assert_eq!(ModelB4.call(input).unwrap().variant, ModelVariant::B4);
    assert_eq!(ModelB4s.call(input).unwrap().variant, ModelVariant::B4s);
}

#[test]
fn zero_load_duration_is_a_domain_error() {
    let scenario = Scenario {
        evaluation: 28.0,
        ..Scenario::default()
    };

    let err = evaluate(&scenario.input(), ModelVariant::B4s).unwrap_err();
    assert!(matches!(err, ModelError::Domain { .. }), "{err}");
}

#[test]
fn b4_autogenous_before_equivalent_drying_age_is_a_domain_error() {
    // tt − t0t = 84 − 100 < 0 for an evaluation 84 days after drying at 100 days.
    let scenario = Scenario {
        drying_start: 100.0,
        loading: 100.0,
        evaluation: 184.0,
        ..Scenario::default()
    };

    let err = evaluate(&scenario.input(), ModelVariant::B4).unwrap_err();
    assert!(matches!(err, ModelError::Domain { .. }), "{err}");
    assert!(evaluate(&scenario.input(), ModelVariant::B4s).is_ok());
}
