//! Shared fixtures for unit tests.
//!
//! Builders start from one reference input so each test states only what it changes.

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

use crate::{
    CementType, Composition, Environment, Geometry, Load, MixDesign, ModelInput, Schedule,
    SpecimenShape,
};

/// Regular cement slab drying and loaded at 28 days, evaluated at 112 days.
pub(crate) fn reference_input() -> ModelInput {
    let composition = Composition::new(
        MassDensity::new::<kilogram_per_cubic_meter>(219.3),
        Ratio::new::<ratio>(0.6),
        Ratio::new::<ratio>(7.0),
        MassDensity::new::<kilogram_per_cubic_meter>(2350.0),
        None,
    )
    .unwrap();

    ModelInput {
        mix: MixDesign::new(CementType::Regular, Pressure::new::<megapascal>(27.6))
            .unwrap()
            .with_composition(composition),
        geometry: Geometry::new(
            SpecimenShape::InfiniteSlab,
            Volume::new::<cubic_millimeter>(1.9e7),
            Area::new::<square_millimeter>(1e6),
        )
        .unwrap(),
        environment: Environment::new(
            Ratio::new::<ratio>(0.5),
            celsius(20.0),
            celsius(20.0),
            celsius(20.0),
        )
        .unwrap(),
        schedule: Schedule::new(
            Time::new::<day>(28.0),
            Time::new::<day>(28.0),
            Time::new::<day>(112.0),
        )
        .unwrap(),
        load: Load::new(Pressure::new::<megapascal>(-11.03)),
    }
}

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// Replaces the curing, average and evaluation temperatures, in °C.
pub(crate) fn with_temperatures(
    input: ModelInput,
    curing: f64,
    ambient: f64,
    evaluation: f64,
) -> ModelInput {
    ModelInput {
        environment: Environment::new(
            input.environment.relative_humidity(),
            celsius(curing),
            celsius(ambient),
            celsius(evaluation),
        )
        .unwrap(),
        ..input
    }
}

/// Replaces the cement content (kg/m³), w/c and a/c, keeping the rest of the mix.
pub(crate) fn with_proportions(
    input: ModelInput,
    cement_content: f64,
    water_cement: f64,
    aggregate_cement: f64,
) -> ModelInput {
    let old = input.mix.composition().copied().unwrap();
    let composition = Composition::new(
        MassDensity::new::<kilogram_per_cubic_meter>(cement_content),
        Ratio::new::<ratio>(water_cement),
        Ratio::new::<ratio>(aggregate_cement),
        old.density(),
        old.aggregate(),
    )
    .unwrap();

    ModelInput {
        mix: input.mix.with_composition(composition),
        ..input
    }
}

/// Replaces the ages `t0`, `tp` and `t`, in days.
pub(crate) fn with_schedule(input: ModelInput, t0: f64, tp: f64, t: f64) -> ModelInput {
    ModelInput {
        schedule: Schedule::new(
            Time::new::<day>(t0),
            Time::new::<day>(tp),
            Time::new::<day>(t),
        )
        .unwrap(),
        ..input
    }
}
