//! Concrete shrinkage, creep and thermal strain by RILEM TC-242 Model B4.
//!
//! Two variants are provided. [`ModelVariant::B4`] uses the mix composition
//! and [`ModelVariant::B4s`] uses only the mean compressive strength. Both take
//! a [`ModelInput`] and return an [`Evaluation`] holding every strain
//! component, the intermediate values behind them and any
//! [`ApplicabilityWarning`]s.
//!
//! ```
//! use rilem_b4::{
//!     CementType, Composition, Environment, Geometry, Load, MixDesign, ModelInput,
//!     ModelVariant, Schedule, SpecimenShape, evaluate,
//! };
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, MassDensity, Pressure, Ratio, ThermodynamicTemperature, Time, Volume},
//!     mass_density::kilogram_per_cubic_meter,
//!     pressure::megapascal,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//!     time::day,
//!     volume::cubic_meter,
//! };
//!
//! let composition = Composition::new(
//!     MassDensity::new::<kilogram_per_cubic_meter>(219.3),
//!     Ratio::new::<ratio>(0.6),
//!     Ratio::new::<ratio>(7.0),
//!     MassDensity::new::<kilogram_per_cubic_meter>(2350.0),
//!     None,
//! )?;
//! let celsius = |value| ThermodynamicTemperature::new::<degree_celsius>(value);
//!
//! let input = ModelInput {
//!     mix: MixDesign::new(CementType::Regular, Pressure::new::<megapascal>(27.6))?
//!         .with_composition(composition),
//!     geometry: Geometry::new(
//!         SpecimenShape::InfiniteSlab,
//!         Volume::new::<cubic_meter>(0.019),
//!         Area::new::<square_meter>(1.0),
//!     )?,
//!     environment: Environment::new(
//!         Ratio::new::<ratio>(0.5),
//!         celsius(20.0),
//!         celsius(20.0),
//!         celsius(20.0),
//!     )?,
//!     schedule: Schedule::new(
//!         Time::new::<day>(28.0),
//!         Time::new::<day>(28.0),
//!         Time::new::<day>(112.0),
//!     )?,
//!     load: Load::new(Pressure::new::<megapascal>(-11.03)),
//! };
//!
//! let evaluation = evaluate(&input, ModelVariant::B4)?;
//!
//! assert!(evaluation.warnings.is_empty());
//! assert!(evaluation.strain.total.get::<ratio>() < 0.0);
//! # Ok::<(), rilem_b4::ModelError>(())
//! ```

pub mod coefficients;
pub mod creep;
mod error;
mod evaluate;
mod input;
pub mod shrinkage;
pub mod strain;
pub mod time;
pub mod validate;
mod variant;

pub use error::ModelError;
pub use evaluate::{Details, Evaluation, ModelB4, ModelB4s, evaluate};
pub use input::{
    AggregateType, CementType, Composition, DEFAULT_ACTIVATION_RATIO, DEFAULT_THERMAL_EXPANSION,
    Environment, Geometry, Load, MixDesign, ModelInput, Schedule, SpecimenShape,
};
pub use strain::StrainResult;
pub use validate::{ApplicabilityWarning, CalibratedInput};
pub use variant::ModelVariant;

#[cfg(test)]
pub(crate) mod test_utils;
