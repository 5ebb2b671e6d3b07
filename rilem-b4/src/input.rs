//! Immutable inputs to a model evaluation.
//!
//! Each part validates its physical invariants at construction, so a
//! [`ModelInput`] can always be handed to a model. Whether the values also lie
//! inside a model's calibration range is a separate, non-fatal question
//! answered by [`validate`](crate::validate).

mod environment;
mod geometry;
mod mix;
mod schedule;

use uom::si::f64::Pressure;

pub use environment::{DEFAULT_ACTIVATION_RATIO, Environment};
pub use geometry::{Geometry, SpecimenShape};
pub use mix::{AggregateType, CementType, Composition, DEFAULT_THERMAL_EXPANSION, MixDesign};
pub use schedule::Schedule;

/// The sustained load acting on the specimen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Load {
    /// Applied stress, compressive negative.
    pub stress: Pressure,
}

impl Load {
    #[must_use]
    pub fn new(stress: Pressure) -> Self {
        Self { stress }
    }
}

/// Everything a model needs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInput {
    pub mix: MixDesign,
    pub geometry: Geometry,
    pub environment: Environment,
    pub schedule: Schedule,
    pub load: Load,
}
