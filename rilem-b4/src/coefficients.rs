//! Fixed empirical coefficient tables.
//!
//! Tables are keyed by [`CementType`](crate::CementType) and, for Model B4,
//! by [`AggregateType`]. They are lookup data only; the equations that use
//! them live with each model variant.

pub mod b4;
pub mod b4s;

use crate::{AggregateType, SpecimenShape};

/// Aggregate-dependent scaling of the drying shrinkage halftime (`k_τa`) and
/// final drying shrinkage (`k_εa`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateFactors {
    pub halftime: f64,
    pub final_shrinkage: f64,
}

impl AggregateFactors {
    /// Factors used when the aggregate type is unknown.
    pub const NEUTRAL: Self = Self {
        halftime: 1.0,
        final_shrinkage: 1.0,
    };

    /// Looks up the factors for an aggregate, falling back to [`NEUTRAL`](Self::NEUTRAL).
    #[must_use]
    pub fn for_aggregate(aggregate: Option<AggregateType>) -> Self {
        let Some(aggregate) = aggregate else {
            return Self::NEUTRAL;
        };

        let (halftime, final_shrinkage) = match aggregate {
            AggregateType::Diabase => (0.06, 0.76),
            AggregateType::Quartzite => (0.59, 0.71),
            AggregateType::Limestone => (1.80, 0.95),
            AggregateType::Sandstone => (2.30, 1.60),
            AggregateType::Granite => (4.00, 1.05),
            AggregateType::QuartzDiorite => (15.0, 2.20),
        };

        Self {
            halftime,
            final_shrinkage,
        }
    }
}

/// Geometry shape factor `k_s` scaling the effective thickness.
#[must_use]
pub fn shape_factor(shape: SpecimenShape) -> f64 {
    match shape {
        SpecimenShape::InfiniteSlab => 1.00,
        SpecimenShape::InfiniteCylinder => 1.15,
        SpecimenShape::InfiniteSquarePrism => 1.25,
        SpecimenShape::Sphere => 1.30,
        SpecimenShape::Cube => 1.55,
    }
}
