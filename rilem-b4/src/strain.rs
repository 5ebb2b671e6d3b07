//! Strain components and their sum.

use rilem_core::units::{Compliance, TemperatureOps, ThermalExpansionCoefficient};
use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

/// Strain components at the evaluation age, shrinkage and compression negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrainResult {
    pub drying_shrinkage: Ratio,
    pub autogenous_shrinkage: Ratio,
    /// Load-induced strain, elastic part included.
    pub creep: Ratio,
    pub thermal: Ratio,
    pub total: Ratio,
}

impl StrainResult {
    /// Combines the components, summing creep, drying, autogenous and
    /// thermal strain in that order.
    #[must_use]
    pub fn new(
        creep: Ratio,
        drying_shrinkage: Ratio,
        autogenous_shrinkage: Ratio,
        thermal: Ratio,
    ) -> Self {
        Self {
            drying_shrinkage,
            autogenous_shrinkage,
            creep,
            thermal,
            total: creep + drying_shrinkage + autogenous_shrinkage + thermal,
        }
    }
}

/// Load-induced strain `J·σ`.
#[must_use]
pub fn creep_strain(compliance: Compliance, stress: Pressure) -> Ratio {
    compliance * stress
}

/// Thermal strain `α·(T − T_avg)`.
#[must_use]
pub fn thermal_strain(
    expansion: ThermalExpansionCoefficient,
    evaluation: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> Ratio {
    expansion * evaluation.minus(ambient)
}
