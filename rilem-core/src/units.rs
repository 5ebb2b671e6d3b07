//! Quantities and unit helpers that `uom` does not provide directly.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Pressure, Ratio, TemperatureInterval, ThermodynamicTemperature},
        pressure::megapascal,
        ratio::ratio,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, P1, P2, Z0},
};

/// Compliance, strain per unit stress, 1/Pa in SI.
///
/// Multiplying a compliance by a [`Pressure`] yields a dimensionless strain.
pub type Compliance = Quantity<ISQ<P1, N1, P2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Coefficient of linear thermal expansion, 1/K in SI.
///
/// Multiplying by a [`TemperatureInterval`] yields a dimensionless strain.
pub type ThermalExpansionCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`Compliance`] from a value in 1/MPa.
#[must_use]
pub fn compliance_per_megapascal(value: f64) -> Compliance {
    Ratio::new::<ratio>(value) / Pressure::new::<megapascal>(1.0)
}

/// Creates a [`ThermalExpansionCoefficient`] from a value in 1/K.
#[must_use]
pub fn expansion_per_kelvin(value: f64) -> ThermalExpansionCoefficient {
    Ratio::new::<ratio>(value) / TemperatureInterval::new::<delta_kelvin>(1.0)
}

/// Extension method for `ThermodynamicTemperature` to compute a temperature difference.
pub trait TemperatureOps {
    /// Computes the signed difference `self - other`.
    ///
    /// A `TemperatureInterval` (a temperature change) is distinct from a
    /// `ThermodynamicTemperature` (a specific temperature value), so plain
    /// subtraction is not available in `uom`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
