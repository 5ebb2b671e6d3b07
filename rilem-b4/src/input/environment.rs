use rilem_core::constraint::{Constrained, StrictlyPositive, UnitInterval};
use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::ModelError;

/// Activation energy over the gas constant used when no better data exists, in K.
pub const DEFAULT_ACTIVATION_RATIO: f64 = 4000.0;

/// Exposure conditions of the specimen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    relative_humidity: Constrained<Ratio, UnitInterval>,
    curing_temperature: ThermodynamicTemperature,
    ambient_temperature: ThermodynamicTemperature,
    evaluation_temperature: ThermodynamicTemperature,
    activation_ratio: Constrained<TemperatureInterval, StrictlyPositive>,
}

impl Environment {
    /// Creates an environment.
    ///
    /// - `relative_humidity`: ambient relative humidity, within `[0, 1]`.
    /// - `curing_temperature`: temperature during curing, before drying starts.
    /// - `ambient_temperature`: average environmental temperature before the
    ///   evaluation instant.
    /// - `evaluation_temperature`: environmental temperature at the evaluation
    ///   instant, which drives the thermal strain.
    ///
    /// The activation ratio `U/R` defaults to [`DEFAULT_ACTIVATION_RATIO`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if the humidity lies outside `[0, 1]`.
    pub fn new(
        relative_humidity: Ratio,
        curing_temperature: ThermodynamicTemperature,
        ambient_temperature: ThermodynamicTemperature,
        evaluation_temperature: ThermodynamicTemperature,
    ) -> Result<Self, ModelError> {
        let default_ratio = TemperatureInterval::new::<delta_kelvin>(DEFAULT_ACTIVATION_RATIO);
        let activation_ratio = StrictlyPositive::new(default_ratio)
            .map_err(|e| ModelError::constraint("activation ratio", e))?;

        Ok(Self {
            relative_humidity: UnitInterval::new(relative_humidity)
                .map_err(|e| ModelError::constraint("relative humidity", e))?,
            curing_temperature,
            ambient_temperature,
            evaluation_temperature,
            activation_ratio,
        })
    }

    /// Overrides the activation energy over gas constant ratio `U/R`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if the ratio is not strictly positive.
    pub fn with_activation_ratio(
        self,
        activation_ratio: TemperatureInterval,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            activation_ratio: StrictlyPositive::new(activation_ratio)
                .map_err(|e| ModelError::constraint("activation ratio", e))?,
            ..self
        })
    }

    #[must_use]
    pub fn relative_humidity(&self) -> Ratio {
        self.relative_humidity.into_inner()
    }

    #[must_use]
    pub fn curing_temperature(&self) -> ThermodynamicTemperature {
        self.curing_temperature
    }

    #[must_use]
    pub fn ambient_temperature(&self) -> ThermodynamicTemperature {
        self.ambient_temperature
    }

    #[must_use]
    pub fn evaluation_temperature(&self) -> ThermodynamicTemperature {
        self.evaluation_temperature
    }

    #[must_use]
    pub fn activation_ratio(&self) -> TemperatureInterval {
        self.activation_ratio.into_inner()
    }

    pub(crate) fn humidity_value(&self) -> f64 {
        self.relative_humidity().get::<ratio>()
    }

    pub(crate) fn curing_celsius(&self) -> f64 {
        self.curing_temperature.get::<degree_celsius>()
    }

    pub(crate) fn ambient_celsius(&self) -> f64 {
        self.ambient_temperature.get::<degree_celsius>()
    }

    pub(crate) fn activation_kelvin(&self) -> f64 {
        self.activation_ratio().get::<delta_kelvin>()
    }
}
