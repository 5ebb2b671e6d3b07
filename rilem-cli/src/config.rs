//! Scenario files.
//!
//! A scenario is a TOML document in engineering units. Every field is
//! optional and falls back to the reference scenario, so an empty file
//! evaluates the same thing as running without one.
//!
//! ```toml
//! variant = "B4s"
//!
//! [mix]
//! cement_type = "RS"
//! strength = 45.0
//!
//! [environment]
//! relative_humidity = 0.7
//! ```

use std::{fs, path::Path};

use anyhow::Context;
use rilem_b4::{
    AggregateType, CementType, Composition, DEFAULT_ACTIVATION_RATIO, DEFAULT_THERMAL_EXPANSION,
    Environment, Geometry, Load, MixDesign, ModelError, ModelInput, ModelVariant, Schedule,
    SpecimenShape,
};
use rilem_core::units::expansion_per_kelvin;
use serde::{Deserialize, Serialize};
use uom::si::{
    area::square_millimeter,
    f64::{
        Area, MassDensity, Pressure, Ratio, TemperatureInterval, ThermodynamicTemperature, Time,
        Volume,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    ratio::ratio,
    temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
    time::day,
    volume::cubic_millimeter,
};

/// A complete scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// `"B4"` or `"B4s"`.
    pub variant: ModelVariant,
    pub mix: MixConfig,
    pub geometry: GeometryConfig,
    pub environment: EnvironmentConfig,
    pub schedule: ScheduleConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MixConfig {
    /// `"R"`, `"RS"` or `"SL"`.
    pub cement_type: CementType,
    /// Aggregate table name, empty when unknown.
    pub aggregate_type: String,
    /// Mean 28-day cylinder strength `fcm`, MPa.
    pub strength: f64,
    /// Cement content `c`, kg/m³.
    pub cement_content: f64,
    pub water_cement: f64,
    pub aggregate_cement: f64,
    /// Concrete density `ρ`, kg/m³.
    pub density: f64,
    /// Coefficient of thermal expansion, 1/K.
    pub thermal_expansion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
    /// Shape table name, such as `"infinite slab"`.
    pub shape: SpecimenShape,
    /// Specimen volume, mm³.
    pub volume: f64,
    /// Drying surface, mm².
    pub surface: f64,
}

/// Temperatures in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    pub relative_humidity: f64,
    pub curing_temperature: f64,
    pub ambient_temperature: f64,
    pub evaluation_temperature: f64,
    /// Activation energy over gas constant `U/R`, K.
    pub activation_ratio: f64,
}

/// Ages in days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    pub drying_start: f64,
    pub loading: f64,
    pub evaluation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    /// Sustained stress, MPa, compressive negative.
    pub stress: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            variant: ModelVariant::B4,
            mix: MixConfig::default(),
            geometry: GeometryConfig::default(),
            environment: EnvironmentConfig::default(),
            schedule: ScheduleConfig::default(),
            load: LoadConfig::default(),
        }
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            cement_type: CementType::Regular,
            aggregate_type: String::new(),
            strength: 27.6,
            cement_content: 219.3,
            water_cement: 0.6,
            aggregate_cement: 7.0,
            density: 2350.0,
            thermal_expansion: DEFAULT_THERMAL_EXPANSION,
        }
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            shape: SpecimenShape::InfiniteSlab,
            volume: 1.9e7,
            surface: 1e6,
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            relative_humidity: 0.5,
            curing_temperature: 20.0,
            ambient_temperature: 20.0,
            evaluation_temperature: 20.0,
            activation_ratio: DEFAULT_ACTIVATION_RATIO,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            drying_start: 28.0,
            loading: 28.0,
            evaluation: 112.0,
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self { stress: -11.03 }
    }
}

impl ScenarioConfig {
    /// Reads a scenario from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario `{}`", path.display()))?;

        toml::from_str(&text)
            .with_context(|| format!("failed to parse scenario `{}`", path.display()))
    }

    /// Builds the model input.
    ///
    /// The mix proportions are only attached for Model B4; B4s scenarios may
    /// leave them at any value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] for an unknown aggregate name or
    /// physically impossible values.
    pub fn input(&self) -> Result<ModelInput, ModelError> {
        let Self {
            variant,
            mix,
            geometry,
            environment,
            schedule,
            load,
        } = self;

        let celsius = |value| ThermodynamicTemperature::new::<degree_celsius>(value);

        Ok(ModelInput {
            mix: mix.design(*variant)?,
            geometry: Geometry::new(
                geometry.shape,
                Volume::new::<cubic_millimeter>(geometry.volume),
                Area::new::<square_millimeter>(geometry.surface),
            )?,
            environment: Environment::new(
                Ratio::new::<ratio>(environment.relative_humidity),
                celsius(environment.curing_temperature),
                celsius(environment.ambient_temperature),
                celsius(environment.evaluation_temperature),
            )?
            .with_activation_ratio(TemperatureInterval::new::<kelvin>(
                environment.activation_ratio,
            ))?,
            schedule: Schedule::new(
                Time::new::<day>(schedule.drying_start),
                Time::new::<day>(schedule.loading),
                Time::new::<day>(schedule.evaluation),
            )?,
            load: Load::new(Pressure::new::<megapascal>(load.stress)),
        })
    }
}

impl MixConfig {
    fn design(&self, variant: ModelVariant) -> Result<MixDesign, ModelError> {
        let aggregate = AggregateType::parse_optional(&self.aggregate_type)?;
        let design = MixDesign::new(self.cement_type, Pressure::new::<megapascal>(self.strength))?
            .with_thermal_expansion(expansion_per_kelvin(self.thermal_expansion));

        if variant == ModelVariant::B4s {
            return Ok(design);
        }

        let composition = Composition::new(
            MassDensity::new::<kilogram_per_cubic_meter>(self.cement_content),
            Ratio::new::<ratio>(self.water_cement),
            Ratio::new::<ratio>(self.aggregate_cement),
            MassDensity::new::<kilogram_per_cubic_meter>(self.density),
            aggregate,
        )?;

        Ok(design.with_composition(composition))
    }
}
