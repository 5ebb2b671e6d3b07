use std::str::FromStr;

use rilem_core::{
    constraint::{Constrained, StrictlyPositive},
    units::{ThermalExpansionCoefficient, expansion_per_kelvin},
};
use uom::si::{
    f64::{MassDensity, Pressure, Ratio},
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    ratio::ratio,
};

use crate::ModelError;

/// Thermal expansion coefficient assumed when none is given, in 1/K.
pub const DEFAULT_THERMAL_EXPANSION: f64 = 1e-5;

/// Cement reactivity class.
///
/// ASTM Type I general purpose cement may be treated as [`Regular`], Type II
/// (low heat) as [`SlowHardening`] and Type III (high early strength) as
/// [`RapidHardening`]. Other types should be mapped by their reactivity.
///
/// [`Regular`]: CementType::Regular
/// [`SlowHardening`]: CementType::SlowHardening
/// [`RapidHardening`]: CementType::RapidHardening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CementType {
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Regular,
    #[cfg_attr(feature = "serde", serde(rename = "RS"))]
    RapidHardening,
    #[cfg_attr(feature = "serde", serde(rename = "SL"))]
    SlowHardening,
}

impl CementType {
    /// Maps an ASTM C150 cement type designation to its reactivity class.
    ///
    /// Accepts `I`, `II` and `III`, optionally prefixed with `Type `.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] for any other designation.
    pub fn from_astm(designation: &str) -> Result<Self, ModelError> {
        let trimmed = designation.trim();
        let roman = trimmed.strip_prefix("Type ").unwrap_or(trimmed);
        match roman {
            "I" => Ok(Self::Regular),
            "II" => Ok(Self::SlowHardening),
            "III" => Ok(Self::RapidHardening),
            _ => Err(ModelError::invalid(
                "cement type",
                format!("no reactivity class for ASTM type `{designation}`"),
            )),
        }
    }

    /// The short code used in the published tables.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Regular => "R",
            Self::RapidHardening => "RS",
            Self::SlowHardening => "SL",
        }
    }
}

impl FromStr for CementType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Self::Regular),
            "RS" => Ok(Self::RapidHardening),
            "SL" => Ok(Self::SlowHardening),
            _ => Err(ModelError::invalid(
                "cement type",
                format!("expected one of R, RS, SL, got `{s}`"),
            )),
        }
    }
}

/// Aggregate mineralogy with tabulated shrinkage scaling factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AggregateType {
    Diabase,
    Quartzite,
    Limestone,
    Sandstone,
    Granite,
    #[cfg_attr(feature = "serde", serde(rename = "Quartz Diorite"))]
    QuartzDiorite,
}

impl AggregateType {
    /// Parses an aggregate name where an empty string means "unknown".
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if a non-empty name is not tabulated.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ModelError> {
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }

    /// The name used in the published tables.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Diabase => "Diabase",
            Self::Quartzite => "Quartzite",
            Self::Limestone => "Limestone",
            Self::Sandstone => "Sandstone",
            Self::Granite => "Granite",
            Self::QuartzDiorite => "Quartz Diorite",
        }
    }
}

impl FromStr for AggregateType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Diabase" => Ok(Self::Diabase),
            "Quartzite" => Ok(Self::Quartzite),
            "Limestone" => Ok(Self::Limestone),
            "Sandstone" => Ok(Self::Sandstone),
            "Granite" => Ok(Self::Granite),
            "Quartz Diorite" => Ok(Self::QuartzDiorite),
            _ => Err(ModelError::invalid(
                "aggregate type",
                format!("`{s}` is not a tabulated aggregate"),
            )),
        }
    }
}

/// Mix proportions required by Model B4.
///
/// Model B4s works from strength alone and ignores these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    cement_content: Constrained<MassDensity, StrictlyPositive>,
    water_cement: Constrained<Ratio, StrictlyPositive>,
    aggregate_cement: Constrained<Ratio, StrictlyPositive>,
    density: Constrained<MassDensity, StrictlyPositive>,
    aggregate: Option<AggregateType>,
}

impl Composition {
    /// Creates a mix composition.
    ///
    /// - `cement_content`: cement mass per unit volume of concrete.
    /// - `water_cement`, `aggregate_cement`: ratios by weight.
    /// - `density`: mass density of the concrete.
    /// - `aggregate`: mineralogy, if known.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if any quantity is not strictly positive.
    pub fn new(
        cement_content: MassDensity,
        water_cement: Ratio,
        aggregate_cement: Ratio,
        density: MassDensity,
        aggregate: Option<AggregateType>,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            cement_content: StrictlyPositive::new(cement_content)
                .map_err(|e| ModelError::constraint("cement content", e))?,
            water_cement: StrictlyPositive::new(water_cement)
                .map_err(|e| ModelError::constraint("water-cement ratio", e))?,
            aggregate_cement: StrictlyPositive::new(aggregate_cement)
                .map_err(|e| ModelError::constraint("aggregate-cement ratio", e))?,
            density: StrictlyPositive::new(density)
                .map_err(|e| ModelError::constraint("concrete density", e))?,
            aggregate,
        })
    }

    #[must_use]
    pub fn cement_content(&self) -> MassDensity {
        self.cement_content.into_inner()
    }

    #[must_use]
    pub fn water_cement(&self) -> Ratio {
        self.water_cement.into_inner()
    }

    #[must_use]
    pub fn aggregate_cement(&self) -> Ratio {
        self.aggregate_cement.into_inner()
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density.into_inner()
    }

    #[must_use]
    pub fn aggregate(&self) -> Option<AggregateType> {
        self.aggregate
    }

    pub(crate) fn water_cement_value(&self) -> f64 {
        self.water_cement().get::<ratio>()
    }

    pub(crate) fn aggregate_cement_value(&self) -> f64 {
        self.aggregate_cement().get::<ratio>()
    }

    /// Cement content over concrete density, both in kg/m³.
    pub(crate) fn cement_fraction(&self) -> f64 {
        self.cement_content().get::<kilogram_per_cubic_meter>()
            / self.density().get::<kilogram_per_cubic_meter>()
    }
}

/// The concrete mix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixDesign {
    cement: CementType,
    strength: Constrained<Pressure, StrictlyPositive>,
    thermal_expansion: ThermalExpansionCoefficient,
    composition: Option<Composition>,
}

impl MixDesign {
    /// Creates a mix from its cement type and mean 28-day cylinder strength.
    ///
    /// The thermal expansion coefficient defaults to
    /// [`DEFAULT_THERMAL_EXPANSION`] and no composition is attached.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if the strength is not strictly positive.
    pub fn new(cement: CementType, strength: Pressure) -> Result<Self, ModelError> {
        Ok(Self {
            cement,
            strength: StrictlyPositive::new(strength)
                .map_err(|e| ModelError::constraint("compressive strength", e))?,
            thermal_expansion: expansion_per_kelvin(DEFAULT_THERMAL_EXPANSION),
            composition: None,
        })
    }

    /// Attaches the mix proportions needed by Model B4.
    #[must_use]
    pub fn with_composition(self, composition: Composition) -> Self {
        Self {
            composition: Some(composition),
            ..self
        }
    }

    /// Overrides the coefficient of thermal expansion.
    #[must_use]
    pub fn with_thermal_expansion(self, thermal_expansion: ThermalExpansionCoefficient) -> Self {
        Self {
            thermal_expansion,
            ..self
        }
    }

    #[must_use]
    pub fn cement(&self) -> CementType {
        self.cement
    }

    /// Mean 28-day cylinder compressive strength.
    #[must_use]
    pub fn strength(&self) -> Pressure {
        self.strength.into_inner()
    }

    #[must_use]
    pub fn thermal_expansion(&self) -> ThermalExpansionCoefficient {
        self.thermal_expansion
    }

    #[must_use]
    pub fn composition(&self) -> Option<&Composition> {
        self.composition.as_ref()
    }

    pub(crate) fn strength_mpa(&self) -> f64 {
        self.strength().get::<megapascal>()
    }
}
