use std::str::FromStr;

use rilem_core::constraint::{Constrained, StrictlyPositive};
use uom::si::f64::{Area, Length, Volume};

use crate::ModelError;

/// Idealized specimen shape, which controls how fast the specimen dries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecimenShape {
    #[cfg_attr(feature = "serde", serde(rename = "infinite slab"))]
    InfiniteSlab,
    #[cfg_attr(feature = "serde", serde(rename = "infinite cylinder"))]
    InfiniteCylinder,
    #[cfg_attr(feature = "serde", serde(rename = "infinite square prism"))]
    InfiniteSquarePrism,
    #[cfg_attr(feature = "serde", serde(rename = "sphere"))]
    Sphere,
    #[cfg_attr(feature = "serde", serde(rename = "cube"))]
    Cube,
}

impl SpecimenShape {
    /// The name used in the published tables.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::InfiniteSlab => "infinite slab",
            Self::InfiniteCylinder => "infinite cylinder",
            Self::InfiniteSquarePrism => "infinite square prism",
            Self::Sphere => "sphere",
            Self::Cube => "cube",
        }
    }
}

impl FromStr for SpecimenShape {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "infinite slab" => Ok(Self::InfiniteSlab),
            "infinite cylinder" => Ok(Self::InfiniteCylinder),
            "infinite square prism" => Ok(Self::InfiniteSquarePrism),
            "sphere" => Ok(Self::Sphere),
            "cube" => Ok(Self::Cube),
            _ => Err(ModelError::invalid(
                "specimen shape",
                format!("`{s}` is not a tabulated shape"),
            )),
        }
    }
}

/// Specimen shape and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    shape: SpecimenShape,
    volume: Constrained<Volume, StrictlyPositive>,
    surface: Constrained<Area, StrictlyPositive>,
}

impl Geometry {
    /// Creates a specimen geometry from its volume and drying surface.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if the volume or surface is not
    /// strictly positive.
    pub fn new(shape: SpecimenShape, volume: Volume, surface: Area) -> Result<Self, ModelError> {
        Ok(Self {
            shape,
            volume: StrictlyPositive::new(volume)
                .map_err(|e| ModelError::constraint("specimen volume", e))?,
            surface: StrictlyPositive::new(surface)
                .map_err(|e| ModelError::constraint("specimen surface", e))?,
        })
    }

    #[must_use]
    pub fn shape(&self) -> SpecimenShape {
        self.shape
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume.into_inner()
    }

    #[must_use]
    pub fn surface(&self) -> Area {
        self.surface.into_inner()
    }

    /// Volume to surface ratio `V/S`.
    #[must_use]
    pub fn volume_to_surface(&self) -> Length {
        self.volume() / self.surface()
    }

    /// Effective thickness `D = 2·V/S`.
    #[must_use]
    pub fn effective_thickness(&self) -> Length {
        2.0 * self.volume_to_surface()
    }
}
