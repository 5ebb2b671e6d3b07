//! The two model variants and the equations where they differ.
//!
//! Model B4 derives its parameters from the mix composition. Model B4s, the
//! simplified variant, derives them from the compressive strength alone. Both
//! share the time, shrinkage and compliance equations and differ only in how
//! the parameters feeding those equations are obtained.

mod b4;
mod b4s;

use std::{fmt, str::FromStr};

use crate::{
    ModelError, Schedule,
    creep::CreepTerms,
    shrinkage::{AutogenousShrinkage, DryingShrinkageBase},
    time::EquivalentTimes,
};

pub(crate) use b4::B4;
pub(crate) use b4s::B4s;

/// Selects which model evaluates an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelVariant {
    /// Full model, requires the mix composition.
    B4,
    /// Simplified model, requires only the compressive strength.
    B4s,
}

impl ModelVariant {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::B4 => "B4",
            Self::B4s => "B4s",
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelVariant {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("B4") {
            Ok(Self::B4)
        } else if s.eq_ignore_ascii_case("B4s") {
            Ok(Self::B4s)
        } else {
            Err(ModelError::invalid(
                "model variant",
                format!("`{s}` is neither B4 nor B4s"),
            ))
        }
    }
}

/// Variant-specific parameters of the shared model equations.
pub(crate) trait Formulation {
    /// Halftime and final shrinkage bases with their aggregate corrections.
    fn drying_shrinkage(&self) -> DryingShrinkageBase;

    /// Autogenous shrinkage at the evaluation age.
    fn autogenous(
        &self,
        schedule: &Schedule,
        times: &EquivalentTimes,
    ) -> Result<AutogenousShrinkage, ModelError>;

    /// Compliance coefficients.
    ///
    /// `e28` is the 28-day modulus in MPa and `drying_intensity` is
    /// `|k_h·ε_sh∞|`, which must be strictly positive.
    fn creep_terms(&self, e28: f64, drying_intensity: f64) -> Result<CreepTerms, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variant_names() {
        assert_eq!("B4".parse::<ModelVariant>().unwrap(), ModelVariant::B4);
        assert_eq!("b4s".parse::<ModelVariant>().unwrap(), ModelVariant::B4s);
        assert!("B3".parse::<ModelVariant>().is_err());
        assert_eq!(ModelVariant::B4s.to_string(), "B4s");
    }
}
