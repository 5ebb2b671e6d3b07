//! Applicability checks against each model's calibration ranges.
//!
//! The models still produce a number outside these ranges, but without any
//! guaranteed accuracy. Warnings are returned as data so the caller decides
//! how to surface them.

use std::fmt;

use uom::si::{length::millimeter, mass_density::kilogram_per_cubic_meter, ratio::ratio, time::day};

use crate::{ModelInput, ModelVariant};

/// An input whose calibration range is documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalibratedInput {
    WaterCementRatio,
    AggregateCementRatio,
    CompressiveStrength,
    CementContent,
    AverageTemperature,
    CuringTemperature,
    VolumeToSurface,
}

impl CalibratedInput {
    /// Inclusive calibration range, in the unit given by [`unit`](Self::unit).
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::WaterCementRatio => (0.22, 0.87),
            Self::AggregateCementRatio => (1.0, 13.2),
            Self::CompressiveStrength => (15.0, 70.0),
            Self::CementContent => (200.0, 1500.0),
            Self::AverageTemperature => (-25.0, 75.0),
            Self::CuringTemperature => (20.0, 30.0),
            Self::VolumeToSurface => (12.0, 120.0),
        }
    }

    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::WaterCementRatio | Self::AggregateCementRatio => "",
            Self::CompressiveStrength => "MPa",
            Self::CementContent => "kg/m³",
            Self::AverageTemperature | Self::CuringTemperature => "°C",
            Self::VolumeToSurface => "mm",
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::WaterCementRatio => "w/c",
            Self::AggregateCementRatio => "a/c",
            Self::CompressiveStrength => "fcm",
            Self::CementContent => "c",
            Self::AverageTemperature => "T_avg",
            Self::CuringTemperature => "T_cur",
            Self::VolumeToSurface => "V/S",
        }
    }

    fn check(self, value: f64) -> Option<ApplicabilityWarning> {
        let (min, max) = self.range();
        if (min..=max).contains(&value) {
            None
        } else {
            Some(ApplicabilityWarning::OutOfRange {
                input: self,
                value,
                min,
                max,
            })
        }
    }
}

/// A numerically valid input the model was not calibrated for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApplicabilityWarning {
    /// The input lies outside its inclusive calibration range `[min, max]`.
    OutOfRange {
        input: CalibratedInput,
        value: f64,
        min: f64,
        max: f64,
    },
    /// The ages do not satisfy `t0 ≤ tp ≤ t`, all in days.
    ScheduleOrder {
        drying_start: f64,
        loading: f64,
        evaluation: f64,
    },
}

impl fmt::Display for ApplicabilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OutOfRange {
                input,
                value,
                min,
                max,
            } => {
                let unit = input.unit();
                let sep = if unit.is_empty() { "" } else { " " };
                write!(
                    f,
                    "OUT OF APPLICABILITY RANGE: {} = {value}{sep}{unit} \
                     is outside [{min}, {max}]{sep}{unit}",
                    input.symbol(),
                )
            }
            Self::ScheduleOrder {
                drying_start,
                loading,
                evaluation,
            } => write!(
                f,
                "schedule expects t0 <= tp <= t, \
                 got t0 = {drying_start} d, tp = {loading} d, t = {evaluation} d"
            ),
        }
    }
}

/// Checks every calibrated input of `variant` and the schedule ordering.
///
/// Model B4 checks the mix proportions too, when they are given; a missing
/// composition is reported by the model itself. Each warning is also logged
/// at debug level; surfacing it to users is left to the caller.
#[must_use]
pub fn check(input: &ModelInput, variant: ModelVariant) -> Vec<ApplicabilityWarning> {
    let mut readings = Vec::with_capacity(7);
    let composition = match variant {
        ModelVariant::B4 => input.mix.composition(),
        ModelVariant::B4s => None,
    };

    if let Some(composition) = composition {
        readings.push((
            CalibratedInput::WaterCementRatio,
            composition.water_cement().get::<ratio>(),
        ));
        readings.push((
            CalibratedInput::AggregateCementRatio,
            composition.aggregate_cement().get::<ratio>(),
        ));
    }

    readings.push((
        CalibratedInput::CompressiveStrength,
        input.mix.strength_mpa(),
    ));

    if let Some(composition) = composition {
        readings.push((
            CalibratedInput::CementContent,
            composition
                .cement_content()
                .get::<kilogram_per_cubic_meter>(),
        ));
    }

    readings.extend([
        (
            CalibratedInput::AverageTemperature,
            input.environment.ambient_celsius(),
        ),
        (
            CalibratedInput::CuringTemperature,
            input.environment.curing_celsius(),
        ),
        (
            CalibratedInput::VolumeToSurface,
            input.geometry.volume_to_surface().get::<millimeter>(),
        ),
    ]);

    let mut warnings: Vec<_> = readings
        .into_iter()
        .filter_map(|(input, value)| input.check(value))
        .collect();

    let schedule = &input.schedule;
    if !schedule.is_ordered() {
        warnings.push(ApplicabilityWarning::ScheduleOrder {
            drying_start: schedule.drying_start().get::<day>(),
            loading: schedule.loading().get::<day>(),
            evaluation: schedule.evaluation().get::<day>(),
        });
    }

    for warning in &warnings {
        tracing::debug!(model = %variant, "{warning}");
    }

    warnings
}
