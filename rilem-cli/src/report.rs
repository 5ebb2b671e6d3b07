//! Plain-text rendering of an evaluation.

use std::fmt::Write;

use rilem_b4::Evaluation;
use uom::si::ratio::ratio;

/// Renders the strain components with 8 decimal places, then one line per
/// applicability warning.
pub fn render(evaluation: &Evaluation) -> String {
    let strain = &evaluation.strain;
    let variant = evaluation.variant;
    let mut out = format!("Model {variant} strains at the evaluation age\n");

    for (label, value) in [
        ("drying shrinkage", strain.drying_shrinkage),
        ("autogenous shrinkage", strain.autogenous_shrinkage),
        ("creep", strain.creep),
        ("thermal", strain.thermal),
        ("total", strain.total),
    ] {
        // Writing to a `String` cannot fail.
        let _ = writeln!(out, "  {label:<22}{:>12.8}", value.get::<ratio>());
    }

    for warning in &evaluation.warnings {
        let _ = writeln!(out, "{warning}");
    }

    out
}
