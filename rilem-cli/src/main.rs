//! Command-line front end for the RILEM Model B4 and B4s evaluations.
//!
//! Usage: `rilem [SCENARIO.toml]`. Without a scenario file the built-in
//! reference scenario is evaluated. Set `RUST_LOG=rilem_b4=debug` to trace
//! intermediate values.

mod config;
mod report;

use std::path::Path;

use anyhow::Context;
use rilem_b4::evaluate;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ScenarioConfig;

/// Log filter used when `RUST_LOG` is unset. Applicability warnings are
/// logged by the model at debug level and only reach the user through the
/// report.
const DEFAULT_LOG_FILTER: &str = "rilem=info,rilem_b4=info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => {
            let path = Path::new(&path);
            tracing::info!(scenario = %path.display(), "loading scenario");
            ScenarioConfig::load(path)?
        }
        None => {
            tracing::info!("no scenario given, evaluating the reference scenario");
            ScenarioConfig::default()
        }
    };

    let variant = config.variant;
    let input = config.input().context("invalid scenario")?;
    let evaluation =
        evaluate(&input, variant).with_context(|| format!("Model {variant} evaluation failed"))?;

    print!("{}", report::render(&evaluation));

    Ok(())
}
