pub use model::*;

mod model;

use std::path::PathBuf;

use clap::Parser;
use config::builder::DefaultState;
use config::ConfigBuilder;

use crate::error::SettingsError;

pub const ENV_PREFIX: &str = "BENCHPLOT";

/// Resolves settings from, in increasing precedence: built-in defaults, an optional
/// configuration file, `BENCHPLOT_*` environment variables and command line options.
#[tracing::instrument(level = "debug")]
pub fn get_settings(options: &CliOptions) -> Result<Settings, SettingsError> {
    let mut builder = config::Config::builder();

    if let Some(ref config_path) = options.config {
        builder = builder.add_source(config::File::from(config_path.as_path()).required(true));
    }

    // E.g. `BENCHPLOT_OUTPUT_DIR=target/charts` would set `Settings.output_dir`
    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    );

    let settings: Settings = apply_options(builder, options)?.build()?.try_deserialize()?;
    validate(&settings)?;
    tracing::info!(?settings, "settings resolved.");
    Ok(settings)
}

fn apply_options(
    builder: ConfigBuilder<DefaultState>, options: &CliOptions,
) -> Result<ConfigBuilder<DefaultState>, SettingsError> {
    let as_setting = |path: &PathBuf| path.to_string_lossy().to_string();

    let builder = builder
        .set_override_option("input", options.input.as_ref().map(as_setting))?
        .set_override_option("output_dir", options.output_dir.as_ref().map(as_setting))?;

    Ok(builder)
}

fn validate(settings: &Settings) -> Result<(), SettingsError> {
    if settings.dpi == 0 {
        return Err(SettingsError::Bootstrap {
            message: "figure resolution must be positive".to_string(),
            setting: "dpi".to_string(),
        });
    }

    if let Some(chart) = settings.charts.iter().find(|c| c.file_name.as_os_str().is_empty()) {
        return Err(SettingsError::Bootstrap {
            message: format!("chart {:?} has no output file name", chart.title),
            setting: "charts.file_name".to_string(),
        });
    }

    Ok(())
}

/// Renders thread-scaling charts from benchmark results.
///
/// Without options, reads `benchmark_results.txt` and writes `insert_only_benchmark.png` and
/// `mixed_benchmark.png` into the working directory.
#[derive(Debug, Default, Parser)]
#[command(version, author = "Damon Rolfs")]
pub struct CliOptions {
    /// results file to read, overriding configuration.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// directory to write chart images into, overriding configuration.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// optional configuration file (format inferred from its extension).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
