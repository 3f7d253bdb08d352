//! Field computation driver
//!
//! Reads a JSON field request from disk, layers it over a config file
//! (or `PF_FIELD_CONFIG_PATH`), and writes the JSON response.

use std::path::Path;

use anyhow::{bail, Context, Result};
use pf_core::api::{compute_field_response, field_config_from_env, FIELD_SCHEMA_VERSION};
use pf_core::{FieldConfig, FieldRequest, FieldResponse, Formation, GridAxes, ModelParams};
use tracing::info;

/// Base config: explicit file first, then the environment, then defaults.
pub fn load_config(config: Option<&Path>) -> Result<FieldConfig> {
    match config {
        Some(path) => FieldConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => field_config_from_env().context("failed to load config from environment"),
    }
}

/// Compute the response for the request stored at `request_path`.
pub fn compute_from_file(request_path: &Path, config: Option<&Path>) -> Result<FieldResponse> {
    let content = std::fs::read_to_string(request_path)
        .with_context(|| format!("failed to read request {}", request_path.display()))?;
    let request: FieldRequest = serde_json::from_str(&content)
        .with_context(|| format!("invalid request JSON in {}", request_path.display()))?;
    if request.schema_version != FIELD_SCHEMA_VERSION {
        bail!(
            "unsupported schema_version {} (expected {})",
            request.schema_version,
            FIELD_SCHEMA_VERSION
        );
    }

    let base = load_config(config)?;
    let response = compute_field_response(&request, &base)?;
    info!(
        "computed {:?} field: {}x{} cells, range {:?}..{:?}",
        response.model, response.nx, response.ny, response.min, response.max
    );
    Ok(response)
}

/// Write `response` as JSON to `out`, or return it as a string when `out` is `None`.
pub fn write_response(response: &FieldResponse, out: Option<&Path>, pretty: bool) -> Result<Option<String>> {
    let json = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    match out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(None)
        }
        None => Ok(Some(json)),
    }
}

/// One line per preset: name and agent count per team
pub fn formation_summaries() -> Vec<String> {
    Formation::ALL
        .iter()
        .map(|f| {
            let squads = f.squads();
            format!("{:<8} home={} away={}", f.name(), squads.home.len(), squads.away.len())
        })
        .collect()
}

/// One line per parameter preset with its values
pub fn preset_summaries() -> Vec<String> {
    ModelParams::PRESET_NAMES
        .iter()
        .filter_map(|name| ModelParams::preset(name).map(|p| (name, p)))
        .map(|(name, p)| {
            format!(
                "{:<16} speed={} reaction={} tau={} pass_speed={}",
                name, p.player_speed, p.reaction_time, p.tau, p.pass_speed
            )
        })
        .collect()
}

/// Axis sizes for the configured pitch at `resolution` (config value if `None`)
pub fn grid_summary(config: &FieldConfig, resolution: Option<f64>) -> Result<(usize, usize)> {
    let grid = GridAxes::for_pitch(&config.pitch, resolution.unwrap_or(config.resolution))?;
    Ok((grid.nx(), grid.ny()))
}
