//! JSON API for field computations
//!
//! One request in, one response out. The visualization client sends the
//! current agents, ball and parameters and renders `values` row-major
//! (y outer, x inner) onto the pitch.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config_env::field_config_from_env;
use crate::engine::agent::{Agent, Ball, Squads, Team};
use crate::engine::config::{FieldConfig, ModelParams};
use crate::engine::field::Field;
use crate::engine::fields::{compute_field, FieldInputs, ModelKind};
use crate::engine::formations::Formation;
use crate::engine::grid::GridAxes;
use crate::engine::pitch::PitchGeometry;
use crate::error::FieldError;

/// Request/response schema version
pub const FIELD_SCHEMA_VERSION: u8 = 1;

pub mod error_codes {
    pub const PARSE: &str = "E_PARSE";
    pub const SCHEMA: &str = "E_SCHEMA";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub model: ModelKind,
    #[serde(default)]
    pub home: Vec<Agent>,
    #[serde(default)]
    pub away: Vec<Agent>,
    /// `null` or missing: no ball on the pitch
    #[serde(default)]
    pub ball: Option<Ball>,
    #[serde(default)]
    pub params: Option<ModelParams>,
    /// Named parameter preset, used when `params` is absent
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub pitch: Option<PitchGeometry>,
    #[serde(default)]
    pub resolution: Option<f64>,
    /// Team the derived fields are modeled for (default: home)
    #[serde(default)]
    pub team: Team,
    /// Preset used to fill any empty team list
    #[serde(default)]
    pub formation: Option<Formation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldResponse {
    pub schema_version: u8,
    pub model: ModelKind,
    pub team: Team,
    pub nx: usize,
    pub ny: usize,
    pub x_axis: Vec<f64>,
    pub y_axis: Vec<f64>,
    /// `None` when the field is undefined for this request
    pub values: Option<Vec<f64>>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl FieldRequest {
    fn squads(&self) -> Squads {
        let mut squads = Squads::new(self.home.clone(), self.away.clone());
        if let Some(formation) = self.formation {
            if squads.home.is_empty() {
                squads.home = formation.home_agents();
            }
            if squads.away.is_empty() {
                squads.away = formation.away_agents();
            }
        }
        squads
    }

    /// Request values layered over `base`: explicit params, then the
    /// named preset, then the base params.
    fn config(&self, base: &FieldConfig) -> Result<FieldConfig, FieldError> {
        let params = match (self.params, self.preset.as_deref()) {
            (Some(params), _) => params,
            (None, Some(name)) => ModelParams::preset(name).ok_or_else(|| {
                FieldError::InvalidConfig(format!(
                    "unknown preset '{name}', expected one of {:?}",
                    ModelParams::PRESET_NAMES
                ))
            })?,
            (None, None) => base.params,
        };
        Ok(FieldConfig {
            params,
            pitch: self.pitch.unwrap_or(base.pitch),
            resolution: self.resolution.unwrap_or(base.resolution),
        })
    }
}

/// Compute the response for a parsed request on top of `base`.
pub fn compute_field_response(
    request: &FieldRequest,
    base: &FieldConfig,
) -> Result<FieldResponse, FieldError> {
    let config = request.config(base)?;
    config.validate()?;

    let squads = request.squads();
    let grid = GridAxes::for_pitch(&config.pitch, config.resolution)?;
    let inputs = FieldInputs::new(&squads, &grid)
        .with_optional_ball(request.ball)
        .with_params(config.params)
        .with_pitch(config.pitch);

    let field = compute_field(request.model, &inputs, request.team)?;
    let (min, max) = match field.as_ref().and_then(|f| f.min_max()) {
        Some((lo, hi)) => (Some(lo), Some(hi)),
        None => (None, None),
    };
    let mean = field.as_ref().and_then(Field::mean);

    Ok(FieldResponse {
        schema_version: FIELD_SCHEMA_VERSION,
        model: request.model,
        team: request.team,
        nx: grid.nx(),
        ny: grid.ny(),
        values: field.map(|f| f.values),
        x_axis: grid.x,
        y_axis: grid.y,
        min,
        max,
        mean,
    })
}

/// JSON in, JSON out. Errors come back as `"CODE: message"`.
pub fn compute_field_json(request_json: &str) -> Result<String, String> {
    let request: FieldRequest =
        serde_json::from_str(request_json).map_err(|e| err_code(error_codes::PARSE, e))?;

    if request.schema_version != FIELD_SCHEMA_VERSION {
        return Err(err_code(
            error_codes::SCHEMA,
            format!(
                "unsupported schema_version {}, expected {}",
                request.schema_version, FIELD_SCHEMA_VERSION
            ),
        ));
    }

    let base = field_config_from_env().map_err(|e| {
        warn!("field config from env rejected: {e}");
        err_code(e.code(), e)
    })?;

    let response = compute_field_response(&request, &base).map_err(|e| {
        warn!("field request rejected: {e}");
        err_code(e.code(), e)
    })?;

    debug!(
        "[FieldJson] model={:?} {}x{} defined={}",
        response.model,
        response.nx,
        response.ny,
        response.values.is_some()
    );
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::PARSE, e))
}
